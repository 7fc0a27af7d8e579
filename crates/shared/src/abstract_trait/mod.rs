mod cart;
mod category;
mod hashing;
mod jwt;
mod order;
mod product;
mod report;
mod user;

pub use self::cart::{
    CartCommandRepositoryTrait, CartQueryRepositoryTrait, CartServiceTrait,
    DynCartCommandRepository, DynCartQueryRepository, DynCartService,
};
pub use self::category::{
    CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait, CategoryServiceTrait,
    DynCategoryCommandRepository, DynCategoryQueryRepository, DynCategoryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::report::{
    DynReportQueryRepository, DynReportService, ReportQueryRepositoryTrait, ReportServiceTrait,
};
pub use self::user::{
    AuthServiceTrait, DynAuthService, DynUserCommandRepository, DynUserQueryRepository,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait,
};
