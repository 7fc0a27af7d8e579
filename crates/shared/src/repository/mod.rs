pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod report;
pub mod user;

pub use self::cart::CartRepository;
pub use self::category::CategoryRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::report::ReportQueryRepository;
pub use self::user::UserRepository;
