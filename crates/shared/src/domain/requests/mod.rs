mod auth;
mod cart;
mod category;
mod order;
mod product;
mod report;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::cart::AddCartItemRequest;
pub use self::category::CreateCategoryRequest;
pub use self::order::{CreateOrderItemRequest, CreateOrderRequest};
pub use self::product::{CreateProductRequest, RestockRequest, UpdateProductRequest};
pub use self::report::{SalesHistoryQuery, TopSalesQuery};
