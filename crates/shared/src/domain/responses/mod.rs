mod api;
mod cart;
mod category;
mod order;
mod product;
mod report;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::cart::{CartItemResponse, CartResponse, CartTotalResponse};
pub use self::category::CategoryResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::product::ProductResponse;
pub use self::report::{
    ProductStatsResponse, RestockResponse, SalesHistoryResponse, TopProductResponse,
};
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
