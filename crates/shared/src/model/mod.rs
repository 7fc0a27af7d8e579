mod cart_item;
mod category;
mod order;
mod order_item;
mod product;
mod report;
mod user;

pub use self::cart_item::CartItem;
pub use self::category::Category;
pub use self::order::Order;
pub use self::order_item::OrderItem;
pub use self::product::{Product, discounted_price};
pub use self::report::{ProductStatsRow, SalesHistoryRow, TopSalesRow};
pub use self::user::User;
