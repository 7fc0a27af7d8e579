mod auth;
mod cart;
mod category;
mod order;
mod product;
mod report;

pub use self::auth::AuthService;
pub use self::cart::CartService;
pub use self::category::CategoryService;
pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::report::ReportService;

use crate::abstract_trait::DynUserQueryRepository;
use crate::errors::ServiceError;

const ROLE_ADMIN: &str = "admin";

// Admin gate shared by the command and report services. Role lives on the
// users row, not in the token, so a demotion takes effect immediately.
pub(crate) async fn ensure_admin(
    user_query: &DynUserQueryRepository,
    user_id: i32,
) -> Result<(), ServiceError> {
    let user = user_query
        .find_by_id(user_id)
        .await
        .map_err(ServiceError::Repo)?;

    if user.role != ROLE_ADMIN {
        return Err(ServiceError::Forbidden("admin role required".to_string()));
    }

    Ok(())
}
