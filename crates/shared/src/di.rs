use crate::{
    abstract_trait::{
        DynAuthService, DynCartService, DynCategoryService, DynHashing, DynJwtService,
        DynOrderCommandService, DynOrderQueryService, DynProductCommandService,
        DynProductQueryService, DynReportService,
    },
    config::ConnectionPool,
    repository::{
        CartRepository, CategoryRepository, OrderRepository, ProductRepository,
        ReportQueryRepository, UserRepository,
    },
    service::{
        AuthService, CartService, CategoryService, OrderCommandService, OrderQueryService,
        ProductCommandService, ProductQueryService, ReportService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub category_service: DynCategoryService,
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
    pub cart_service: DynCartService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub report_service: DynReportService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("category_service", &"<CategoryService>")
            .field("product_query_service", &"<ProductQueryService>")
            .field("product_command_service", &"<ProductCommandService>")
            .field("cart_service", &"<CartService>")
            .field("order_query_service", &"<OrderQueryService>")
            .field("order_command_service", &"<OrderCommandService>")
            .field("report_service", &"<ReportService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hash: DynHashing, jwt: DynJwtService) -> Self {
        let user_repository = UserRepository::new(pool.clone());
        let category_repository = CategoryRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let cart_repository = CartRepository::new(pool.clone());
        let order_repository = OrderRepository::new(pool.clone());
        let report_repository = Arc::new(ReportQueryRepository::new(pool));

        let auth_service = Arc::new(AuthService::new(
            hash,
            jwt,
            user_repository.query.clone(),
            user_repository.command,
        )) as DynAuthService;

        let category_service = Arc::new(CategoryService::new(
            category_repository.query,
            category_repository.command,
        )) as DynCategoryService;

        let product_query_service =
            Arc::new(ProductQueryService::new(product_repository.query)) as DynProductQueryService;

        let product_command_service = Arc::new(ProductCommandService::new(
            product_repository.command,
            user_repository.query.clone(),
        )) as DynProductCommandService;

        let cart_service = Arc::new(CartService::new(
            cart_repository.query,
            cart_repository.command,
        )) as DynCartService;

        let order_query_service =
            Arc::new(OrderQueryService::new(order_repository.query)) as DynOrderQueryService;

        let order_command_service =
            Arc::new(OrderCommandService::new(order_repository.command))
                as DynOrderCommandService;

        let report_service = Arc::new(ReportService::new(
            report_repository,
            user_repository.query.clone(),
        )) as DynReportService;

        Self {
            auth_service,
            category_service,
            product_query_service,
            product_command_service,
            cart_service,
            order_query_service,
            order_command_service,
            report_service,
        }
    }
}
