use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynUserQueryRepository, ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, RestockRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse, RestockResponse},
    },
    errors::ServiceError,
    service::ensure_admin,
};
use async_trait::async_trait;
use tracing::info;

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    user_query: DynUserQueryRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, user_query: DynUserQueryRepository) -> Self {
        Self {
            command,
            user_query,
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .command
            .create_product(req)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Product created",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        user_id: i32,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        ensure_admin(&self.user_query, user_id).await?;

        let product = self
            .command
            .update_product(id, req)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Product updated",
            ProductResponse::from(product),
        ))
    }

    async fn delete_product(&self, user_id: i32, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        ensure_admin(&self.user_query, user_id).await?;

        self.command
            .delete_product(id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success("Product deleted", ()))
    }

    async fn restock(
        &self,
        user_id: i32,
        product_id: i32,
        req: &RestockRequest,
    ) -> Result<ApiResponse<RestockResponse>, ServiceError> {
        ensure_admin(&self.user_query, user_id).await?;

        // Checked before any query so a bad amount provably has no side
        // effects.
        if req.amount <= 0 {
            return Err(ServiceError::InvalidAmount(
                "restock amount must be positive".to_string(),
            ));
        }

        let product = self
            .command
            .restock(product_id, req.amount)
            .await
            .map_err(ServiceError::Repo)?;

        info!(
            "✅ Admin {} restocked product {} to {}",
            user_id, product.id, product.stock
        );
        Ok(ApiResponse::success(
            "Product restocked",
            RestockResponse::from(product),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{ProductCommandRepositoryTrait, UserQueryRepositoryTrait};
    use crate::errors::RepositoryError;
    use crate::model::{Product, User, discounted_price};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct RoleFixture {
        role: &'static str,
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for RoleFixture {
        async fn find_by_id(&self, id: i32) -> Result<User, RepositoryError> {
            Ok(User {
                id,
                username: "fixture".into(),
                email: "fixture@example.com".into(),
                password: String::new(),
                role: self.role.to_string(),
                created_at: None,
            })
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn exists_by_username_or_email(
            &self,
            _username: &str,
            _email: &str,
        ) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    #[derive(Default)]
    struct InMemoryProducts {
        stock: Mutex<i32>,
        writes: AtomicUsize,
    }

    impl InMemoryProducts {
        fn product(&self, stock: i32) -> Product {
            Product {
                id: 1,
                category_id: 1,
                name: "Oversized Hoodie".into(),
                brand: "Covernat".into(),
                price: 59_000,
                discount_rate: 0,
                discounted_price: discounted_price(59_000, 0),
                stock,
                image_url: None,
                sku: None,
                created_at: None,
            }
        }
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for InMemoryProducts {
        async fn create_product(
            &self,
            req: &CreateProductRequest,
        ) -> Result<Product, RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            *self.stock.lock().unwrap() = req.stock;
            Ok(self.product(req.stock))
        }

        async fn update_product(
            &self,
            _id: i32,
            _req: &UpdateProductRequest,
        ) -> Result<Product, RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(self.product(*self.stock.lock().unwrap()))
        }

        async fn delete_product(&self, _id: i32) -> Result<(), RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn restock(&self, _product_id: i32, amount: i32) -> Result<Product, RepositoryError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut stock = self.stock.lock().unwrap();
            *stock += amount;
            Ok(self.product(*stock))
        }
    }

    #[tokio::test]
    async fn non_positive_restock_is_rejected_without_side_effects() {
        let repo = Arc::new(InMemoryProducts::default());
        *repo.stock.lock().unwrap() = 10;
        let products =
            ProductCommandService::new(repo.clone(), Arc::new(RoleFixture { role: "admin" }));

        let err = products
            .restock(1, 1, &RestockRequest { amount: -5 })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidAmount(_)));
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
        assert_eq!(*repo.stock.lock().unwrap(), 10);
    }

    #[tokio::test]
    async fn restock_adds_to_stock_for_admins() {
        let repo = Arc::new(InMemoryProducts::default());
        *repo.stock.lock().unwrap() = 4;
        let products =
            ProductCommandService::new(repo.clone(), Arc::new(RoleFixture { role: "admin" }));

        let response = products
            .restock(1, 1, &RestockRequest { amount: 6 })
            .await
            .expect("restock");

        assert_eq!(response.data.new_stock, 10);
    }

    #[tokio::test]
    async fn non_admin_cannot_restock() {
        let repo = Arc::new(InMemoryProducts::default());
        let products =
            ProductCommandService::new(repo.clone(), Arc::new(RoleFixture { role: "user" }));

        let err = products
            .restock(1, 1, &RestockRequest { amount: 6 })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_admin_cannot_delete() {
        let repo = Arc::new(InMemoryProducts::default());
        let products =
            ProductCommandService::new(repo.clone(), Arc::new(RoleFixture { role: "user" }));

        let err = products.delete_product(1, 1).await.unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
    }
}
