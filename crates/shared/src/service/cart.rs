use crate::{
    abstract_trait::{CartServiceTrait, DynCartCommandRepository, DynCartQueryRepository},
    domain::{
        requests::AddCartItemRequest,
        responses::{ApiResponse, CartItemResponse, CartResponse, CartTotalResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct CartService {
    query: DynCartQueryRepository,
    command: DynCartCommandRepository,
}

impl CartService {
    pub fn new(query: DynCartQueryRepository, command: DynCartCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn add_to_cart(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        let item = self
            .command
            .reserve(user_id, req.product_id, req.quantity)
            .await
            .map_err(ServiceError::Repo)?;

        info!(
            "🛒 User {} holds {} x product {}",
            user_id, item.quantity, item.product_id
        );
        Ok(ApiResponse::success(
            "Item added to cart",
            CartItemResponse::from(item),
        ))
    }

    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let items = self
            .query
            .find_by_user(user_id)
            .await
            .map_err(ServiceError::Repo)?;

        let total_items = items.iter().map(|item| item.quantity as i64).sum();
        let items = items.into_iter().map(CartItemResponse::from).collect();

        Ok(ApiResponse::success(
            "Cart contents",
            CartResponse { items, total_items },
        ))
    }

    async fn total_quantity(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<CartTotalResponse>, ServiceError> {
        let items = self
            .query
            .find_by_user(user_id)
            .await
            .map_err(ServiceError::Repo)?;

        let total_quantity = items.iter().map(|item| item.quantity as i64).sum();

        Ok(ApiResponse::success(
            "Cart total quantity",
            CartTotalResponse { total_quantity },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{CartCommandRepositoryTrait, CartQueryRepositoryTrait};
    use crate::errors::RepositoryError;
    use crate::model::CartItem;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    struct StoreState {
        stock: HashMap<i32, i32>,
        items: Vec<CartItem>,
        next_id: i32,
    }

    // Stand-in for the product/cart tables. A single mutex plays the role of
    // the row lock: check and decrement happen under one acquisition, which
    // is exactly the contract the SQL implementation provides per product.
    struct InMemoryCartStore {
        state: Mutex<StoreState>,
    }

    impl InMemoryCartStore {
        fn with_stock(stock: &[(i32, i32)]) -> Arc<Self> {
            Arc::new(Self {
                state: Mutex::new(StoreState {
                    stock: stock.iter().copied().collect(),
                    items: Vec::new(),
                    next_id: 1,
                }),
            })
        }

        fn stock_of(&self, product_id: i32) -> i32 {
            self.state.lock().unwrap().stock[&product_id]
        }
    }

    #[async_trait]
    impl CartQueryRepositoryTrait for InMemoryCartStore {
        async fn find_by_user(&self, user_id: i32) -> Result<Vec<CartItem>, RepositoryError> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .items
                .iter()
                .filter(|item| item.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl CartCommandRepositoryTrait for InMemoryCartStore {
        async fn reserve(
            &self,
            user_id: i32,
            product_id: i32,
            quantity: i32,
        ) -> Result<CartItem, RepositoryError> {
            let mut state = self.state.lock().unwrap();

            let available = *state
                .stock
                .get(&product_id)
                .ok_or(RepositoryError::NotFound)?;
            if available < quantity {
                return Err(RepositoryError::InsufficientStock {
                    requested: quantity,
                    available,
                });
            }
            state.stock.insert(product_id, available - quantity);

            if let Some(item) = state
                .items
                .iter_mut()
                .find(|item| item.user_id == user_id && item.product_id == product_id)
            {
                item.quantity += quantity;
                return Ok(item.clone());
            }

            let item = CartItem {
                id: state.next_id,
                user_id,
                product_id,
                quantity,
            };
            state.next_id += 1;
            state.items.push(item.clone());
            Ok(item)
        }
    }

    fn service(store: &Arc<InMemoryCartStore>) -> Arc<CartService> {
        Arc::new(CartService::new(store.clone(), store.clone()))
    }

    #[tokio::test]
    async fn repeated_adds_accumulate_into_one_item() {
        let store = InMemoryCartStore::with_stock(&[(7, 10)]);
        let cart = service(&store);

        cart.add_to_cart(1, &AddCartItemRequest { product_id: 7, quantity: 2 })
            .await
            .expect("first add");
        let second = cart
            .add_to_cart(1, &AddCartItemRequest { product_id: 7, quantity: 3 })
            .await
            .expect("second add");

        assert_eq!(second.data.quantity, 5);
        assert_eq!(store.stock_of(7), 5);

        let contents = cart.get_cart(1).await.expect("get cart");
        assert_eq!(contents.data.items.len(), 1);
        assert_eq!(contents.data.total_items, 5);
    }

    #[tokio::test]
    async fn reserve_fails_when_stock_is_short() {
        let store = InMemoryCartStore::with_stock(&[(7, 4)]);
        let cart = service(&store);

        let err = cart
            .add_to_cart(1, &AddCartItemRequest { product_id: 7, quantity: 5 })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::InsufficientStock {
                requested: 5,
                available: 4,
            })
        ));
        assert_eq!(store.stock_of(7), 4);
    }

    #[tokio::test]
    async fn reserve_unknown_product_is_not_found() {
        let store = InMemoryCartStore::with_stock(&[]);
        let cart = service(&store);

        let err = cart
            .add_to_cart(1, &AddCartItemRequest { product_id: 99, quantity: 1 })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn concurrent_reserves_cannot_both_win_the_last_units() {
        let store = InMemoryCartStore::with_stock(&[(7, 10)]);
        let cart = service(&store);

        let first = {
            let cart = cart.clone();
            tokio::spawn(async move {
                cart.add_to_cart(1, &AddCartItemRequest { product_id: 7, quantity: 6 })
                    .await
            })
        };
        let second = {
            let cart = cart.clone();
            tokio::spawn(async move {
                cart.add_to_cart(2, &AddCartItemRequest { product_id: 7, quantity: 6 })
                    .await
            })
        };

        let outcomes = [first.await.unwrap(), second.await.unwrap()];
        let successes = outcomes.iter().filter(|o| o.is_ok()).count();

        assert_eq!(successes, 1);
        assert_eq!(store.stock_of(7), 4);
    }

    #[tokio::test]
    async fn final_stock_accounts_for_every_successful_reserve() {
        let store = InMemoryCartStore::with_stock(&[(7, 10)]);
        let cart = service(&store);

        let mut handles = Vec::new();
        for user_id in 0..20 {
            let cart = cart.clone();
            handles.push(tokio::spawn(async move {
                cart.add_to_cart(user_id, &AddCartItemRequest { product_id: 7, quantity: 1 })
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 10);
        assert_eq!(store.stock_of(7), 0);
    }
}
