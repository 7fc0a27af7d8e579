use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::CreateOrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        caller_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        if caller_id != req.user_id {
            return Err(ServiceError::Unauthorized(
                "orders can only be placed for your own account".to_string(),
            ));
        }

        let (order, items) = self
            .command
            .create_order(req.user_id, req.total_price, &req.items)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ Order {} placed by user {}", order.id, order.user_id);
        Ok(ApiResponse::success(
            "Order created",
            OrderResponse::from_parts(order, items),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::OrderCommandRepositoryTrait;
    use crate::domain::requests::CreateOrderItemRequest;
    use crate::errors::RepositoryError;
    use crate::model::{CartItem, Order, OrderItem};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    struct LedgerState {
        // product_id -> (price, stock)
        products: HashMap<i32, (i64, i32)>,
        cart: Vec<CartItem>,
        next_order_id: i32,
    }

    // Emulates the single finalize transaction: all lines are validated
    // before anything is applied, so a failing line leaves no trace.
    struct InMemoryLedger {
        state: Mutex<LedgerState>,
    }

    impl InMemoryLedger {
        fn new(products: &[(i32, i64, i32)], cart: &[(i32, i32, i32)]) -> Arc<Self> {
            Arc::new(Self {
                state: Mutex::new(LedgerState {
                    products: products
                        .iter()
                        .map(|&(id, price, stock)| (id, (price, stock)))
                        .collect(),
                    cart: cart
                        .iter()
                        .enumerate()
                        .map(|(idx, &(user_id, product_id, quantity))| CartItem {
                            id: idx as i32 + 1,
                            user_id,
                            product_id,
                            quantity,
                        })
                        .collect(),
                    next_order_id: 1,
                }),
            })
        }

        fn stock_of(&self, product_id: i32) -> i32 {
            self.state.lock().unwrap().products[&product_id].1
        }

        fn cart_len(&self, user_id: i32) -> usize {
            self.state
                .lock()
                .unwrap()
                .cart
                .iter()
                .filter(|item| item.user_id == user_id)
                .count()
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for InMemoryLedger {
        async fn create_order(
            &self,
            user_id: i32,
            total_price: i64,
            items: &[CreateOrderItemRequest],
        ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
            let mut state = self.state.lock().unwrap();

            let cart_items: Vec<CartItem> = state
                .cart
                .iter()
                .filter(|item| item.user_id == user_id)
                .cloned()
                .collect();

            let order_id = state.next_order_id;
            let mut order_items = Vec::new();

            if !cart_items.is_empty() {
                for (idx, cart_item) in cart_items.iter().enumerate() {
                    let (price, _) = *state
                        .products
                        .get(&cart_item.product_id)
                        .ok_or(RepositoryError::NotFound)?;
                    order_items.push(OrderItem {
                        id: idx as i32 + 1,
                        order_id,
                        product_id: cart_item.product_id,
                        quantity: cart_item.quantity,
                        price,
                    });
                }
                state.cart.retain(|item| item.user_id != user_id);
            } else {
                for line in items {
                    let (_, stock) = *state
                        .products
                        .get(&line.product_id)
                        .ok_or(RepositoryError::NotFound)?;
                    if stock < line.quantity {
                        return Err(RepositoryError::InsufficientStock {
                            requested: line.quantity,
                            available: stock,
                        });
                    }
                }
                for (idx, line) in items.iter().enumerate() {
                    let entry = state.products.get_mut(&line.product_id).unwrap();
                    entry.1 -= line.quantity;
                    order_items.push(OrderItem {
                        id: idx as i32 + 1,
                        order_id,
                        product_id: line.product_id,
                        quantity: line.quantity,
                        price: line.price,
                    });
                }
            }

            state.next_order_id += 1;
            Ok((
                Order {
                    id: order_id,
                    user_id,
                    total_price,
                    status: "paid".to_string(),
                    order_date: None,
                },
                order_items,
            ))
        }
    }

    fn request(user_id: i32, total_price: i64, items: &[(i32, i32, i64)]) -> CreateOrderRequest {
        CreateOrderRequest {
            user_id,
            total_price,
            items: items
                .iter()
                .map(|&(product_id, quantity, price)| CreateOrderItemRequest {
                    product_id,
                    quantity,
                    price,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn placing_an_order_for_someone_else_is_unauthorized() {
        let ledger = InMemoryLedger::new(&[], &[]);
        let orders = OrderCommandService::new(ledger.clone());

        let err = orders
            .create_order(1, &request(2, 1_000, &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn cart_checkout_snapshots_prices_and_clears_the_cart() {
        // Stock already reserved at add-to-cart time, so finalize must not
        // touch it.
        let ledger = InMemoryLedger::new(
            &[(7, 59_000, 3), (8, 12_000, 5)],
            &[(1, 7, 2), (1, 8, 1)],
        );
        let orders = OrderCommandService::new(ledger.clone());

        let response = orders
            .create_order(1, &request(1, 130_000, &[]))
            .await
            .expect("create order");

        let data = &response.data;
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[0].quantity, 2);
        assert_eq!(data.items[0].price, 59_000);
        assert_eq!(data.items[1].quantity, 1);
        assert_eq!(data.items[1].price, 12_000);

        assert_eq!(ledger.cart_len(1), 0);
        assert_eq!(ledger.stock_of(7), 3);
        assert_eq!(ledger.stock_of(8), 5);
    }

    #[tokio::test]
    async fn direct_order_decrements_stock() {
        let ledger = InMemoryLedger::new(&[(7, 59_000, 10)], &[]);
        let orders = OrderCommandService::new(ledger.clone());

        let response = orders
            .create_order(1, &request(1, 118_000, &[(7, 2, 59_000)]))
            .await
            .expect("create order");

        assert_eq!(response.data.items.len(), 1);
        assert_eq!(ledger.stock_of(7), 8);
    }

    #[tokio::test]
    async fn direct_order_aborts_whole_order_on_short_stock() {
        let ledger = InMemoryLedger::new(&[(7, 59_000, 10), (8, 12_000, 1)], &[]);
        let orders = OrderCommandService::new(ledger.clone());

        let err = orders
            .create_order(1, &request(1, 0, &[(7, 2, 59_000), (8, 5, 12_000)]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::InsufficientStock { .. })
        ));
        // Nothing was applied, including the line that had enough stock.
        assert_eq!(ledger.stock_of(7), 10);
        assert_eq!(ledger.stock_of(8), 1);
    }
}
