use std::sync::Arc;

use super::commands::CreateOrderRequest;
use super::entity::Order;
use super::errors::{CreateOrderError, OrderValidationError};
use super::repository::CreateOrderRepository;
use super::value_objects::OrderId;

// ============================================================================
// Create Order Use Case
// ============================================================================
//
// Orchestrates: Request → Validation → Order (PENDING) → Repository
//
// Checks run in a fixed order and stop at the first violation. Nothing is
// written unless every check passed, and `save` is attempted exactly once.
//
// ============================================================================

pub const MIN_PRODUCTS: usize = 1;
pub const MAX_PRODUCTS: usize = 5;
pub const MIN_TOTAL_PRICE: f64 = 2.0;
pub const MAX_TOTAL_PRICE: f64 = 500.0;

pub struct CreateOrderUseCase {
    repository: Arc<dyn CreateOrderRepository>,
}

impl CreateOrderUseCase {
    pub fn new(repository: Arc<dyn CreateOrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: CreateOrderRequest) -> Result<OrderId, CreateOrderError> {
        if let Err(violation) = validate(&request) {
            tracing::warn!(
                product_count = request.product_ids.len(),
                total_price = request.total_price,
                reason = %violation,
                "Order rejected"
            );
            return Err(violation.into());
        }

        let order = Order::pending(request.product_ids, request.total_price);
        let product_count = order.product_ids.len();

        match self.repository.save(order).await {
            Ok(order_id) => {
                tracing::info!(
                    order_id = %order_id,
                    product_count,
                    total_price = request.total_price,
                    "Order created"
                );
                Ok(order_id)
            }
            Err(e) => {
                // The cause stays in the logs; callers only see the generic error
                tracing::error!(error = %e, "Failed to save order");
                Err(CreateOrderError::Persistence)
            }
        }
    }
}

fn validate(request: &CreateOrderRequest) -> Result<(), OrderValidationError> {
    let count = request.product_ids.len();
    if count < MIN_PRODUCTS {
        return Err(OrderValidationError::TooFewProducts);
    }
    if count > MAX_PRODUCTS {
        return Err(OrderValidationError::TooManyProducts);
    }

    // NaN compares false both ways, treat it as below the floor
    let price = request.total_price;
    if price.is_nan() || price < MIN_TOTAL_PRICE {
        return Err(OrderValidationError::TotalPriceTooLow);
    }
    if price > MAX_TOTAL_PRICE {
        return Err(OrderValidationError::TotalPriceTooHigh);
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::domain::storage::StorageError;
    use crate::persistence::InMemoryOrderRepository;
    use async_trait::async_trait;
    use chrono::Utc;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FailingRepository {
        calls: AtomicU32,
    }

    impl FailingRepository {
        fn new() -> Self {
            Self { calls: AtomicU32::new(0) }
        }
    }

    #[async_trait]
    impl CreateOrderRepository for FailingRepository {
        async fn save(&self, _order: Order) -> Result<OrderId, StorageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::Unavailable("fail repo: connection refused".to_string()))
        }
    }

    fn request(product_ids: Vec<i64>, total_price: f64) -> CreateOrderRequest {
        CreateOrderRequest { product_ids, total_price }
    }

    fn use_case_with_memory() -> (CreateOrderUseCase, Arc<InMemoryOrderRepository>) {
        let repo = Arc::new(InMemoryOrderRepository::new());
        (CreateOrderUseCase::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_order_success() {
        let (use_case, repo) = use_case_with_memory();
        let started = Utc::now();

        let order_id = use_case.execute(request(vec![1, 2, 3], 120.0)).await.unwrap();

        let orders = repo.orders().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, Some(order_id));
        assert_eq!(orders[0].product_ids, vec![1, 2, 3]);
        assert_eq!(orders[0].total_price, 120.0);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert!(orders[0].created_at >= started);
    }

    #[tokio::test]
    async fn test_more_than_five_products_is_rejected() {
        let (use_case, repo) = use_case_with_memory();

        let err = use_case.execute(request(vec![1, 2, 3, 4, 5, 6], 200.0)).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "order cannot contain more than 5 products");
        assert!(repo.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_order_is_rejected() {
        let (use_case, repo) = use_case_with_memory();

        let err = use_case.execute(request(vec![], 100.0)).await.unwrap_err();

        assert_eq!(err.to_string(), "order must contain at least 1 product");
        assert!(repo.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_total_price_too_low_is_rejected() {
        let (use_case, repo) = use_case_with_memory();

        let err = use_case.execute(request(vec![1], 1.0)).await.unwrap_err();

        assert_eq!(err.to_string(), "total price must be ≥ 2");
        assert!(repo.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_total_price_too_high_is_rejected() {
        let (use_case, _repo) = use_case_with_memory();

        let err = use_case.execute(request(vec![1], 500.01)).await.unwrap_err();

        assert_eq!(err.to_string(), "total price must be ≤ 500");
    }

    #[tokio::test]
    async fn test_nan_total_price_is_rejected() {
        let (use_case, _repo) = use_case_with_memory();

        let err = use_case.execute(request(vec![1], f64::NAN)).await.unwrap_err();

        assert!(matches!(
            err,
            CreateOrderError::Validation(OrderValidationError::TotalPriceTooLow)
        ));
    }

    #[tokio::test]
    async fn test_product_count_checked_before_price() {
        let (use_case, _repo) = use_case_with_memory();

        let err = use_case.execute(request(vec![], 1000.0)).await.unwrap_err();
        assert_eq!(err.to_string(), "order must contain at least 1 product");

        let err = use_case.execute(request(vec![1; 6], 0.0)).await.unwrap_err();
        assert_eq!(err.to_string(), "order cannot contain more than 5 products");
    }

    #[tokio::test]
    async fn test_bounds_are_inclusive() {
        let (use_case, repo) = use_case_with_memory();

        use_case.execute(request(vec![1], 2.0)).await.unwrap();
        use_case.execute(request(vec![1, 2, 3, 4, 5], 500.0)).await.unwrap();

        assert_eq!(repo.orders().await.len(), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_is_sanitized() {
        let repo = Arc::new(FailingRepository::new());
        let use_case = CreateOrderUseCase::new(repo.clone());

        let err = use_case.execute(request(vec![1, 2], 50.0)).await.unwrap_err();

        assert!(matches!(err, CreateOrderError::Persistence));
        assert_eq!(err.to_string(), "error while creating the order");
        assert!(!err.to_string().contains("fail repo"));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_validation_failure_never_reaches_storage() {
        let repo = Arc::new(FailingRepository::new());
        let use_case = CreateOrderUseCase::new(repo.clone());

        let err = use_case.execute(request(vec![1], 1.0)).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_identical_requests_create_distinct_orders() {
        let (use_case, repo) = use_case_with_memory();

        let first = use_case.execute(request(vec![4, 4], 30.0)).await.unwrap();
        let second = use_case.execute(request(vec![4, 4], 30.0)).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.orders().await.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let (use_case, repo) = use_case_with_memory();
        let use_case = Arc::new(use_case);

        let mut handles = Vec::new();
        for i in 0..10 {
            let use_case = use_case.clone();
            handles.push(tokio::spawn(async move {
                use_case.execute(request(vec![i], 10.0 + i as f64)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<i64> = repo
            .orders()
            .await
            .iter()
            .filter_map(|o| o.id.map(|id| id.value()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn valid_requests_always_create_pending_orders() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let products = prop::collection::vec(any::<i64>(), MIN_PRODUCTS..=MAX_PRODUCTS);

        proptest!(|(product_ids in products, total_price in MIN_TOTAL_PRICE..=MAX_TOTAL_PRICE)| {
            let (use_case, repo) = use_case_with_memory();
            let invoked_at = Utc::now();
            let orders = rt.block_on(async {
                use_case.execute(request(product_ids.clone(), total_price)).await.unwrap();
                repo.orders().await
            });

            prop_assert_eq!(orders.len(), 1);
            prop_assert_eq!(&orders[0].product_ids, &product_ids);
            prop_assert_eq!(orders[0].status, OrderStatus::Pending);
            prop_assert!(orders[0].created_at >= invoked_at);
        });
    }

    #[test]
    fn out_of_range_requests_never_reach_storage() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let bad_count = prop_oneof![
            Just(Vec::<i64>::new()),
            prop::collection::vec(any::<i64>(), (MAX_PRODUCTS + 1)..20),
        ];

        proptest!(|(product_ids in bad_count, total_price in MIN_TOTAL_PRICE..=MAX_TOTAL_PRICE)| {
            let repo = Arc::new(FailingRepository::new());
            let use_case = CreateOrderUseCase::new(repo.clone());
            let result = rt.block_on(use_case.execute(request(product_ids, total_price)));

            prop_assert!(result.unwrap_err().is_validation());
            prop_assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
        });

        let bad_price = prop_oneof![-1.0e6..MIN_TOTAL_PRICE, (MAX_TOTAL_PRICE + 0.001)..1.0e6];

        proptest!(|(total_price in bad_price)| {
            let repo = Arc::new(FailingRepository::new());
            let use_case = CreateOrderUseCase::new(repo.clone());
            let result = rt.block_on(use_case.execute(request(vec![1, 2], total_price)));

            prop_assert!(result.unwrap_err().is_validation());
            prop_assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
        });
    }
}
