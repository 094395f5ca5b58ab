use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::order::{CreateOrderRepository, Order, OrderId};
use crate::domain::product::{CreateProductRepository, Product, ProductId};
use crate::domain::StorageError;

// ============================================================================
// In-Memory Repositories
// ============================================================================
//
// Ids are assigned sequentially from 1, like a SERIAL column.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored order, in insertion order
    pub async fn orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl CreateOrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> Result<OrderId, StorageError> {
        let mut orders = self.orders.lock().await;
        let id = OrderId(orders.len() as i64 + 1);
        orders.push(order.with_id(id));

        tracing::debug!(order_id = %id, "Order stored in memory");
        Ok(id)
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn products(&self) -> Vec<Product> {
        self.products.lock().await.clone()
    }
}

#[async_trait]
impl CreateProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<ProductId, StorageError> {
        let mut products = self.products.lock().await;
        let id = ProductId(products.len() as i64 + 1);
        products.push(product.with_id(id));

        tracing::debug!(product_id = %id, "Product stored in memory");
        Ok(id)
    }
}
