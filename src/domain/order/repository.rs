use async_trait::async_trait;

use crate::domain::storage::StorageError;
use super::entity::Order;
use super::value_objects::OrderId;

/// Storage capability required by `CreateOrderUseCase`.
///
/// `save` takes ownership of the order, durably stores it and returns the
/// identity it was given. Implementations must not alter business fields.
#[async_trait]
pub trait CreateOrderRepository: Send + Sync {
    async fn save(&self, order: Order) -> Result<OrderId, StorageError>;
}
