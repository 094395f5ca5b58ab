use async_trait::async_trait;

use crate::domain::storage::StorageError;
use super::entity::{Product, ProductId};

#[async_trait]
pub trait CreateProductRepository: Send + Sync {
    async fn save(&self, product: Product) -> Result<ProductId, StorageError>;
}
