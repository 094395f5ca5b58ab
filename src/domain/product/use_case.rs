use std::sync::Arc;

use super::commands::CreateProductRequest;
use super::entity::{Product, ProductId};
use super::errors::{CreateProductError, ProductValidationError};
use super::repository::CreateProductRepository;

pub const MIN_PRICE: f64 = 0.0;
pub const MAX_PRICE: f64 = 10_000.0;

pub struct CreateProductUseCase {
    repository: Arc<dyn CreateProductRepository>,
}

impl CreateProductUseCase {
    pub fn new(repository: Arc<dyn CreateProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductId, CreateProductError> {
        let price = request.price;
        let violation = if price.is_nan() || price < MIN_PRICE {
            Some(ProductValidationError::PriceTooLow)
        } else if price > MAX_PRICE {
            Some(ProductValidationError::PriceTooHigh)
        } else {
            None
        };

        if let Some(violation) = violation {
            tracing::warn!(price, reason = %violation, "Product rejected");
            return Err(violation.into());
        }

        let product = Product::new(request.title, request.description, price);

        let product_id = self.repository.save(product).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save product");
            CreateProductError::Persistence
        })?;

        tracing::info!(product_id = %product_id, "Product created");
        Ok(product_id)
    }
}
