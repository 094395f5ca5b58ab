#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductValidationError {
    #[error("price must be ≥ 0")]
    PriceTooLow,

    #[error("price must be ≤ 10000")]
    PriceTooHigh,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateProductError {
    #[error(transparent)]
    Validation(#[from] ProductValidationError),

    #[error("error while creating the product")]
    Persistence,
}

impl CreateProductError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CreateProductError::Validation(_))
    }
}
