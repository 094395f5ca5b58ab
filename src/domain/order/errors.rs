// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("order must contain at least 1 product")]
    TooFewProducts,

    #[error("order cannot contain more than 5 products")]
    TooManyProducts,

    #[error("total price must be ≥ 2")]
    TotalPriceTooLow,

    #[error("total price must be ≤ 500")]
    TotalPriceTooHigh,
}

/// Failure of the create-order workflow.
///
/// `Persistence` deliberately carries no source: the storage cause is logged
/// by the use case and never handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum CreateOrderError {
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    #[error("error while creating the order")]
    Persistence,
}

impl CreateOrderError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CreateOrderError::Validation(_))
    }
}
