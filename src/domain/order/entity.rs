use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{OrderId, OrderStatus, ProductRef};

// ============================================================================
// Order Entity
// ============================================================================
//
// Plain domain record. Carries no persistence metadata: the row mapping is
// owned by the storage adapters in crate::persistence.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    // Identity, assigned by storage on save
    pub id: Option<OrderId>,

    pub product_ids: Vec<ProductRef>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a new order in its initial state.
    ///
    /// Business rules are enforced by `CreateOrderUseCase` before this is called.
    pub fn pending(product_ids: Vec<ProductRef>, total_price: f64) -> Self {
        Self {
            id: None,
            product_ids,
            total_price,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Copy of this order carrying the identity assigned by storage
    pub fn with_id(self, id: OrderId) -> Self {
        Self { id: Some(id), ..self }
    }
}
