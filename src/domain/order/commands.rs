use serde::Deserialize;

use super::value_objects::ProductRef;

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

/// Input of the create-order workflow, as parsed from `POST /api/order`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_ids: Vec<ProductRef>,
    pub total_price: f64,
}
