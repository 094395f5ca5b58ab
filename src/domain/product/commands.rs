use serde::Deserialize;

/// Input of the create-product workflow, as parsed from `POST /api/product`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
}
