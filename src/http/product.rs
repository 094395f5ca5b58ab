use actix_web::{web, HttpResponse};
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::product::CreateProductRequest;
use crate::metrics::{REASON_PERSISTENCE, REASON_VALIDATION};
use super::error::ApiError;
use super::AppState;

const ROUTE: &str = "/api/product";

/// `POST /api/product`
pub async fn create_product(
    state: web::Data<AppState>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, ApiError> {
    let metrics = &state.metrics;
    let _timer = metrics.http_request_duration.with_label_values(&[ROUTE]).start_timer();
    let span = tracing::info_span!("create_product", request_id = %Uuid::new_v4());

    match state.create_product.execute(body.into_inner()).instrument(span).await {
        Ok(_) => {
            metrics.products_created.inc();
            Ok(HttpResponse::Created().finish())
        }
        Err(e) => {
            let reason = if e.is_validation() { REASON_VALIDATION } else { REASON_PERSISTENCE };
            metrics.products_rejected.with_label_values(&[reason]).inc();
            Err(e.into())
        }
    }
}
