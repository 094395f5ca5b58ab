use actix_web::{web, HttpResponse};
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::order::{CreateOrderError, CreateOrderRequest};
use crate::metrics::{REASON_PERSISTENCE, REASON_VALIDATION};
use super::error::ApiError;
use super::AppState;

const ROUTE: &str = "/api/order";

/// `POST /api/order` - 201 with an empty body once the order is stored
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let metrics = &state.metrics;
    let _timer = metrics.http_request_duration.with_label_values(&[ROUTE]).start_timer();
    let span = tracing::info_span!("create_order", request_id = %Uuid::new_v4());

    match state.create_order.execute(body.into_inner()).instrument(span).await {
        Ok(_) => {
            metrics.orders_created.inc();
            Ok(HttpResponse::Created().finish())
        }
        Err(e) => {
            let reason = match e {
                CreateOrderError::Validation(_) => REASON_VALIDATION,
                CreateOrderError::Persistence => REASON_PERSISTENCE,
            };
            metrics.orders_rejected.with_label_values(&[reason]).inc();
            Err(e.into())
        }
    }
}
