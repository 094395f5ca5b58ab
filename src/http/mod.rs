// ============================================================================
// HTTP Layer - actix-web routes in front of the use cases
// ============================================================================
//
// POST /api/order    -> CreateOrderUseCase
// POST /api/product  -> CreateProductUseCase
// GET  /health
// GET  /metrics
//
// Handlers share nothing but `AppState`; each request runs its own use-case
// invocation.
//
// ============================================================================

mod error;
mod order;
mod product;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use crate::domain::order::CreateOrderUseCase;
use crate::domain::product::CreateProductUseCase;
use crate::metrics::{health_handler, metrics_handler, Metrics};

pub use error::{ApiError, ErrorBody};

pub struct AppState {
    pub create_order: CreateOrderUseCase,
    pub create_product: CreateProductUseCase,
    pub metrics: Arc<Metrics>,
}

/// Register every route and the JSON body configuration.
///
/// Expects `web::Data<AppState>` and `web::Data<Metrics>` to be provided by the app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(
            web::scope("/api")
                .route("/order", web::post().to(order::create_order))
                .route("/product", web::post().to(product::create_product)),
        )
        .route("/health", web::get().to(health_handler))
        .route("/metrics", web::get().to(metrics_handler));
}

/// Serve the API until the process is stopped
pub async fn run_server(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let metrics = web::Data::from(state.metrics.clone());
    let state = web::Data::new(state);

    tracing::info!("🌐 Starting HTTP server on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(metrics.clone())
            .configure(routes)
    })
    .bind((host, port))?
    .run()
    .await
}

// ============================================================================
// Unit Tests
// ============================================================================
