// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::{health_handler, metrics_handler};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Orders and products created
// - Rejections, labelled by reason (validation | persistence)
// - HTTP request latency per route
//
// All metrics are registered with one Registry and scraped via /metrics
// ============================================================================

pub const REASON_VALIDATION: &str = "validation";
pub const REASON_PERSISTENCE: &str = "persistence";

pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub orders_rejected: IntCounterVec,

    pub products_created: IntCounter,
    pub products_rejected: IntCounterVec,

    pub http_request_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let orders_created = IntCounter::new("orders_created_total", "Total orders created")?;
        registry.register(Box::new(orders_created.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Total order creations that failed"),
            &["reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let products_created =
            IntCounter::new("products_created_total", "Total products created")?;
        registry.register(Box::new(products_created.clone()))?;

        let products_rejected = IntCounterVec::new(
            Opts::new("products_rejected_total", "Total product creations that failed"),
            &["reason"],
        )?;
        registry.register(Box::new(products_rejected.clone()))?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["route"],
        )?;
        registry.register(Box::new(http_request_duration.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            orders_rejected,
            products_created,
            products_rejected,
            http_request_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
