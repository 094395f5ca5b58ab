// ============================================================================
// Order Service
// ============================================================================
//
// - domain:      entities, business rules, use cases and repository ports
// - persistence: PostgreSQL and in-memory repository implementations
// - http:        actix-web routes translating use-case outcomes to responses
// - metrics:     Prometheus registry and the /metrics, /health handlers
// - config:      CLI / environment configuration
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod http;
pub mod metrics;
pub mod persistence;
