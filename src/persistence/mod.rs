// ============================================================================
// Persistence - Storage adapters for the domain repository ports
// ============================================================================
//
// - postgres: sqlx-backed repositories and the entity <-> row mapping
// - schema:   idempotent table creation run at start-up
// - memory:   process-local repositories (tests, `memory` backend)
//
// ============================================================================

mod memory;
mod postgres;
mod schema;

pub use memory::{InMemoryOrderRepository, InMemoryProductRepository};
pub use postgres::{
    connect, decode_product_ids, encode_product_ids, PostgresOrderRepository,
    PostgresProductRepository,
};
pub use schema::ensure_schema;
