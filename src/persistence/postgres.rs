use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::order::{CreateOrderRepository, Order, OrderId, ProductRef};
use crate::domain::product::{CreateProductRepository, Product, ProductId};
use crate::domain::StorageError;

// ============================================================================
// PostgreSQL Repositories
// ============================================================================
//
// Row layout (see schema.rs):
// - orders.product_ids  TEXT, comma-delimited integers ("1,2,3")
// - orders.total_price  DOUBLE PRECISION
// - orders.status       VARCHAR(50), upper-case status name
// - orders.created_at   TIMESTAMPTZ, taken from the entity
//
// The id column is BIGSERIAL and is read back with RETURNING.
//
// ============================================================================

/// Build the shared connection pool
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to PostgreSQL..."
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await
}

/// Encode product references the way they are stored in `orders.product_ids`
pub fn encode_product_ids(product_ids: &[ProductRef]) -> String {
    product_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Inverse of `encode_product_ids`. An empty column decodes to no products.
pub fn decode_product_ids(encoded: &str) -> Result<Vec<ProductRef>, StorageError> {
    if encoded.trim().is_empty() {
        return Ok(Vec::new());
    }

    encoded
        .split(',')
        .map(|segment| segment.trim().parse::<ProductRef>().map_err(StorageError::backend))
        .collect()
}

fn map_sqlx_error(error: sqlx::Error) -> StorageError {
    match error {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StorageError::Unavailable(error.to_string())
        }
        other => StorageError::backend(other),
    }
}

#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreateOrderRepository for PostgresOrderRepository {
    async fn save(&self, order: Order) -> Result<OrderId, StorageError> {
        let row = sqlx::query(
            "INSERT INTO orders (product_ids, total_price, status, created_at) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(encode_product_ids(&order.product_ids))
        .bind(order.total_price)
        .bind(order.status.as_str())
        .bind(order.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;

        tracing::debug!(order_id = id, "Order row inserted");
        Ok(OrderId(id))
    }
}

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreateProductRepository for PostgresProductRepository {
    async fn save(&self, product: Product) -> Result<ProductId, StorageError> {
        let row = sqlx::query(
            "INSERT INTO products (title, description, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;

        tracing::debug!(product_id = id, "Product row inserted");
        Ok(ProductId(id))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
