use sqlx::PgPool;

// Mirrors the row mapping in postgres.rs
const CREATE_ORDERS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS orders (\
        id BIGSERIAL PRIMARY KEY, \
        product_ids TEXT NOT NULL, \
        total_price DOUBLE PRECISION NOT NULL, \
        status VARCHAR(50) NOT NULL DEFAULT 'PENDING', \
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()\
    )";

const CREATE_PRODUCTS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS products (\
        id BIGSERIAL PRIMARY KEY, \
        title VARCHAR(255) NOT NULL, \
        description TEXT NOT NULL, \
        price DOUBLE PRECISION NOT NULL\
    )";

/// Create the tables if they do not exist yet. Safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_ORDERS_TABLE, CREATE_PRODUCTS_TABLE] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
