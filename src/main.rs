use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_service::config::{AppConfig, StorageBackend};
use order_service::domain::order::{CreateOrderRepository, CreateOrderUseCase};
use order_service::domain::product::{CreateProductRepository, CreateProductUseCase};
use order_service::http::{run_server, AppState};
use order_service::metrics::Metrics;
use order_service::persistence::{self, InMemoryOrderRepository, InMemoryProductRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_service=debug"))
        )
        .init();

    let config = AppConfig::parse();
    config.validate()?;

    tracing::info!("🚀 Starting order service");

    // === 1. Storage backend ===
    let (orders, products): (Arc<dyn CreateOrderRepository>, Arc<dyn CreateProductRepository>) =
        match (config.storage, config.database()) {
            (StorageBackend::Postgres, Some(db)) => {
                let pool = persistence::connect(&db).await?;
                persistence::ensure_schema(&pool).await?;
                (
                    Arc::new(persistence::PostgresOrderRepository::new(pool.clone())),
                    Arc::new(persistence::PostgresProductRepository::new(pool)),
                )
            }
            (StorageBackend::Postgres, None) => {
                anyhow::bail!("postgres storage selected without a database URL")
            }
            (StorageBackend::Memory, _) => {
                tracing::warn!("Using in-memory storage, data is lost on restart");
                (
                    Arc::new(InMemoryOrderRepository::new()),
                    Arc::new(InMemoryProductRepository::new()),
                )
            }
        };

    // === 2. Metrics ===
    let metrics = Arc::new(Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    // === 3. Use cases + HTTP ===
    let state = AppState {
        create_order: CreateOrderUseCase::new(orders),
        create_product: CreateProductUseCase::new(products),
        metrics,
    };

    run_server(state, &config.http_host, config.http_port).await?;

    tracing::info!("Order service stopped");
    Ok(())
}
