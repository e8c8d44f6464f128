pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;

use std::sync::Arc;

use anyhow::Result;
use infrastructure::postgres::{postgres_connection, repositories::orders::OrderPostgres};
use tracing::info;

/// Builds the order store from `DATABASE_URL` / `DATABASE_MAX_POOL_SIZE`.
pub fn order_store_from_env() -> Result<OrderPostgres> {
    let dotenvy_env = config::config_loader::load()?;
    info!("ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database)?;
    info!(
        max_pool_size = dotenvy_env.database.max_pool_size,
        "Postgres connection has been established"
    );

    Ok(OrderPostgres::new(Arc::new(postgres_pool)))
}
