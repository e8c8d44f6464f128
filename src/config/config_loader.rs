use anyhow::{Context, Result, bail};

use super::config_model::{Database, DotEnvyConfig};

pub const DEFAULT_MAX_POOL_SIZE: u32 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let database = database_from_values(
        std::env::var("DATABASE_URL").ok(),
        std::env::var("DATABASE_MAX_POOL_SIZE").ok(),
    )?;

    Ok(DotEnvyConfig { database })
}

fn database_from_values(url: Option<String>, max_pool_size: Option<String>) -> Result<Database> {
    let url = url
        .filter(|v| !v.trim().is_empty())
        .context("DATABASE_URL is invalid")?;

    let max_pool_size = match max_pool_size.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_MAX_POOL_SIZE,
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("DATABASE_MAX_POOL_SIZE is invalid (value: {raw})"))?,
    };
    if max_pool_size == 0 {
        bail!("DATABASE_MAX_POOL_SIZE must be greater than zero");
    }

    Ok(Database { url, max_pool_size })
}
