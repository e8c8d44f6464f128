#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub database: Database,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    pub url: String,
    pub max_pool_size: u32,
}
