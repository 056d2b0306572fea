use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://dogwalkers.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Run the demo routine after connecting
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            seed_demo: env::var("SEED_DEMO").is_ok(),
        }
    }
}
