use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub blob_dir: Option<String>,
    pub admin_secret: Option<String>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            blob_dir: std::env::var("BLOB_DIR")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            admin_secret: std::env::var("ADMIN_SECRET")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
