use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{CatalogError, CatalogStore};
use crate::models::EventRecord;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },

    #[error("Failed to read seed file {}: {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {}: {source}", .path.display())]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Rejected seed file: {0}")]
    SeedRejected(#[from] CatalogError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON array of events replacing the built-in mock catalog.
    pub seed_path: Option<PathBuf>,
    pub cors_allowed_origins: Option<String>,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            seed_path: env::var("EVENTS_SEED_PATH").ok().map(PathBuf::from),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),
            production: env::var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidVar {
            name: "HOST",
            value: self.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Builds the session catalog from the seed file, or the built-in seed.
    pub fn load_catalog(&self) -> Result<CatalogStore, ConfigError> {
        let Some(path) = &self.seed_path else {
            tracing::info!("Catalog: using built-in seed");
            return Ok(CatalogStore::seeded());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.clone(),
            source,
        })?;
        let events: Vec<EventRecord> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), count = events.len(), "Catalog: loaded seed file");
        Ok(CatalogStore::with_seed(events)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_path: None,
            cors_allowed_origins: None,
            production: false,
        }
    }
}
