//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to local-development defaults:
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `PIXEL_CATALOG_PATH` - Product catalog JSON file
//!   (default: crates/storefront/data/products.json)
//! - `PIXEL_CART_PATH` - Durable cart slot (default: data/cart.json)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CATALOG_PATH: &str = "crates/storefront/data/products.json";
const DEFAULT_CART_PATH: &str = "data/cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the product catalog JSON file
    pub catalog_path: PathBuf,
    /// Path to the durable cart storage slot
    pub cart_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or("STOREFRONT_HOST", DEFAULT_HOST)?;
        let port = parse_env_or("STOREFRONT_PORT", &DEFAULT_PORT.to_string())?;
        let catalog_path = env_or("PIXEL_CATALOG_PATH", DEFAULT_CATALOG_PATH).into();
        let cart_path = env_or("PIXEL_CART_PATH", DEFAULT_CART_PATH).into();

        Ok(Self {
            host,
            port,
            catalog_path,
            cart_path,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            catalog_path: DEFAULT_CATALOG_PATH.into(),
            cart_path: DEFAULT_CART_PATH.into(),
        }
    }
}

/// Read an environment variable, falling back to a default when unset.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default when
/// unset.
fn parse_env_or<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(name, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
}
