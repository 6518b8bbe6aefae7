//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MMBM_WHATSAPP_NUMBER` - WhatsApp number order hand-offs are sent to
//!   (international format, e.g. 233503561270)
//!
//! ## Optional
//! - `MMBM_HOST` - Bind address (default: 127.0.0.1)
//! - `MMBM_PORT` - Listen port (default: 3000)
//! - `MMBM_BASE_URL` - Public URL for the storefront (default:
//!   `http://localhost:3000`; HTTPS turns on secure session cookies)
//! - `MMBM_SHOP_PHONE` - Public contact phone shown on the contact page
//! - `MMBM_SHOP_EMAIL` - Public contact email
//! - `MMBM_SHOP_ADDRESS` - Physical shop address
//! - `MMBM_SHOP_HOURS` - Opening hours line
//! - `MMBM_BG_REMOVAL_URL` - Endpoint of the external background-removal
//!   service; the logo tool reports itself unavailable when unset

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
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
    /// Public base URL for the storefront
    pub base_url: String,
    /// WhatsApp number that receives order hand-offs
    pub whatsapp_number: String,
    /// Public shop contact details
    pub shop: ShopInfo,
    /// External background-removal service endpoint
    pub background_removal_url: Option<String>,
}

/// Public shop contact details rendered on the contact page and footer.
#[derive(Debug, Clone)]
pub struct ShopInfo {
    /// Shop display name.
    pub name: String,
    /// Public phone number.
    pub phone: String,
    /// Public email address.
    pub email: String,
    /// Physical address.
    pub address: String,
    /// Opening hours line.
    pub hours: String,
}

impl Default for ShopInfo {
    fn default() -> Self {
        Self {
            name: "MMBM Clothing".to_owned(),
            phone: "0509613436".to_owned(),
            email: "Clothingmmbm@gmail.com".to_owned(),
            address: "Accra, Ghana".to_owned(),
            hours: "Mon - Sat, 9am - 7pm".to_owned(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MMBM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MMBM_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("MMBM_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MMBM_PORT".to_owned(), e.to_string()))?;
        let base_url = get_env_or_default("MMBM_BASE_URL", "http://localhost:3000");
        let whatsapp_number = get_required_env("MMBM_WHATSAPP_NUMBER")?;
        let shop = ShopInfo::from_env();
        let background_removal_url = get_optional_env("MMBM_BG_REMOVAL_URL");

        Ok(Self {
            host,
            port,
            base_url,
            whatsapp_number,
            shop,
            background_removal_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopInfo {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: get_env_or_default("MMBM_SHOP_NAME", &defaults.name),
            phone: get_env_or_default("MMBM_SHOP_PHONE", &defaults.phone),
            email: get_env_or_default("MMBM_SHOP_EMAIL", &defaults.email),
            address: get_env_or_default("MMBM_SHOP_ADDRESS", &defaults.address),
            hours: get_env_or_default("MMBM_SHOP_HOURS", &defaults.hours),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_owned(),
            whatsapp_number: "233503561270".to_owned(),
            shop: ShopInfo::default(),
            background_removal_url: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_shop_info_defaults() {
        let shop = ShopInfo::default();
        assert_eq!(shop.name, "MMBM Clothing");
        assert!(!shop.phone.is_empty());
        assert!(shop.email.contains('@'));
    }
}
