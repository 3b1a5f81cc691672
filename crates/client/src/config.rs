//! Client configuration.
//!
//! This module provides configuration for the petstore client, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PETSTORE_API` | https://petstore.swagger.io/v2 | Base URL of the service |
//! | `PETSTORE_REQUEST_TIMEOUT` | 30 | Per-request timeout (seconds) |
//! | `PETSTORE_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use petstore_client::ClientConfig;
//!
//! // Create from environment
//! let config = ClientConfig::from_env();
//!
//! // Or create programmatically
//! let config = ClientConfig {
//!     base_url: "http://localhost:8080/v2".to_string(),
//!     ..Default::default()
//! };
//! ```

use clap::Parser;
use url::Url;

/// The public demo deployment of the petstore service.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Configuration for the petstore client.
///
/// This struct can be constructed from environment variables using
/// [`ClientConfig::from_env`], from command line arguments using
/// [`ClientConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "petstore-verify")]
#[command(about = "Swagger Petstore API conformance verifier")]
pub struct ClientConfig {
    /// Base URL of the petstore service.
    #[arg(long, env = "PETSTORE_API", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "PETSTORE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PETSTORE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// reading command line arguments, so it stays usable inside test
    /// binaries whose argv belongs to the test runner.
    pub fn from_env() -> Self {
        Self::try_parse_from(["petstore-verify"]).unwrap_or_default()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&self.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                errors.push(format!(
                    "Base URL scheme must be http or https, got {:?}",
                    url.scheme()
                ));
            }
            Err(err) => {
                errors.push(format!("Base URL is not a valid URL: {}", err));
            }
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This points at localhost and uses a short timeout so tests fail fast.
    pub fn for_testing() -> Self {
        Self {
            base_url: "http://localhost:0".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            log_level: "debug".to_string(),
        }
    }
}
