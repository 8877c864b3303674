//! Client Configuration

use ojire_bridge::Environment;

use crate::error::{ClientError, Result};

/// Payment-intent API configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Merchant secret key, sent as `X-Secret-Key`
    pub secret_key: String,

    /// Deployment environment the API is resolved from
    pub environment: Environment,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(secret_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            secret_key: secret_key.into(),
            environment,
            timeout_secs: 30,
        }
    }

    /// Create from environment variables.
    ///
    /// `OJIRE_SECRET_KEY` is required; `OJIRE_ENV` defaults to sandbox.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("OJIRE_SECRET_KEY")
            .map_err(|_| ClientError::Config("OJIRE_SECRET_KEY not set".into()))?;
        let environment = std::env::var("OJIRE_ENV")
            .map(|v| Environment::from_str(&v))
            .unwrap_or_default();

        Ok(Self::new(secret_key, environment))
    }
}
