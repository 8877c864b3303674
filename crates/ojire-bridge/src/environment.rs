//! Deployment Environments
//!
//! Maps each Ojire deployment environment to its fixed origins.

use serde::{Deserialize, Serialize};

/// Ojire deployment environment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Sandbox,
    Prod,
}

impl Environment {
    /// Base origin of the hosted payment page
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Prod => "https://pay.ojire.com",
            Environment::Dev => "https://pay-dev.ojire.com",
            Environment::Sandbox => "https://pay-sandbox.ojire.com",
        }
    }

    /// Base origin of the payment-intent API
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Prod => "https://api.ojire.com",
            Environment::Dev => "https://api-dev.ojire.com",
            Environment::Sandbox => "https://api-sandbox.ojire.com",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Environment::Dev => "dev",
            Environment::Sandbox => "sandbox",
            Environment::Prod => "prod",
        }
    }

    /// Parse from a string, falling back to sandbox for unknown values
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" => Environment::Dev,
            "prod" | "production" => Environment::Prod,
            _ => Environment::Sandbox,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Sandbox
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urls_pairwise_distinct() {
        let urls = [
            Environment::Dev.base_url(),
            Environment::Sandbox.base_url(),
            Environment::Prod.base_url(),
        ];
        assert_ne!(urls[0], urls[1]);
        assert_ne!(urls[1], urls[2]);
        assert_ne!(urls[0], urls[2]);
    }

    #[test]
    fn test_base_urls_stable() {
        assert_eq!(Environment::Sandbox.base_url(), "https://pay-sandbox.ojire.com");
        assert_eq!(Environment::Sandbox.base_url(), Environment::Sandbox.base_url());
    }

    #[test]
    fn test_from_str_defaults_to_sandbox() {
        assert_eq!(Environment::from_str("dev"), Environment::Dev);
        assert_eq!(Environment::from_str("PROD"), Environment::Prod);
        assert_eq!(Environment::from_str("staging"), Environment::Sandbox);
    }
}
