//! Payment Context
//!
//! The immutable credentials and routing data for one embedding.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;

/// Everything one checkout attempt needs: routing (payment id + environment)
/// and the credentials delivered to the page after the READY handshake.
///
/// Constructed once per embedding and never mutated; share it via `Arc`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentContext {
    /// Payment-intent identifier, used in the target URL path
    pub payment_id: String,

    /// Client secret delivered to the page via INIT
    pub client_secret: String,

    /// Publishable merchant key delivered to the page via INIT
    pub public_key: String,

    /// Customer token delivered to the page via INIT
    pub customer_token: String,

    /// Deployment environment the page is hosted in
    #[serde(default)]
    pub environment: Environment,
}

impl PaymentContext {
    pub fn new(
        payment_id: impl Into<String>,
        client_secret: impl Into<String>,
        public_key: impl Into<String>,
        customer_token: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            payment_id: payment_id.into(),
            client_secret: client_secret.into(),
            public_key: public_key.into(),
            customer_token: customer_token.into(),
            environment,
        }
    }

    /// Full URL of the hosted payment page for this context
    pub fn target_url(&self) -> String {
        format!("{}/pay/{}", self.environment.base_url(), self.payment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url() {
        let ctx = PaymentContext::new(
            "pay_123",
            "cs_secret",
            "pk_test",
            "tok_customer",
            Environment::Sandbox,
        );
        assert_eq!(ctx.target_url(), "https://pay-sandbox.ojire.com/pay/pay_123");
    }
}
