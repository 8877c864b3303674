//! Payment-Intent Wire Types
//!
//! Request and response bodies for `POST /v1/payment-intents`, plus the
//! bridge into an embedding context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ojire_bridge::{Environment, PaymentContext};

/// Request to create a payment intent.
///
/// Amounts are integer minor units of `currency` (e.g. 7_499_000 IDR);
/// the API never sees fractional values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntent {
    /// Amount in minor units
    pub amount: i64,

    /// ISO 4217 currency code
    pub currency: String,

    /// Merchant the intent is created for
    pub merchant_id: Uuid,

    /// Customer identifier on the merchant's side
    pub customer_id: String,

    /// Free-form description shown on the payment page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Merchant metadata echoed back on outcome signals
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl CreatePaymentIntent {
    pub fn new(
        amount: i64,
        currency: impl Into<String>,
        merchant_id: Uuid,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            merchant_id,
            customer_id: customer_id.into(),
            description: None,
            metadata: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A created payment intent, as returned by the API
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// Intent identifier, used in the payment-page URL path
    pub id: String,

    /// Secret delivered to the page during the INIT handshake
    pub client_secret: String,

    /// Customer token delivered to the page during the INIT handshake
    pub customer_token: String,
}

impl PaymentIntent {
    /// Build the embedding context for this intent.
    pub fn into_context(
        self,
        public_key: impl Into<String>,
        environment: Environment,
    ) -> PaymentContext {
        PaymentContext::new(
            self.id,
            self.client_secret,
            public_key,
            self.customer_token,
            environment,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let merchant = Uuid::parse_str("55f85496-643b-4181-9d8f-22e7ee7c7c88").unwrap();
        let request = CreatePaymentIntent::new(7_499_000, "IDR", merchant, "customer_test_123")
            .with_description("Test payment")
            .with_metadata("orderId", "order_456");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 7_499_000_i64,
                "currency": "IDR",
                "merchantId": "55f85496-643b-4181-9d8f-22e7ee7c7c88",
                "customerId": "customer_test_123",
                "description": "Test payment",
                "metadata": {"orderId": "order_456"},
            })
        );
    }

    #[test]
    fn test_intent_decodes_camel_case() {
        let intent: PaymentIntent = serde_json::from_value(json!({
            "id": "pay_123",
            "clientSecret": "cs_1",
            "customerToken": "tok_1",
        }))
        .unwrap();
        assert_eq!(intent.id, "pay_123");

        let ctx = intent.into_context("pk_1", Environment::Sandbox);
        assert_eq!(ctx.target_url(), "https://pay-sandbox.ojire.com/pay/pay_123");
        assert_eq!(ctx.client_secret, "cs_1");
        assert_eq!(ctx.customer_token, "tok_1");
    }
}
