//! Payment-Intent API
//!
//! Strategy trait over the intent-creation endpoint, with the HTTP client
//! and a mock for development and testing.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use ojire_bridge::Environment;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::intent::{CreatePaymentIntent, PaymentIntent};

/// Payment-intent API trait (Strategy pattern)
#[async_trait]
pub trait PaymentIntentApi: Send + Sync {
    /// Create a payment intent for one checkout attempt
    async fn create_payment_intent(&self, request: CreatePaymentIntent) -> Result<PaymentIntent>;

    /// Backend name, for logs
    fn name(&self) -> &str;
}

/// HTTP client for the Ojire payment-intent API
pub struct OjireClient {
    http: reqwest::Client,
    config: ClientConfig,
}

/// Error body the API returns on non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl OjireClient {
    /// Create a new client
    pub fn new(secret_key: &str, environment: Environment) -> Self {
        Self::from_config(ClientConfig::new(secret_key, environment))
    }

    /// Create from configuration
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(ClientConfig::from_env()?))
    }

    fn intents_url(&self) -> String {
        format!(
            "{}/v1/payment-intents",
            self.config.environment.api_base_url()
        )
    }
}

#[async_trait]
impl PaymentIntentApi for OjireClient {
    async fn create_payment_intent(&self, request: CreatePaymentIntent) -> Result<PaymentIntent> {
        tracing::debug!(
            currency = %request.currency,
            amount = request.amount,
            "creating payment intent"
        );

        let response = self
            .http
            .post(self.intents_url())
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .header("X-Secret-Key", &self.config.secret_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let intent: PaymentIntent = response.json().await?;
        tracing::info!(intent_id = %intent.id, "payment intent created");
        Ok(intent)
    }

    fn name(&self) -> &str {
        "Ojire"
    }
}

/// Mock payment-intent API for development and testing.
///
/// Returns canned intents without touching the network.
#[derive(Default)]
pub struct MockPaymentApi;

impl MockPaymentApi {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentIntentApi for MockPaymentApi {
    async fn create_payment_intent(&self, request: CreatePaymentIntent) -> Result<PaymentIntent> {
        let suffix = Uuid::new_v4().simple().to_string();
        tracing::debug!(
            currency = %request.currency,
            amount = request.amount,
            "creating mock payment intent"
        );

        Ok(PaymentIntent {
            id: format!("pay_mock_{}", &suffix[..12]),
            client_secret: format!("cs_mock_{suffix}"),
            customer_token: format!("tok_mock_{suffix}"),
        })
    }

    fn name(&self) -> &str {
        "MockPaymentApi"
    }
}
