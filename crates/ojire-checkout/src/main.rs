//! ojire-pay Demo Checkout
//!
//! Creates a payment intent and walks one embedding through the full
//! bridge flow: READY handshake, one-time INIT delivery, and a
//! navigation-signal outcome. The browsing surface is the in-memory
//! mock page, so the demo runs anywhere.

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use ojire_bridge::{BridgeHost, Environment, MockPage, OutcomeSink, Params};
use ojire_client::{CreatePaymentIntent, MockPaymentApi, OjireClient, PaymentIntentApi};

/// Sink that logs every terminal outcome
struct LoggingSink;

impl OutcomeSink for LoggingSink {
    fn on_success(&self, params: Params) {
        tracing::info!(?params, "✓ payment succeeded");
    }

    fn on_pending(&self, params: Params) {
        tracing::info!(?params, "… payment pending");
    }

    fn on_error(&self, params: Params) {
        tracing::warn!(?params, "✗ payment failed");
    }

    fn on_close(&self) {
        tracing::info!("payment page closed by user");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let environment = std::env::var("OJIRE_ENV")
        .map(|v| Environment::from_str(&v))
        .unwrap_or_default();

    // Real API if configured, mock otherwise
    let api: Arc<dyn PaymentIntentApi> = match OjireClient::from_env() {
        Ok(client) => {
            tracing::info!("✓ Ojire API configured ({})", environment);
            Arc::new(client)
        }
        Err(_) => {
            tracing::warn!("⚠ OJIRE_SECRET_KEY not set - using mock payment API");
            Arc::new(MockPaymentApi::new())
        }
    };

    let public_key =
        std::env::var("OJIRE_PUBLIC_KEY").unwrap_or_else(|_| "pk_demo_0000".into());
    let merchant_id = std::env::var("OJIRE_MERCHANT_ID")
        .ok()
        .and_then(|v| Uuid::parse_str(&v).ok())
        .unwrap_or_else(Uuid::new_v4);

    // Create the intent for this checkout attempt
    let request = CreatePaymentIntent::new(7_499_000, "IDR", merchant_id, "customer_test_123")
        .with_description("Test payment")
        .with_metadata("orderId", "order_456");
    let intent = api.create_payment_intent(request).await?;
    tracing::info!(intent_id = %intent.id, api = api.name(), "payment intent ready");

    // Build the embedding
    let page = Arc::new(MockPage::new());
    let host = BridgeHost::new(
        intent.into_context(public_key, environment),
        page.clone(),
        Arc::new(LoggingSink),
    );

    let config = host.surface_config();
    tracing::info!("target URL:     {}", host.target_url());
    tracing::info!(
        "surface config: channel={} javascript={} ephemeral={}",
        config.channel_name,
        config.javascript_enabled,
        config.ephemeral_storage
    );

    // -- What a real surface would now drive --------------------------------

    // Initial page load passes interception untouched.
    host.on_navigation(&host.target_url());

    // The page signals READY; a reload re-fires it, which must be a no-op.
    host.on_message(&json!({"type": "READY"}));
    host.on_message(&json!({"type": "READY"}));
    tracing::info!(
        "INIT delivered: {} (scripts evaluated: {})",
        host.init_delivered(),
        page.evaluation_count()
    );

    // The page reports its result through a signal URL.
    let result_url = format!(
        "{}/result?status=succeeded&orderId=order_456",
        host.context().environment.base_url()
    );
    let decision = host.on_navigation(&result_url);
    tracing::info!(?decision, "result navigation handled");

    Ok(())
}
