//! # ojire-client
//!
//! Client for the Ojire payment-intent API: the one network call a host
//! makes before embedding the payment page.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  POST /v1/payment-intents  ┌──────────────┐
//! │    Host     │───────────────────────────▶│  Ojire API   │
//! │  (checkout) │◀───────────────────────────│  (sandbox/…) │
//! └──────┬──────┘   {id, clientSecret,       └──────────────┘
//!        │           customerToken}
//!        ▼
//!   PaymentContext ──▶ ojire-bridge::BridgeHost
//! ```
//!
//! The returned intent converts straight into the bridge's
//! `PaymentContext` via [`PaymentIntent::into_context`].

mod api;
mod config;
mod error;
mod intent;

pub use api::{MockPaymentApi, OjireClient, PaymentIntentApi};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use intent::{CreatePaymentIntent, PaymentIntent};
