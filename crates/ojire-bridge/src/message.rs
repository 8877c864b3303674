//! Wire Messages
//!
//! The JSON messages exchanged with the embedded payment page: inbound
//! signals on the script channel, and the one-time INIT payload evaluated
//! back into the page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::PaymentContext;
use crate::error::Result;

/// Message type the page sends once it can accept credentials
pub const MSG_READY: &str = "READY";

/// Global entry point the page defines to receive the INIT payload
pub const INIT_ENTRY_POINT: &str = "__OJIRE_INIT__";

/// A message received from the embedded page.
///
/// The page is an external, versioned surface, so everything beyond the
/// `type` discriminant stays weakly typed and is never interpreted outside
/// the bridge boundary.
#[derive(Clone, Debug, Deserialize)]
pub struct InboundMessage {
    /// Message discriminant
    #[serde(rename = "type")]
    pub kind: String,

    /// Remaining fields, untyped
    #[serde(flatten)]
    pub body: HashMap<String, Value>,
}

impl InboundMessage {
    /// Validate a raw channel value into a message.
    ///
    /// Accepts only JSON objects carrying a string `type` field; any other
    /// shape yields `None` and is the caller's to log and drop.
    pub fn from_value(raw: &Value) -> Option<Self> {
        Self::deserialize(raw).ok()
    }

    /// Whether this is the readiness signal
    pub fn is_ready(&self) -> bool {
        self.kind == MSG_READY
    }
}

/// The one-time credential payload delivered to the page after READY.
///
/// Built from the embedding's `PaymentContext`; a value, never mutated.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPayload {
    #[serde(rename = "type")]
    kind: &'static str,

    pub client_secret: String,
    pub public_key: String,
    pub token: String,
}

impl InitPayload {
    pub fn from_context(context: &PaymentContext) -> Self {
        Self {
            kind: "INIT",
            client_secret: context.client_secret.clone(),
            public_key: context.public_key.clone(),
            token: context.customer_token.clone(),
        }
    }

    /// Render the script that delivers this payload into the page.
    ///
    /// The script checks that the entry point exists before invoking it, so
    /// a page that has not defined the handler yet does not fault the
    /// execution context. No retry: the payload is lost in that case.
    pub fn delivery_script(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(format!(
            "if (window.{entry}) {{\n    window.{entry}({json});\n}}\ntrue;",
            entry = INIT_ENTRY_POINT,
        ))
    }
}
