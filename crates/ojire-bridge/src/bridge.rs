//! Message Bridge
//!
//! Validates and dispatches messages arriving from the embedded page's
//! script channel. The page is a versioned external surface, so the bridge
//! tolerates shapes and types it does not understand instead of erroring.

use std::sync::Arc;

use serde_json::Value;

use crate::handshake::HandshakeCoordinator;
use crate::message::InboundMessage;
use crate::page::PageHandle;

/// Inbound channel endpoint: raw channel values in, side effects out.
///
/// The only recognized dispatch is `READY`, which asks the coordinator for
/// the one-time INIT payload and evaluates it into the page. Everything
/// else is logged and dropped; nothing here is ever surfaced as an error
/// to the host.
pub struct MessageBridge {
    coordinator: Arc<HandshakeCoordinator>,
    page: Arc<dyn PageHandle>,
}

impl MessageBridge {
    pub fn new(coordinator: Arc<HandshakeCoordinator>, page: Arc<dyn PageHandle>) -> Self {
        Self { coordinator, page }
    }

    /// Handle one raw value posted on the script channel.
    pub fn on_message(&self, raw: &Value) {
        let Some(message) = InboundMessage::from_value(raw) else {
            tracing::warn!(raw = %raw, "dropping malformed channel message");
            return;
        };

        tracing::debug!(kind = %message.kind, "channel message received");

        if message.is_ready() {
            self.deliver_init();
        } else {
            // Unknown kinds are accepted without dispatch so newer pages
            // can speak to older hosts.
            tracing::debug!(kind = %message.kind, "no dispatch for message kind");
        }
    }

    /// Release and evaluate the INIT payload, at most once per embedding.
    fn deliver_init(&self) {
        let Some(payload) = self.coordinator.on_ready_signal() else {
            tracing::debug!("READY after INIT delivery; ignoring duplicate signal");
            return;
        };

        match payload.delivery_script() {
            Ok(script) => {
                tracing::info!("delivering INIT payload to page");
                self.page.evaluate_script(&script);
            }
            Err(e) => {
                // At-most-once: the coordinator has already transitioned,
                // so the payload is lost rather than redelivered.
                tracing::error!(error = %e, "INIT payload serialization failed; payload dropped");
            }
        }
    }
}
