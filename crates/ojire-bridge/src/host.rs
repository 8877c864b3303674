//! Bridge Host
//!
//! Orchestrates one embedding: resolves the target URL, owns the handshake
//! and message dispatch, classifies intercepted navigations, and reports
//! terminal outcomes to the host sink.
//!
//! The host-platform glue wires a real browsing surface to this object:
//! load `target_url()`, apply `surface_config()`, forward script-channel
//! values to `on_message`, and gate every attempted navigation on
//! `on_navigation`.

use std::sync::Arc;

use serde_json::Value;

use crate::bridge::MessageBridge;
use crate::context::PaymentContext;
use crate::handshake::HandshakeCoordinator;
use crate::navigation::{MarkerSet, NavigationClassifier, NavigationOutcome};
use crate::outcome::{NavigationDecision, OutcomeSink};
use crate::page::{PageHandle, SurfaceConfig};

/// One embedding's bridge endpoint.
///
/// All state is per-embedding and dropped with the host; nothing survives
/// teardown.
pub struct BridgeHost {
    context: Arc<PaymentContext>,
    coordinator: Arc<HandshakeCoordinator>,
    bridge: MessageBridge,
    classifier: NavigationClassifier,
    sink: Arc<dyn OutcomeSink>,
}

impl BridgeHost {
    /// Build a host with the default marker vocabulary.
    pub fn new(
        context: PaymentContext,
        page: Arc<dyn PageHandle>,
        sink: Arc<dyn OutcomeSink>,
    ) -> Self {
        Self::with_markers(context, page, sink, MarkerSet::default())
    }

    /// Build a host with a deployment-specific marker vocabulary.
    pub fn with_markers(
        context: PaymentContext,
        page: Arc<dyn PageHandle>,
        sink: Arc<dyn OutcomeSink>,
        markers: MarkerSet,
    ) -> Self {
        let context = Arc::new(context);
        let coordinator = Arc::new(HandshakeCoordinator::new(context.clone()));
        let bridge = MessageBridge::new(coordinator.clone(), page);

        tracing::info!(
            payment_id = %context.payment_id,
            environment = %context.environment,
            "bridge host created"
        );

        Self {
            context,
            coordinator,
            bridge,
            classifier: NavigationClassifier::new(markers),
            sink,
        }
    }

    /// URL of the hosted payment page to load into the surface
    pub fn target_url(&self) -> String {
        self.context.target_url()
    }

    /// Settings the glue must apply when building the browsing surface
    pub fn surface_config(&self) -> SurfaceConfig {
        SurfaceConfig::default()
    }

    /// The embedding's immutable context
    pub fn context(&self) -> &PaymentContext {
        &self.context
    }

    /// Whether the one-time INIT payload has been delivered
    pub fn init_delivered(&self) -> bool {
        self.coordinator.delivered()
    }

    /// Inbound channel: forward every raw script-channel value here.
    pub fn on_message(&self, raw: &Value) {
        self.bridge.on_message(raw);
    }

    /// Navigation interception: call before allowing any navigation.
    ///
    /// Terminal outcomes invoke the sink and must be suppressed: a signal
    /// URL is never a page to render, and letting it load would leave a
    /// dead end in the surface's history.
    pub fn on_navigation(&self, url: &str) -> NavigationDecision {
        match self.classifier.classify(url) {
            NavigationOutcome::Success(params) => {
                tracing::info!(url = %url, "navigation signal: success");
                self.sink.on_success(params);
                NavigationDecision::Suppress
            }
            NavigationOutcome::Pending(params) => {
                tracing::info!(url = %url, "navigation signal: pending");
                self.sink.on_pending(params);
                NavigationDecision::Suppress
            }
            NavigationOutcome::Error(params) => {
                tracing::info!(url = %url, "navigation signal: error");
                self.sink.on_error(params);
                NavigationDecision::Suppress
            }
            NavigationOutcome::Close => {
                tracing::info!(url = %url, "navigation signal: close");
                self.sink.on_close();
                NavigationDecision::Suppress
            }
            NavigationOutcome::Continue => {
                tracing::debug!(url = %url, "navigation allowed");
                NavigationDecision::Allow
            }
        }
    }
}
