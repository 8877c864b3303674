//! Credential Handshake
//!
//! One-shot state machine gating INIT delivery: the page signals READY, the
//! coordinator releases the credential payload exactly once, and every later
//! signal is a no-op.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::context::PaymentContext;
use crate::message::InitPayload;

/// Tracks whether the one-time INIT payload has been released.
///
/// States are `AwaitingReady` and `Delivered`; the transition happens at
/// most once over the embedding's lifetime and is never reset. The check
/// and the transition are a single atomic compare-exchange, so the
/// at-most-once guarantee holds even if the host delivers readiness
/// signals from more than one thread.
pub struct HandshakeCoordinator {
    context: Arc<PaymentContext>,
    delivered: AtomicBool,
}

impl HandshakeCoordinator {
    pub fn new(context: Arc<PaymentContext>) -> Self {
        Self {
            context,
            delivered: AtomicBool::new(false),
        }
    }

    /// Handle a readiness signal from the page.
    ///
    /// Returns the freshly built payload on the first signal and `None` on
    /// every subsequent one. Duplicate signals are expected (page reloads
    /// re-fire READY) and are not an error; this operation cannot fail.
    pub fn on_ready_signal(&self) -> Option<InitPayload> {
        if self
            .delivered
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(InitPayload::from_context(&self.context))
        } else {
            None
        }
    }

    /// Whether INIT has already been released
    pub fn delivered(&self) -> bool {
        self.delivered.load(Ordering::SeqCst)
    }

    /// The context this coordinator releases credentials from
    pub fn context(&self) -> &PaymentContext {
        &self.context
    }
}
