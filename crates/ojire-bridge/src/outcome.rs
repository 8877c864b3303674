//! Outcome Reporting
//!
//! The host-provided sink the bridge reports terminal payment states to,
//! decoupled from any UI-framework lifecycle.

use std::sync::Mutex;

use crate::navigation::Params;

/// What the browsing surface should do with an attempted navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the navigation proceed unmodified
    Allow,

    /// Cancel the navigation; the URL was a signal, not a page to render
    Suppress,
}

/// Host sink for terminal payment outcomes.
///
/// One method per terminal variant. Implementations must be cheap and
/// non-blocking; they run inline on the surface's event delivery.
pub trait OutcomeSink: Send + Sync {
    /// Payment completed
    fn on_success(&self, params: Params);

    /// Payment accepted but still in flight
    fn on_pending(&self, params: Params);

    /// Payment failed
    fn on_error(&self, params: Params);

    /// User closed the page without a payment result
    fn on_close(&self);
}

/// Recorded terminal outcome, for inspection in tests and demos
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedOutcome {
    Success(Params),
    Pending(Params),
    Error(Params),
    Close,
}

/// In-memory sink recording every callback, for development and testing
#[derive(Default)]
pub struct MockSink {
    outcomes: Mutex<Vec<RecordedOutcome>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes received so far, oldest first
    pub fn outcomes(&self) -> Vec<RecordedOutcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

impl OutcomeSink for MockSink {
    fn on_success(&self, params: Params) {
        self.outcomes.lock().unwrap().push(RecordedOutcome::Success(params));
    }

    fn on_pending(&self, params: Params) {
        self.outcomes.lock().unwrap().push(RecordedOutcome::Pending(params));
    }

    fn on_error(&self, params: Params) {
        self.outcomes.lock().unwrap().push(RecordedOutcome::Error(params));
    }

    fn on_close(&self) {
        self.outcomes.lock().unwrap().push(RecordedOutcome::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sink_records_in_order() {
        let sink = MockSink::new();
        sink.on_pending(Params::new());
        sink.on_close();

        let outcomes = sink.outcomes();
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], RecordedOutcome::Pending(_)));
        assert_eq!(outcomes[1], RecordedOutcome::Close);
    }
}
