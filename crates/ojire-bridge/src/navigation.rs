//! Navigation-Signal Classification
//!
//! The embedded page reports its result by performing a client-side
//! navigation whose URL carries `status=` / `action=` markers. The wire
//! contract is substring sniffing on the full URL string; it is kept
//! exactly that, isolated here as a pure function so it stays unit-testable
//! away from any browsing surface.

use std::collections::HashMap;

use url::Url;

/// Query parameters extracted from a navigation-signal URL (last-wins)
pub type Params = HashMap<String, String>;

/// Marker fixed by the contract for in-flight payments
const STATUS_PENDING: &str = "status=pending";

/// Marker fixed by the contract for user-initiated close
const ACTION_CLOSE: &str = "action=close";

/// Success/failure marker vocabulary.
///
/// Deployed versions of the embedded page differ on these (`succeeded` vs
/// `success`, `error` vs `failed`), so they are configuration rather than
/// constants. The default follows the contract the current page speaks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSet {
    /// Value of `status=` signalling a completed payment
    pub success: String,

    /// Value of `status=` signalling a failed payment
    pub failure: String,
}

impl MarkerSet {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }

    /// Marker vocabulary spoken by older versions of the page
    pub fn legacy() -> Self {
        Self::new("success", "failed")
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new("succeeded", "error")
    }
}

/// Where an attempted navigation leads the embedding
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Payment completed; params forwarded from the signal URL
    Success(Params),

    /// Payment in flight; params forwarded from the signal URL
    Pending(Params),

    /// Payment failed; params forwarded from the signal URL
    Error(Params),

    /// User closed the page
    Close,

    /// Not a signal; let the navigation proceed
    Continue,
}

impl NavigationOutcome {
    /// Whether this outcome ends the embedding (everything but `Continue`)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, NavigationOutcome::Continue)
    }
}

/// Pure classifier from attempted-navigation URL to payment outcome
#[derive(Clone, Debug, Default)]
pub struct NavigationClassifier {
    markers: MarkerSet,
}

impl NavigationClassifier {
    pub fn new(markers: MarkerSet) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Classify one attempted navigation.
    ///
    /// Marker checks run against the full URL string in fixed precedence
    /// order (success, pending, failure, close); the first match wins.
    /// A URL that does not parse classifies as `Continue`: a misread
    /// "continue" just lets the page keep loading, whereas a fault here
    /// would abort the navigation outright.
    pub fn classify(&self, url: &str) -> NavigationOutcome {
        let Ok(parsed) = Url::parse(url) else {
            return NavigationOutcome::Continue;
        };
        let params = query_params(&parsed);

        if url.contains(&format!("status={}", self.markers.success)) {
            return NavigationOutcome::Success(params);
        }
        if url.contains(STATUS_PENDING) {
            return NavigationOutcome::Pending(params);
        }
        if url.contains(&format!("status={}", self.markers.failure)) {
            return NavigationOutcome::Error(params);
        }
        if url.contains(ACTION_CLOSE) {
            return NavigationOutcome::Close;
        }
        NavigationOutcome::Continue
    }
}

/// Decode the query component into a map; on duplicate keys the last
/// occurrence wins, matching standard query-string semantics.
fn query_params(url: &Url) -> Params {
    let mut params = Params::new();
    for (key, value) in url.query_pairs() {
        params.insert(key.into_owned(), value.into_owned());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> NavigationClassifier {
        NavigationClassifier::default()
    }

    #[test]
    fn test_success_with_forwarded_params() {
        let outcome = classifier().classify("https://pay-sandbox.ojire.com/result?status=succeeded&orderId=456");
        match outcome {
            NavigationOutcome::Success(params) => {
                assert_eq!(params.get("orderId").map(String::as_str), Some("456"));
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_and_error_and_close() {
        let c = classifier();
        assert!(matches!(
            c.classify("https://x.ojire.com/r?status=pending"),
            NavigationOutcome::Pending(_)
        ));
        assert!(matches!(
            c.classify("https://x.ojire.com/r?status=error&code=51"),
            NavigationOutcome::Error(_)
        ));
        assert_eq!(
            c.classify("https://x.ojire.com/r?action=close"),
            NavigationOutcome::Close
        );
    }

    #[test]
    fn test_status_precedes_close() {
        // Both markers present: the status check runs first.
        let outcome = classifier().classify("https://x.ojire.com/r?status=pending&action=close");
        assert!(matches!(outcome, NavigationOutcome::Pending(_)));
    }

    #[test]
    fn test_unmarked_navigation_continues() {
        let outcome = classifier().classify("https://pay-sandbox.ojire.com/checkout?step=2");
        assert_eq!(outcome, NavigationOutcome::Continue);
        assert!(!outcome.is_terminal());
    }

    #[test]
    fn test_malformed_url_continues() {
        assert_eq!(classifier().classify("not a url"), NavigationOutcome::Continue);
        assert_eq!(classifier().classify(""), NavigationOutcome::Continue);
        // Relative signal URLs never reach the surface's interception hook
        // with a resolvable query, so they continue as well.
        assert_eq!(
            classifier().classify("/result?status=succeeded"),
            NavigationOutcome::Continue
        );
    }

    #[test]
    fn test_duplicate_query_keys_last_wins() {
        let outcome = classifier().classify("https://x.ojire.com/r?status=succeeded&a=1&b=2&a=3");
        match outcome {
            NavigationOutcome::Success(params) => {
                assert_eq!(params.get("a").map(String::as_str), Some("3"));
                assert_eq!(params.get("b").map(String::as_str), Some("2"));
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_classification_is_pure() {
        let c = classifier();
        let url = "https://x.ojire.com/r?status=succeeded&orderId=1";
        assert_eq!(c.classify(url), c.classify(url));
    }

    #[test]
    fn test_legacy_markers() {
        let c = NavigationClassifier::new(MarkerSet::legacy());
        assert!(matches!(
            c.classify("https://x.ojire.com/r?status=success"),
            NavigationOutcome::Success(_)
        ));
        assert!(matches!(
            c.classify("https://x.ojire.com/r?status=failed"),
            NavigationOutcome::Error(_)
        ));
        // The current vocabulary is not recognized by the legacy set.
        assert_eq!(
            c.classify("https://x.ojire.com/r?status=error"),
            NavigationOutcome::Continue
        );
    }
}
