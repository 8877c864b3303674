//! End-to-end embedding flow over the in-memory collaborators.

use std::sync::Arc;

use serde_json::json;

use ojire_bridge::{
    BridgeHost, Environment, MockPage, MockSink, NavigationDecision, PaymentContext,
    RecordedOutcome,
};

fn sandbox_host() -> (BridgeHost, Arc<MockPage>, Arc<MockSink>) {
    let page = Arc::new(MockPage::new());
    let sink = Arc::new(MockSink::new());
    let context = PaymentContext::new(
        "pay_123",
        "cs_secret",
        "pk_test",
        "tok_customer",
        Environment::Sandbox,
    );
    (
        BridgeHost::new(context, page.clone(), sink.clone()),
        page,
        sink,
    )
}

#[test]
fn full_checkout_flow() {
    let (host, page, sink) = sandbox_host();

    // The glue loads the resolved target URL into an isolated surface.
    assert_eq!(host.target_url(), "https://pay-sandbox.ojire.com/pay/pay_123");
    let config = host.surface_config();
    assert_eq!(config.channel_name, "Ojire");
    assert!(config.javascript_enabled);
    assert!(config.ephemeral_storage);

    // Page boot navigations pass through untouched.
    assert_eq!(
        host.on_navigation("https://pay-sandbox.ojire.com/pay/pay_123"),
        NavigationDecision::Allow
    );

    // The page signals READY; credentials go in exactly once.
    host.on_message(&json!({"type": "READY"}));
    host.on_message(&json!({"type": "READY"}));
    assert_eq!(page.evaluation_count(), 1);
    let script = &page.evaluated()[0];
    assert!(script.contains("window.__OJIRE_INIT__"));
    assert!(script.contains("\"clientSecret\":\"cs_secret\""));

    // The page reports the result via a signal URL, which never renders.
    let decision =
        host.on_navigation("https://pay-sandbox.ojire.com/result?status=succeeded&orderId=456");
    assert_eq!(decision, NavigationDecision::Suppress);

    match &sink.outcomes()[..] {
        [RecordedOutcome::Success(params)] => {
            assert_eq!(params.get("orderId").map(String::as_str), Some("456"));
            assert_eq!(params.get("status").map(String::as_str), Some("succeeded"));
        }
        other => panic!("expected a single Success outcome, got {other:?}"),
    }
}

#[test]
fn noise_between_handshake_and_result() {
    let (host, page, sink) = sandbox_host();

    // Malformed and unknown traffic around the handshake changes nothing.
    host.on_message(&json!(["READY"]));
    host.on_message(&json!({"type": "HEARTBEAT", "seq": 1}));
    host.on_message(&json!({"type": "READY"}));
    host.on_message(&json!({"type": "HEARTBEAT", "seq": 2}));

    assert_eq!(page.evaluation_count(), 1);
    assert!(sink.outcomes().is_empty());

    // A pending result still wins over a close marker in the same URL.
    let decision = host.on_navigation("https://pay-sandbox.ojire.com/r?status=pending&action=close");
    assert_eq!(decision, NavigationDecision::Suppress);
    assert!(matches!(&sink.outcomes()[..], [RecordedOutcome::Pending(_)]));
}

#[test]
fn close_without_handshake() {
    let (host, page, sink) = sandbox_host();

    // The user closes before the page ever became ready.
    let decision = host.on_navigation("https://pay-sandbox.ojire.com/r?action=close");
    assert_eq!(decision, NavigationDecision::Suppress);
    assert_eq!(sink.outcomes(), vec![RecordedOutcome::Close]);
    assert!(!host.init_delivered());
    assert_eq!(page.evaluation_count(), 0);
}
