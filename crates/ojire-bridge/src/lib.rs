//! # ojire-bridge
//!
//! Bridge protocol for embedding the Ojire hosted payment page inside a
//! host application's browsing surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        BridgeHost                            │
//! │  ┌──────────────┐  ┌───────────────┐  ┌───────────────────┐  │
//! │  │ MessageBridge│──│  Handshake    │  │   Navigation      │  │
//! │  │ (channel in) │  │  Coordinator  │  │   Classifier      │  │
//! │  └──────┬───────┘  └───────┬───────┘  └─────────┬─────────┘  │
//! └─────────┼──────────────────┼────────────────────┼────────────┘
//!           │ READY            │ INIT (once)        │ outcome
//!           ▼                  ▼                    ▼
//!      script channel     PageHandle           OutcomeSink
//! ```
//!
//! The embedded page signals `READY` over its script channel; the
//! coordinator releases the credential payload exactly once; the page later
//! reports its result by navigating to a signal URL, which the classifier
//! turns into a terminal outcome while the navigation itself is suppressed.
//!
//! The browsing surface is an external collaborator behind the
//! [`PageHandle`] seam; this crate holds no webview and does no I/O.

pub mod bridge;
pub mod context;
pub mod environment;
pub mod error;
pub mod handshake;
pub mod message;
pub mod navigation;
pub mod outcome;
pub mod page;
pub mod host;

pub use bridge::MessageBridge;
pub use context::PaymentContext;
pub use environment::Environment;
pub use error::{BridgeError, Result};
pub use handshake::HandshakeCoordinator;
pub use host::BridgeHost;
pub use message::{InboundMessage, InitPayload, INIT_ENTRY_POINT, MSG_READY};
pub use navigation::{MarkerSet, NavigationClassifier, NavigationOutcome, Params};
pub use outcome::{MockSink, NavigationDecision, OutcomeSink, RecordedOutcome};
pub use page::{MockPage, PageHandle, SurfaceConfig};
