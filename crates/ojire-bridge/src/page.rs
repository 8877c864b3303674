//! Page Execution-Context Seam
//!
//! Abstractions over the browsing surface that hosts the embedded page.
//! The bridge never owns a real webview; the host-platform glue implements
//! `PageHandle` and applies `SurfaceConfig` when it builds the surface.

use std::sync::Mutex;

/// Handle into the embedded page's script execution context.
///
/// Implement this for each browsing surface: WebKit, wry, a test double.
/// Evaluation is fire-and-forget; no result is awaited, and a script that
/// lands before the page defines its handlers is simply lost.
pub trait PageHandle: Send + Sync {
    /// Evaluate a script inside the page
    fn evaluate_script(&self, script: &str);
}

/// Settings the host-platform glue must apply to the browsing surface.
///
/// Each embedding is isolated: scripting on, nothing persisted, and the
/// inbound script channel registered under the fixed name the page posts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Name the page's `postMessage` channel is registered under
    pub channel_name: &'static str,

    /// The page cannot run without script execution
    pub javascript_enabled: bool,

    /// No cache, cookies, or site data may survive the embedding
    pub ephemeral_storage: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            channel_name: "Ojire",
            javascript_enabled: true,
            ephemeral_storage: true,
        }
    }
}

/// In-memory page handle for development and testing.
///
/// Records every evaluated script so tests can assert on INIT delivery.
#[derive(Default)]
pub struct MockPage {
    scripts: Mutex<Vec<String>>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts evaluated so far, oldest first
    pub fn evaluated(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }

    /// Number of scripts evaluated
    pub fn evaluation_count(&self) -> usize {
        self.scripts.lock().unwrap().len()
    }
}

impl PageHandle for MockPage {
    fn evaluate_script(&self, script: &str) {
        self.scripts.lock().unwrap().push(script.to_string());
    }
}
