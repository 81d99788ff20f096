use async_trait::async_trait;
use serde_json::Value;

use crate::errors::HostError;

/// Opaque handle naming one open tab for the duration of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabHandle(pub(crate) u64);

impl TabHandle {
    /// Mint a handle; host implementations decide what the id refers to.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Placement for a newly opened top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

/// Browser-control surface available to the privileged context.
///
/// `run_in_page` is the remote-procedure boundary: the script executes inside
/// the tab's own context with access to its live document, and only the
/// serialized result comes back.
#[async_trait]
pub trait BrowserHost: Send + Sync {
    /// The currently focused/visible tab.
    async fn active_tab(&self) -> Result<TabHandle, HostError>;

    /// Evaluate a script in the tab's page context and return its value.
    async fn run_in_page(&self, tab: &TabHandle, script: &str) -> Result<Value, HostError>;

    /// Open a new top-level window displaying a self-contained HTML document.
    async fn open_window(&self, html: &str, bounds: WindowBounds) -> Result<(), HostError>;
}
