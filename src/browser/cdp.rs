//! Chrome DevTools Protocol implementation of [`BrowserHost`].

use std::collections::HashMap;
use std::hash::Hash;
use std::path::PathBuf;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::target::{CreateTargetParams, TargetId};
use chromiumoxide::handler::Handler;
use chromiumoxide::page::Page;
use futures::StreamExt;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::host::{BrowserHost, TabHandle, WindowBounds};
use crate::errors::HostError;

/// Browser host backed by a real Chrome/Chromium instance over CDP.
pub struct CdpHost {
    browser: Browser,
    event_loop: JoinHandle<()>,
    tabs: Mutex<TabRegistry<TargetId, Page>>,
}

/// Handle registry over pages, keyed by their stable CDP target id.
///
/// Re-selecting the same page yields the handle it already has, so repeated
/// `active_tab` calls do not grow the registry.
struct TabRegistry<K, P> {
    by_key: HashMap<K, u64>,
    entries: HashMap<u64, P>,
    next: u64,
}

impl<K: Eq + Hash, P> TabRegistry<K, P> {
    fn new() -> Self {
        Self {
            by_key: HashMap::new(),
            entries: HashMap::new(),
            next: 1,
        }
    }

    /// Map a target key to a handle id, reusing the id (and refreshing the
    /// stored entry) when the key is already known.
    fn intern(&mut self, key: K, entry: P) -> u64 {
        if let Some(&id) = self.by_key.get(&key) {
            self.entries.insert(id, entry);
            return id;
        }
        let id = self.next;
        self.next += 1;
        self.by_key.insert(key, id);
        self.entries.insert(id, entry);
        id
    }

    fn get(&self, id: u64) -> Option<&P> {
        self.entries.get(&id)
    }
}

impl CdpHost {
    /// Attach to an already-running browser via its DevTools websocket URL.
    pub async fn connect(ws_url: &str) -> Result<Self, HostError> {
        let (browser, handler) = Browser::connect(ws_url)
            .await
            .map_err(|e| HostError::Connection(e.to_string()))?;
        info!(ws_url, "Connected to running browser");
        Ok(Self::with_browser(browser, handler))
    }

    /// Launch a headed browser, preferring a locally installed Chrome.
    pub async fn launch() -> Result<Self, HostError> {
        let mut builder = BrowserConfig::builder().with_head();
        if let Some(path) = detect_chrome() {
            debug!(path = %path.display(), "Using detected Chrome executable");
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(HostError::Connection)?;
        let (browser, handler) = Browser::launch(config)
            .await
            .map_err(|e| HostError::Connection(e.to_string()))?;
        info!("Launched browser");
        Ok(Self::with_browser(browser, handler))
    }

    fn with_browser(browser: Browser, mut handler: Handler) -> Self {
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "CDP handler event error");
                }
            }
        });
        Self {
            browser,
            event_loop,
            tabs: Mutex::new(TabRegistry::new()),
        }
    }

    async fn page_for(&self, tab: &TabHandle) -> Result<Page, HostError> {
        self.tabs
            .lock()
            .await
            .get(tab.0)
            .cloned()
            .ok_or(HostError::NoActiveTab)
    }
}

#[async_trait]
impl BrowserHost for CdpHost {
    async fn active_tab(&self) -> Result<TabHandle, HostError> {
        let pages = self
            .browser
            .pages()
            .await
            .map_err(|e| HostError::Connection(e.to_string()))?;

        let mut candidates = Vec::new();
        for page in pages {
            let url = page.url().await.ok().flatten().unwrap_or_default();
            if url.starts_with("devtools://") || url.starts_with("chrome://") {
                continue;
            }
            candidates.push(page);
        }
        if candidates.is_empty() {
            return Err(HostError::NoActiveTab);
        }

        // CDP has no single "active tab" bit; ask each page whether its
        // document is currently visible and fall back to the first one.
        let mut chosen = None;
        for page in &candidates {
            if let Ok(result) = page.evaluate("document.visibilityState").await {
                if result.value().and_then(Value::as_str) == Some("visible") {
                    chosen = Some(page.clone());
                    break;
                }
            }
        }
        let page = chosen.unwrap_or_else(|| candidates[0].clone());

        let key = page.target_id().clone();
        let id = self.tabs.lock().await.intern(key, page);
        Ok(TabHandle(id))
    }

    async fn run_in_page(&self, tab: &TabHandle, script: &str) -> Result<Value, HostError> {
        let page = self.page_for(tab).await?;
        let result = page
            .evaluate(script.to_string())
            .await
            .map_err(|e| HostError::Evaluation(e.to_string()))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    async fn open_window(&self, html: &str, bounds: WindowBounds) -> Result<(), HostError> {
        let params = CreateTargetParams::builder()
            .url("about:blank")
            .new_window(true)
            .build()
            .map_err(HostError::Window)?;
        let page = self
            .browser
            .new_page(params)
            .await
            .map_err(|e| HostError::Window(e.to_string()))?;
        page.set_content(html)
            .await
            .map_err(|e| HostError::Window(e.to_string()))?;

        // The window positions itself; Target.createTarget offers no bounds.
        let script = format!(
            "window.moveTo({}, {}); window.resizeTo({}, {});",
            bounds.left, bounds.top, bounds.width, bounds.height
        );
        if let Err(e) = page.evaluate(script).await {
            warn!(error = %e, "Could not position popup window");
        }
        if let Err(e) = page.bring_to_front().await {
            warn!(error = %e, "Could not focus popup window");
        }
        Ok(())
    }
}

impl Drop for CdpHost {
    fn drop(&mut self) {
        self.event_loop.abort();
    }
}

/// Locate an installed Chrome/Chromium executable on this machine.
fn detect_chrome() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "macos")]
    {
        candidates.push(PathBuf::from(
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        ));
        candidates.push(PathBuf::from(
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
        ));
    }

    #[cfg(target_os = "linux")]
    {
        candidates.push(PathBuf::from("/usr/bin/google-chrome"));
        candidates.push(PathBuf::from("/usr/bin/google-chrome-stable"));
        candidates.push(PathBuf::from("/usr/bin/chromium-browser"));
        candidates.push(PathBuf::from("/usr/bin/chromium"));
        candidates.push(PathBuf::from("/snap/bin/chromium"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(program_files) = std::env::var("ProgramFiles") {
            candidates.push(PathBuf::from(format!(
                "{}\\Google\\Chrome\\Application\\chrome.exe",
                program_files
            )));
        }
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            candidates.push(PathBuf::from(format!(
                "{}\\Google\\Chrome\\Application\\chrome.exe",
                local
            )));
        }
    }

    candidates.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::TabRegistry;

    #[test]
    fn registry_reuses_handles_for_known_targets() {
        let mut registry: TabRegistry<&str, &str> = TabRegistry::new();
        let first = registry.intern("target-a", "page-a");
        let second = registry.intern("target-b", "page-b");
        assert_ne!(first, second);

        // Selecting the same target again yields the same handle and swaps
        // in the fresh entry instead of adding one.
        let again = registry.intern("target-a", "page-a-reloaded");
        assert_eq!(again, first);
        assert_eq!(registry.entries.len(), 2);
        assert_eq!(registry.get(first), Some(&"page-a-reloaded"));
        assert_eq!(registry.get(second), Some(&"page-b"));
    }
}
