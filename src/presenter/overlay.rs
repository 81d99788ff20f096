//! In-page overlay renderer.
//!
//! Injects a container into the target page and fills it with the summary.
//! The container is an upsert: looked up by its reserved id, created as the
//! body's first child only when absent, and cleared before being repopulated,
//! so repeated invocations never stack duplicates.

use async_trait::async_trait;
use tracing::info;

use super::Presenter;
use crate::browser::{BrowserHost, TabHandle};
use crate::errors::PresentationError;

/// Reserved DOM id of the single overlay container per page.
pub const OVERLAY_CONTAINER_ID: &str = "pagebrief-summary-overlay";

/// Scoped styling re-installed with every overlay injection. Removing the
/// container removes the styles with it.
const OVERLAY_CSS: &str = "\
#pagebrief-summary-overlay .pagebrief-panel {
  position: fixed;
  top: 16px;
  right: 16px;
  width: 360px;
  max-height: 60vh;
  overflow-y: auto;
  background-color: white;
  color: #444;
  border: 1px solid #ddd;
  border-radius: 8px;
  box-shadow: 0 0.5rem 1rem rgba(0, 0, 0, 0.2);
  padding: 16px;
  z-index: 2147483647;
  font-family: Arial, sans-serif;
  font-size: 14px;
  line-height: 1.5;
  text-align: justify;
}
#pagebrief-summary-overlay .pagebrief-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 8px;
}
#pagebrief-summary-overlay h2 {
  color: #333;
  font-size: 18px;
  margin: 0;
}
#pagebrief-summary-overlay .pagebrief-close {
  border: none;
  background: none;
  font-size: 18px;
  cursor: pointer;
  color: #333;
}";

/// Build the upsert script that injects `summary` into the page.
///
/// The summary crosses into the page as a JSON string literal and is assigned
/// through `textContent`, so page markup can never leak out of it.
#[must_use]
pub fn build_overlay_script(summary: &str) -> String {
    let id_literal = format!("\"{OVERLAY_CONTAINER_ID}\"");
    let summary_literal = serde_json::to_string(summary).expect("string serializes");
    let css_literal = serde_json::to_string(OVERLAY_CSS).expect("string serializes");

    format!(
        r#"(function () {{
  var container = document.getElementById({id_literal});
  if (!container) {{
    container = document.createElement("div");
    container.id = {id_literal};
    document.body.insertBefore(container, document.body.firstChild);
  }}
  container.innerHTML = "";

  var style = document.createElement("style");
  style.textContent = {css_literal};
  container.appendChild(style);

  var panel = document.createElement("div");
  panel.className = "pagebrief-panel";

  var header = document.createElement("div");
  header.className = "pagebrief-header";

  var heading = document.createElement("h2");
  heading.textContent = "Page Summary";
  header.appendChild(heading);

  var close = document.createElement("button");
  close.className = "pagebrief-close";
  close.textContent = "×";
  close.addEventListener("click", function () {{ container.remove(); }});
  header.appendChild(close);

  panel.appendChild(header);

  var text = document.createElement("div");
  text.className = "pagebrief-text";
  text.textContent = {summary_literal};
  panel.appendChild(text);

  container.appendChild(panel);
  return true;
}})();"#
    )
}

/// Renders the summary as a transient overlay inside the page itself.
pub struct OverlayPresenter;

#[async_trait]
impl Presenter for OverlayPresenter {
    async fn present(
        &self,
        host: &dyn BrowserHost,
        tab: &TabHandle,
        summary: &str,
    ) -> Result<(), PresentationError> {
        let script = build_overlay_script(summary);
        host.run_in_page(tab, &script).await?;
        info!(container = OVERLAY_CONTAINER_ID, "Injected summary overlay");
        Ok(())
    }
}
