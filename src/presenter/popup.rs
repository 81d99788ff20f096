//! Popup window renderer.
//!
//! Builds a minimal self-contained document (embedded styling, no external
//! resources) and opens it as a new top-level window offset from the current
//! window's origin. The window keeps its own copy of the document; nothing is
//! retained on the host side.

use async_trait::async_trait;
use tracing::info;

use super::{escape_html, Presenter};
use crate::browser::{BrowserHost, TabHandle, WindowBounds};
use crate::errors::PresentationError;

const POPUP_WIDTH: i64 = 400;
const POPUP_HEIGHT: i64 = 500;

/// Offset of the popup from the current window's origin.
const POPUP_OFFSET: i64 = 50;

/// Reads the current window's screen position from the source page.
const WINDOW_ORIGIN_SCRIPT: &str = "({ left: window.screenX, top: window.screenY })";

/// Build the standalone summary document shown in the popup window.
#[must_use]
pub fn build_popup_html(summary: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Page Summary</title>
    <style>
      body {{
        font-family: Arial, sans-serif;
        margin: 0;
        padding: 16px;
        background-color: white;
        overflow: auto;
        height: 100vh;
      }}
      .summary-container {{
        background-color: white;
        border-radius: 8px;
        height: 100%;
      }}
      h1 {{
        color: #333;
        margin: 0 0 16px 0;
        font-size: 18px;
      }}
      .summary-text {{
        color: #444;
        font-size: 14px;
        line-height: 1.5;
        text-align: justify;
      }}
    </style>
  </head>
  <body>
    <div class="summary-container">
      <h1>Page Summary</h1>
      <div class="summary-text">{}</div>
    </div>
  </body>
</html>"#,
        escape_html(summary)
    )
}

/// Renders the summary in a separate popup window.
pub struct PopupPresenter;

#[async_trait]
impl Presenter for PopupPresenter {
    async fn present(
        &self,
        host: &dyn BrowserHost,
        tab: &TabHandle,
        summary: &str,
    ) -> Result<(), PresentationError> {
        let origin = host.run_in_page(tab, WINDOW_ORIGIN_SCRIPT).await?;
        let left = origin.get("left").and_then(|v| v.as_i64()).unwrap_or(0);
        let top = origin.get("top").and_then(|v| v.as_i64()).unwrap_or(0);

        let bounds = WindowBounds {
            left: left + POPUP_OFFSET,
            top: top + POPUP_OFFSET,
            width: POPUP_WIDTH,
            height: POPUP_HEIGHT,
        };

        let html = build_popup_html(summary);
        host.open_window(&html, bounds).await?;
        info!(left = bounds.left, top = bounds.top, "Opened summary popup");
        Ok(())
    }
}
