//! Visible-text extraction from the active tab.
//!
//! Runs read-only scripts in the page context; nothing here mutates the page.

use serde_json::Value;
use tracing::{debug, info};

use crate::browser::{BrowserHost, TabHandle};
use crate::core::models::PageText;
use crate::errors::ExtractionError;

/// What the page presents as human-visible text.
const VISIBLE_TEXT_SCRIPT: &str = "document.body.innerText || document.body.textContent || \"\"";

/// Fallback source when the rendered text comes back empty.
const PAGE_HTML_SCRIPT: &str = "document.documentElement.outerHTML";

const FALLBACK_TEXT_WIDTH: usize = 80;

/// Extract the active tab's visible text.
///
/// Fails with [`ExtractionError::NoActiveTab`] when the browser has no usable
/// tab and with [`ExtractionError::EmptyPage`] when the page yields no text;
/// either aborts the pipeline before any completion request is made.
pub async fn extract_page_text(
    host: &dyn BrowserHost,
) -> Result<(TabHandle, PageText), ExtractionError> {
    let tab = host.active_tab().await?;

    let value = host.run_in_page(&tab, VISIBLE_TEXT_SCRIPT).await?;
    let mut text = normalize_whitespace(value.as_str().unwrap_or_default());

    if text.is_empty() {
        debug!("innerText empty, converting page HTML instead");
        text = normalize_whitespace(&html_fallback(host, &tab).await?);
    }

    let text = PageText::new(text).ok_or(ExtractionError::EmptyPage)?;
    info!(chars = text.char_count(), "Extracted page text");
    Ok((tab, text))
}

/// Collapse whitespace runs to single spaces; rendered page text is full of
/// layout-driven blank lines and indentation the prompt has no use for.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the raw document HTML to readable text.
async fn html_fallback(
    host: &dyn BrowserHost,
    tab: &TabHandle,
) -> Result<String, ExtractionError> {
    let value = host.run_in_page(tab, PAGE_HTML_SCRIPT).await?;
    let html = match value {
        Value::String(html) => html,
        _ => return Ok(String::new()),
    };
    Ok(html2text::from_read(html.as_bytes(), FALLBACK_TEXT_WIDTH).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::normalize_whitespace;

    #[test]
    fn normalization_collapses_blank_runs() {
        assert_eq!(
            normalize_whitespace("  Title\n\n\n   Body   line \t two  "),
            "Title Body line two"
        );
        assert_eq!(normalize_whitespace("   \n\t "), "");
        assert_eq!(normalize_whitespace("plain"), "plain");
    }
}
