//! Summary presentation strategies.
//!
//! Two interchangeable renderers sit behind the [`Presenter`] trait: an
//! in-page overlay injected into the target document, and a separate popup
//! window. Both replace any prior instance instead of stacking a new one.

pub mod overlay;
pub mod popup;

pub use overlay::OverlayPresenter;
pub use popup::PopupPresenter;

use async_trait::async_trait;

use crate::browser::{BrowserHost, TabHandle};
use crate::core::models::PresenterKind;
use crate::errors::PresentationError;

#[async_trait]
pub trait Presenter: Send + Sync {
    /// Render `summary` for the page identified by `tab`.
    async fn present(
        &self,
        host: &dyn BrowserHost,
        tab: &TabHandle,
        summary: &str,
    ) -> Result<(), PresentationError>;
}

/// The presenter for the selected strategy.
#[must_use]
pub fn presenter_for(kind: PresenterKind) -> Box<dyn Presenter> {
    match kind {
        PresenterKind::Overlay => Box::new(OverlayPresenter),
        PresenterKind::Popup => Box::new(PopupPresenter),
    }
}

/// Escape text for embedding into HTML markup.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
