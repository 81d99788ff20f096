//! pagebrief - summarize the visible text of the active browser tab with an
//! LLM and show the result back in the page.
//!
//! The pipeline has three components, wired together by [`pipeline`]:
//! 1. [`extractor`] runs a read-only script inside the active tab and brings
//!    the page's visible text back across the DevTools boundary.
//! 2. [`summarizer`] builds one completion request from the text plus the
//!    session options (target language, word ceiling) and parses the
//!    response into plain text.
//! 3. [`presenter`] renders the summary, either as an idempotently-replaced
//!    overlay injected into the page or as a separate popup window.
//!
//! The browser is an external Chrome instance reached over CDP; the
//! [`browser::BrowserHost`] trait is the privileged/page execution boundary,
//! and everything crossing it is serialized.
//!
//! # Example
//!
//! ```no_run
//! use pagebrief::browser::CdpHost;
//! use pagebrief::core::models::{Language, LengthInput, SessionOptions};
//! use pagebrief::presenter::presenter_for;
//! use pagebrief::summarizer::LlmClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     pagebrief::setup_logging();
//!
//!     let host = CdpHost::connect("ws://localhost:9222/devtools/browser/abc").await?;
//!     let client = LlmClient::new("api-key".to_string(), None, None);
//!
//!     let options = SessionOptions {
//!         language: Some(Language::French),
//!         length: LengthInput::from_raw("80"),
//!         ..SessionOptions::default()
//!     };
//!     let presenter = presenter_for(options.presenter);
//!
//!     let summary =
//!         pagebrief::pipeline::run_pipeline(&host, &client, presenter.as_ref(), &options)
//!             .await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod core;
pub mod errors;
pub mod extractor;
pub mod pipeline;
pub mod presenter;
pub mod summarizer;

/// Configure logging with a plain fmt subscriber at INFO.
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}
