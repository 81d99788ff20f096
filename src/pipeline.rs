//! Orchestration of one summarization run.
//!
//! Per request the flow is `Idle → Extracting → Requesting → Presenting →
//! Idle`; any failure transitions straight back to `Idle` after being
//! reported to the user. Extraction strictly precedes the completion request,
//! which strictly precedes presentation.

use tracing::{error, info, warn};

use crate::browser::BrowserHost;
use crate::core::models::{SessionOptions, SummaryRequest};
use crate::errors::PipelineError;
use crate::extractor;
use crate::presenter::Presenter;
use crate::summarizer::SummaryGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Extracting,
    Requesting,
    Presenting,
}

/// Run the full extract → summarize → present pipeline once.
///
/// Every failure terminates the run, is surfaced to the user as a page alert
/// (best effort), and is returned to the caller. There is no retry and no
/// recovery.
pub async fn run_pipeline(
    host: &dyn BrowserHost,
    generator: &dyn SummaryGenerator,
    presenter: &dyn Presenter,
    options: &SessionOptions,
) -> Result<String, PipelineError> {
    match run_stages(host, generator, presenter, options).await {
        Ok(summary) => Ok(summary),
        Err(e) => {
            report_error(host, &e).await;
            Err(e)
        }
    }
}

async fn run_stages(
    host: &dyn BrowserHost,
    generator: &dyn SummaryGenerator,
    presenter: &dyn Presenter,
    options: &SessionOptions,
) -> Result<String, PipelineError> {
    // The language must be chosen before anything touches the page.
    if options.language.is_none() {
        return Err(PipelineError::LanguageNotSelected);
    }

    info!(state = ?PipelineState::Extracting, "Extracting page text");
    let (tab, text) = extractor::extract_page_text(host).await?;

    let request = SummaryRequest::new(text, options)?;
    info!(
        state = ?PipelineState::Requesting,
        language = %request.language,
        max_words = request.max_words,
        chars = request.source_text.len(),
        "Requesting summary"
    );
    let summary = generator.generate(&request).await?;

    info!(state = ?PipelineState::Presenting, "Presenting summary");
    presenter.present(host, &tab, &summary).await?;

    info!(state = ?PipelineState::Idle, "Pipeline complete");
    Ok(summary)
}

/// Surface a pipeline failure as a blocking alert in the active page.
///
/// Best effort: when no tab is reachable (or the alert itself fails) the
/// error is only logged. The alert is deferred with `setTimeout` because
/// `alert()` blocks the page's event loop and would otherwise stall the
/// evaluate call that delivers it.
async fn report_error(host: &dyn BrowserHost, error: &PipelineError) {
    error!(%error, "Summarization pipeline failed");

    let Ok(tab) = host.active_tab().await else {
        return;
    };
    let message = serde_json::to_string(&error.to_string()).expect("string serializes");
    let script = format!("setTimeout(function () {{ alert({message}); }}, 0);");
    if let Err(e) = host.run_in_page(&tab, &script).await {
        warn!(error = %e, "Could not surface error alert in page");
    }
}
