//! Completion-service client.

pub mod client;

pub use client::{LlmClient, NO_SUMMARY_PLACEHOLDER};

use async_trait::async_trait;

use crate::core::models::SummaryRequest;
use crate::errors::SummarizationError;

/// Seam over the completion service so the pipeline can be tested without
/// network access.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(&self, request: &SummaryRequest) -> Result<String, SummarizationError>;
}
