use thiserror::Error;

/// Failures crossing the privileged/page boundary.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("No active tab found")]
    NoActiveTab,

    #[error("Failed to evaluate script in page: {0}")]
    Evaluation(String),

    #[error("Failed to open window: {0}")]
    Window(String),

    #[error("Failed to reach browser: {0}")]
    Connection(String),
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No active tab found")]
    NoActiveTab,

    #[error("Failed to retrieve text content from the page")]
    EmptyPage,

    #[error("Failed to access the page: {0}")]
    Host(String),
}

impl From<HostError> for ExtractionError {
    fn from(error: HostError) -> Self {
        match error {
            HostError::NoActiveTab => ExtractionError::NoActiveTab,
            other => ExtractionError::Host(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to access completion API: {0}")]
    Api(String),
}

impl From<reqwest::Error> for SummarizationError {
    fn from(error: reqwest::Error) -> Self {
        SummarizationError::Http(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to inject summary into the page: {0}")]
    Script(String),

    #[error("Failed to create popup window: {0}")]
    Window(String),
}

impl From<HostError> for PresentationError {
    fn from(error: HostError) -> Self {
        match error {
            HostError::Window(msg) => PresentationError::Window(msg),
            other => PresentationError::Script(other.to_string()),
        }
    }
}

/// Top-level error for one summarization run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("Failed to generate summary: {0}")]
    Summarization(#[from] SummarizationError),

    #[error("{0}")]
    Presentation(#[from] PresentationError),

    #[error("No target language selected")]
    LanguageNotSelected,
}
