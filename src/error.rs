/// Engine-level errors
///
/// Pure scoring and aggregation functions are total and never return these;
/// only input-validating constructors and the orchestration layer around the
/// external collaborators do.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
