use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds for one pipeline run. A run either completes all its
/// steps or aborts with exactly one of these; no partial results.
#[derive(Error, Debug)]
pub enum Error {
    /// Network/HTTP-layer failure calling the patent search service.
    #[error("patent search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The search service answered but flagged an application-level
    /// error (can happen even on HTTP 200).
    #[error("patent search service error: {0}")]
    Service(String),

    /// Generation backend request failed or returned an unusable body.
    #[error("generation backend error: {0}")]
    Backend(String),

    /// No extraction strategy could recover JSON from the model output.
    /// Carries the raw text for diagnosis.
    #[error("could not extract JSON from model output: {raw:?}")]
    ResponseParse { raw: String },

    /// Extracted JSON lacks or mismatches a field required by the
    /// current pipeline step.
    #[error("{step} output missing or invalid field: {detail}")]
    Schema {
        step: &'static str,
        detail: String,
    },
}
