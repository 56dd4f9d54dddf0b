use thiserror::Error;

/// Convenient result type for collection operations using [`CollectorError`] as the error type.
pub type CollectorResult<T> = Result<T, CollectorError>;

/// Errors surfaced by the collection pipeline.
///
/// Failures are never retried within a scrape. The orchestrator decides whether an error
/// degrades the whole scrape (task listing) or skips a single task (table statistics); the
/// next scrape cycle is the retry mechanism.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// A DMS control plane call failed. Carries the rendered error chain of the underlying
    /// SDK failure.
    #[error("DMS api call failed: {0}")]
    Api(String),

    /// A listing operation kept returning continuation markers past the defensive page cap.
    #[error("pagination did not terminate after {0} pages")]
    PageLimitExceeded(usize),
}
