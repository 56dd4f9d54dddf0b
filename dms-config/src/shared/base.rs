use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Only one half of the static credential pair was provided.
    #[error(
        "Invalid AWS config: `access_key_id` and `secret_access_key` must be set together or not at all"
    )]
    PartialStaticCredentials,

    /// The region is empty, which would produce unlabeled metrics and invalid API requests.
    #[error("Invalid AWS config: `region` must not be empty")]
    MissingRegion,
}
