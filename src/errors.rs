use serde::Serialize;

/// Failure raised by a lookup collaborator.
///
/// There is exactly one class of failure the aggregation core cares
/// about: the collaborator could not produce data. The aggregator
/// treats every variant the same way - the affected source degrades to
/// an empty collection and the other sources proceed - so the variants
/// exist for host-side logging, not for control flow.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum LookupError {
    #[error("lookup backend unavailable: {0}")]
    Unavailable(String),

    #[error("lookup query failed: {0}")]
    QueryFailed(String),
}

/// Crate-level error surface for host applications.
///
/// The aggregation entry points themselves are infallible; this type
/// exists so hosts composing lookup implementations and configuration
/// loading can carry one error type across the seam.
#[derive(Debug, thiserror::Error)]
pub enum LinkageError {
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::AppConfigError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
