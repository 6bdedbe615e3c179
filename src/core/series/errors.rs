use thiserror::Error;

/// Errors raised while building a synthetic series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// A generation parameter is outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
