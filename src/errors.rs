use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("No path to a target node found")]
    NoPathFound,
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
