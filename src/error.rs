//! Error types.
//!
//! [`GroupError`] covers the partitioner itself; [`Error`] is the wider error of the
//! lookup layer (configuration, Datamuse requests) and wraps [`GroupError`].

use thiserror::Error;

/// Failure raised by [`group_by`](crate::group_by) or while building a
/// [`KeySelector`](crate::KeySelector).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The selector was neither a field name nor a key function.
    #[error("invalid key selector: expected a field name or a key function, found {found}")]
    InvalidSelector { found: String },

    /// Two derived keys have no defined order relative to each other.
    #[error("group keys cannot be ordered: `{left}` is not comparable with `{right}`")]
    KeyComparison { left: String, right: String },
}

/// Error type for configuration, Datamuse and rendering failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Group(#[from] GroupError),

    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request to {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("unexpected response body: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
