//! Error types for the notes listing engine.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Every load failure is surfaced the same way by [`crate::initialize`]: the load
//! aborts, the fallback message replaces the listing and the controller starts with
//! an empty collection. Controller operations themselves never fail.

use thiserror::Error;

/// The main error type for `folio` operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// The manifest resource could not be fetched.
    #[error("failed to fetch manifest '{name}': {reason}")]
    ManifestFetch { name: String, reason: String },

    /// The manifest was fetched but is not a valid manifest document.
    #[error("failed to parse manifest '{name}': {reason}")]
    ManifestParse { name: String, reason: String },

    /// One of the article resources listed in the manifest could not be fetched.
    ///
    /// A single failing article invalidates the whole load.
    #[error("failed to fetch article '{name}': {reason}")]
    ArticleFetch { name: String, reason: String },

    /// An article resource is not parseable as an article record.
    #[error("failed to parse article '{name}': {reason}")]
    ArticleParse { name: String, reason: String },

    /// Two article records share the same identifier.
    #[error("duplicate article id '{0}'")]
    DuplicateArticleId(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for `folio` operations.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_resource() {
        let err = FolioError::ArticleParse {
            name: "a.json".to_string(),
            reason: "missing field `tag`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse article 'a.json': missing field `tag`"
        );

        let io = FolioError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.to_string(), "IO error: gone");
    }
}
