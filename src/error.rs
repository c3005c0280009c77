//! Error types for index calculation and author lookup

use thiserror::Error;

/// Errors raised by the D-Index core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DIndexError {
    /// The author has no publications, so there is nothing to average
    #[error("no publications found for {author}; the D-Index needs at least one")]
    NoPublications { author: String },

    /// A collaborator in the collaboration map has no node in the graph
    #[error(
        "collaborator {collaborator} on publication {publication} is missing from the collaboration graph"
    )]
    GraphInconsistency {
        collaborator: String,
        publication: String,
    },

    /// No record in the store carries this name
    #[error("author not found: {name}")]
    AuthorNotFound { name: String },
}

pub type IndexResult<T> = Result<T, DIndexError>;
