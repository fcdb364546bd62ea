//! Error types for hypermedia model construction and rendering.
//!
//! The builders themselves never fail. Errors surface at the edges: parsing
//! untrusted relation names or hrefs, and rendering models to HAL JSON.

use thiserror::Error;

/// The primary error type for the crate.
#[derive(Error, Debug)]
pub enum HateoasError {
    /// A link relation name was empty or contained whitespace.
    #[error("invalid link relation '{relation}': {reason}")]
    InvalidRelation {
        /// The rejected relation name.
        relation: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A link href was empty.
    #[error("invalid href for relation '{rel}': href must not be empty")]
    InvalidHref {
        /// The relation the link was being created for.
        rel: String,
    },

    /// Entity content did not serialize to a JSON object.
    #[error("entity content must serialize to a JSON object, got {kind}")]
    NonObjectContent {
        /// The JSON kind that was produced (array, string, ...).
        kind: &'static str,
    },

    /// Entity content used a property name reserved by HAL.
    #[error("entity content uses reserved HAL property '{property}'")]
    ReservedProperty {
        /// The reserved property name.
        property: String,
    },

    /// Serialization of model content failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for hypermedia operations.
pub type HateoasResult<T> = Result<T, HateoasError>;
