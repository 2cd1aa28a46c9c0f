//! Failure values shared by all token codecs.

use thiserror::Error;

/// Result of applying one directive payload to an entity.
///
/// Success carries no payload; every failure is a [`TokenError`] value.
/// Nothing at this layer panics or unwinds across the codec boundary.
pub type ParseOutcome = Result<(), TokenError>;

/// Errors raised while parsing dataset directives.
///
/// Codecs produce exactly two kinds: bad payload text in the dataset
/// (recoverable; the load pipeline reports it and continues) and rejected
/// fixed templates (a defect in the codec itself, never in the dataset).
/// `Unrecognized` is raised by the dispatch seam alone, before any codec
/// runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The directive payload was not a base-10 integer literal.
    #[error("Error encountered in {token} was expecting value to be an integer, found: {value}")]
    ExpectedInteger {
        token: &'static str,
        value: String,
    },

    /// A collaborator rejected a fixed template or spec string.
    #[error("Internal Error: {token} had invalid {what}")]
    Internal {
        token: &'static str,
        what: &'static str,
    },

    /// No codec is registered under the directive name.
    #[error("no race token named {name}")]
    Unrecognized { name: String },
}

impl TokenError {
    /// Whether this failure signals a defect rather than bad dataset input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
