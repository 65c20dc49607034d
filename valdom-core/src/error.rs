//! Error types for the restriction model

use thiserror::Error;

/// Result type alias using [`RestrictionError`]
pub type Result<T> = std::result::Result<T, RestrictionError>;

/// Errors raised by restriction-tree operations
///
/// Failures are local and immediate; no operation partially mutates state
/// before reporting an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestrictionError {
    /// A union branch index outside the valid range was supplied
    #[error("resolved index {index} out of range: union has {len} alternative(s), valid indices are None or 0..{len}")]
    ResolvedIndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of alternatives in the union
        len: usize,
    },

    /// A literal was constructed with both a language tag and a datatype
    #[error("literal \"{lexical}\" cannot carry both a language tag and a datatype")]
    ConflictingLiteralQualifiers {
        /// Lexical form of the rejected literal
        lexical: String,
    },
}
