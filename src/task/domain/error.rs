//! Error types for task validation.

use thiserror::Error;

/// Errors returned while validating task values.
///
/// This is the only error the store's CRUD surface returns. Lookups of
/// unknown identifiers are reported as `false` or `None`, never as an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id '{0}', expected a positive integer")]
    InvalidId(String),

    /// Every task identifier has been handed out.
    #[error("no task ids left to assign")]
    IdsExhausted,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured maximum length.
    #[error("title exceeds maximum length of {max} characters: {length}")]
    TitleTooLong {
        /// Title length in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The task description exceeds the configured maximum length.
    #[error("description exceeds maximum length of {max} characters: {length}")]
    DescriptionTooLong {
        /// Description length in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
}
