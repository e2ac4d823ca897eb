//! Validation policy applied to task titles and descriptions.

use super::TaskValidationError;

/// Configurable validation limits for task fields.
///
/// Lengths are counted in characters, not bytes. A `None` limit disables
/// the corresponding cap; empty or whitespace-only titles are rejected under
/// every policy.
///
/// # Examples
///
/// ```
/// use tasklist::task::domain::TaskPolicy;
///
/// let policy = TaskPolicy::default();
/// assert_eq!(policy.max_title_chars, Some(100));
///
/// let lenient = TaskPolicy::lenient();
/// assert_eq!(lenient.max_title_chars, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPolicy {
    /// Maximum title length in characters.
    pub max_title_chars: Option<usize>,
    /// Maximum description length in characters.
    pub max_description_chars: Option<usize>,
}

impl Default for TaskPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl TaskPolicy {
    /// Title cap used by the strict policy.
    pub const STRICT_MAX_TITLE_CHARS: usize = 100;
    /// Description cap used by the strict policy.
    pub const STRICT_MAX_DESCRIPTION_CHARS: usize = 500;

    /// Creates the strict policy: titles up to 100 characters and
    /// descriptions up to 500.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: Some(Self::STRICT_MAX_TITLE_CHARS),
            max_description_chars: Some(Self::STRICT_MAX_DESCRIPTION_CHARS),
        }
    }

    /// Creates a lenient policy without length caps.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_title_chars: None,
            max_description_chars: None,
        }
    }

    /// Trims and validates a title, returning the normalized value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyTitle`] for blank titles and
    /// [`TaskValidationError::TitleTooLong`] when the trimmed title exceeds
    /// the cap.
    pub fn validate_title(&self, title: &str) -> Result<String, TaskValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if let Some(max) = self.max_title_chars {
            let length = trimmed.chars().count();
            if length > max {
                return Err(TaskValidationError::TitleTooLong { length, max });
            }
        }
        Ok(trimmed.to_owned())
    }

    /// Validates a description against the cap.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::DescriptionTooLong`] when the
    /// description exceeds the cap.
    pub fn validate_description(&self, description: &str) -> Result<(), TaskValidationError> {
        if let Some(max) = self.max_description_chars {
            let length = description.chars().count();
            if length > max {
                return Err(TaskValidationError::DescriptionTooLong { length, max });
            }
        }
        Ok(())
    }
}
