use thiserror::Error;

/// Validated question text (trimmed, non-empty).
///
/// A question's identity is its own text; the session keeps questions in an
/// ordered list where duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create validated question text.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Empty` if the text is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, QuestionError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_text_is_trimmed() {
        let q = QuestionText::new("  Do you like jazz?  ").unwrap();
        assert_eq!(q.as_str(), "Do you like jazz?");
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = QuestionText::new("   ").unwrap_err();
        assert_eq!(err, QuestionError::Empty);
    }
}
