use thiserror::Error;
use url::Url;

/// Base for the placeholder share link. Display-only; nothing routes here.
const SHARE_BASE_URL: &str = "https://yourapp.com/questionnaire/";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShareError {
    #[error("share token cannot be empty")]
    EmptyToken,

    #[error("share link could not be built: {0}")]
    InvalidLink(#[from] url::ParseError),
}

/// Opaque display-only token standing in for a respondent link id.
///
/// Not a functional identifier: nothing resolves it, and no collision
/// registry exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareToken(String);

impl ShareToken {
    /// Create a validated share token.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::EmptyToken` if the token is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ShareError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ShareError::EmptyToken);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShareToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placeholder URL pointing at the respondent's submission page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink(Url);

impl ShareLink {
    /// Build the placeholder link for a token.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::InvalidLink` if the token does not form a valid
    /// URL path segment.
    pub fn for_token(token: &ShareToken) -> Result<Self, ShareError> {
        let base = Url::parse(SHARE_BASE_URL)?;
        let url = base.join(token.as_str())?;
        Ok(Self(url))
    }

    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ShareLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_trimmed_and_non_empty() {
        let token = ShareToken::new(" abc123 ").unwrap();
        assert_eq!(token.as_str(), "abc123");

        let err = ShareToken::new("   ").unwrap_err();
        assert_eq!(err, ShareError::EmptyToken);
    }

    #[test]
    fn link_embeds_the_token() {
        let token = ShareToken::new("k9f3a1m2x7q4z").unwrap();
        let link = ShareLink::for_token(&token).unwrap();

        assert_eq!(
            link.as_str(),
            "https://yourapp.com/questionnaire/k9f3a1m2x7q4z"
        );
        assert_eq!(link.as_url().scheme(), "https");
    }
}
