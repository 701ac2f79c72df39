use rand::Rng;

use quiz_core::model::{ShareError, ShareToken};

/// Number of base-36 characters in a generated share token.
const TOKEN_LEN: usize = 13;

const TOKEN_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of share tokens for publishing questionnaires.
///
/// Mirrors the `Clock` switch: `Random` for production use, `Fixed` for
/// deterministic tests. Tokens are display-only, so a short random
/// fragment is entropy enough.
#[derive(Debug, Clone, Default)]
pub enum TokenGenerator {
    /// Draw a fresh random base-36 fragment per publish.
    #[default]
    Random,
    /// Always yield the given token.
    Fixed(ShareToken),
}

impl TokenGenerator {
    /// Returns a generator fixed at the given token.
    #[must_use]
    pub fn fixed(token: ShareToken) -> Self {
        Self::Fixed(token)
    }

    /// Produce the next share token.
    ///
    /// # Errors
    ///
    /// Returns `ShareError` if the generated fragment fails token
    /// validation; a `Random` fragment of `TOKEN_LEN` characters never
    /// does.
    pub fn generate(&self) -> Result<ShareToken, ShareError> {
        match self {
            TokenGenerator::Random => ShareToken::new(random_fragment()),
            TokenGenerator::Fixed(token) => Ok(token.clone()),
        }
    }
}

fn random_fragment() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_ALPHABET.len());
            char::from(TOKEN_ALPHABET[idx])
        })
        .collect()
}
