//! Session tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// An opaque session token.
///
/// Issued at login and persisted to device storage; its presence is
/// what marks the session authenticated. There is no server to validate
/// it against, so the value carries no claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 24];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(format!("bd_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_prefixed_and_unique() {
        let a = SessionToken::generate();
        let b = SessionToken::generate();

        assert!(a.as_str().starts_with("bd_"));
        assert_ne!(a, b);
    }
}
