use crate::error::{DevcountError, Result};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;

/// One-way pseudonym for a commit author.
///
/// Wraps the SHA-1 digest (40 lowercase hex characters) of an author email.
/// The only ways to obtain a value are hashing an email or validating an
/// existing digest, so holding an `AuthorHash` is proof the raw email is
/// already gone. Deserialization re-validates, keeping the guarantee across
/// serde boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorHash(String);

impl AuthorHash {
    /// Hash a raw author email.
    ///
    /// Deterministic across calls and across processes; author
    /// deduplication relies on equal emails producing equal digests.
    pub fn of_email(email: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(email.as_bytes());
        AuthorHash(format!("{:x}", hasher.finalize()))
    }

    /// Accept an already-hashed identity, rejecting anything that is not
    /// exactly 40 lowercase hex characters. A raw email address fails here.
    /// The rejected value is not echoed into the error.
    pub fn from_hex(digest: String) -> Result<Self> {
        if is_sha1_hex(&digest) {
            Ok(AuthorHash(digest))
        } else {
            Err(DevcountError::InvalidIdentity(
                "expected a 40-character lowercase hex sha1 digest".to_string(),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AuthorHash {
    type Error = DevcountError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(value)
    }
}

impl From<AuthorHash> for String {
    fn from(hash: AuthorHash) -> Self {
        hash.0
    }
}

fn is_sha1_hex(s: &str) -> bool {
    s.len() == 40 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hashing_is_deterministic_and_matches_known_digests() {
        let hash1 = AuthorHash::of_email("someemail-1@somedomain.com");
        assert_eq!(hash1.as_str(), "069598f5bf317927731aecc6648bd521f6a12c92");
        assert_eq!(AuthorHash::of_email("someemail-1@somedomain.com"), hash1);

        let hash2 = AuthorHash::of_email("someemail-2@somedomain.com");
        assert_eq!(hash2.as_str(), "15726593ee5b5182412ca858e2472477f4ce9f30");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn digest_is_forty_lowercase_hex_chars() {
        let hash = AuthorHash::of_email("anyone@example.com");
        assert_eq!(hash.as_str().len(), 40);
        assert!(hash
            .as_str()
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn from_hex_accepts_well_formed_digests() {
        assert!(AuthorHash::from_hex("069598f5bf317927731aecc6648bd521f6a12c92".into()).is_ok());
        assert!(AuthorHash::from_hex("0123456789abcdef0123456789abcdef01234567".into()).is_ok());
    }

    #[test]
    fn from_hex_rejects_everything_else() {
        // a raw email must never pass for a hashed identity
        assert!(AuthorHash::from_hex("someemail-1@somedomain.com".into()).is_err());
        // non-hex letters
        assert!(AuthorHash::from_hex("abcdefghijklmnopqrstuvwxyz01234567890abc".into()).is_err());
        // 41 characters
        assert!(AuthorHash::from_hex("0123456789abcdef0123456789abcdef01234567a".into()).is_err());
        // 39 characters
        assert!(AuthorHash::from_hex("0123456789abcdef0123456789abcdef0123456".into()).is_err());
        // uppercase hex
        assert!(AuthorHash::from_hex("0123456789ABCDEF0123456789ABCDEF01234567".into()).is_err());
        assert!(AuthorHash::from_hex(String::new()).is_err());
    }

    #[test]
    fn rejection_does_not_echo_the_input() {
        let err = AuthorHash::from_hex("private@example.com".into()).unwrap_err();
        assert!(!err.to_string().contains("private@example.com"));
    }

    #[test]
    fn serde_round_trips_and_revalidates() {
        let hash = AuthorHash::of_email("someemail-1@somedomain.com");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"069598f5bf317927731aecc6648bd521f6a12c92\"");
        let back: AuthorHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);

        let raw: std::result::Result<AuthorHash, _> =
            serde_json::from_str("\"someemail-1@somedomain.com\"");
        assert!(raw.is_err());
    }
}
