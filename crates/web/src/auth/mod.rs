//! Admin authentication.

use sha2::{Digest, Sha256};

pub(crate) mod middleware;

/// Verifier for the shared admin secret.
///
/// Only a SHA-256 digest of the configured key is retained after startup;
/// candidates are digested before comparison so equal-length byte comparison
/// is all that ever runs.
#[derive(Clone)]
pub(crate) struct AdminKey {
    digest: [u8; 32],
}

impl AdminKey {
    /// Digest and retain the configured secret.
    pub(crate) fn new(key: &str) -> Self {
        Self {
            digest: Sha256::digest(key.as_bytes()).into(),
        }
    }

    /// Whether `candidate` matches the configured secret.
    pub(crate) fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();

        candidate == self.digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_key_verifies() {
        let key = AdminKey::new("secret");

        assert!(key.verify("secret"));
        assert!(!key.verify("Secret"));
        assert!(!key.verify(""));
    }
}
