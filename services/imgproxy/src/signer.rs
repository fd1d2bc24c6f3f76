use imgsign_core::hash::base64_url_hmac_sha256;

use crate::constants::INSECURE_SIGNATURE;
use crate::Credential;

/// Signer computes the signature segment of an imgproxy URL.
///
/// ## Format
///
/// ```text
/// base64url(HMAC-SHA256(key, salt + path))
/// ```
///
/// The salt is prepended to the path bytes. Without credential the
/// signature is the literal `insecure`, which imgproxy accepts when signing
/// is disabled on its side.
///
/// ## Reference
///
/// - [Signing a URL](https://docs.imgproxy.net/usage/signing_url)
#[derive(Debug, Clone, Default)]
pub struct Signer {
    credential: Option<Credential>,
}

impl Signer {
    /// Create a signer. `None` means insecure mode.
    pub fn new(credential: Option<Credential>) -> Self {
        Self { credential }
    }

    /// Check if a credential is configured.
    pub fn is_secure(&self) -> bool {
        self.credential.is_some()
    }

    /// Sign the canonical path, including its leading `/`.
    pub fn sign(&self, path: &str) -> String {
        match &self.credential {
            None => INSECURE_SIGNATURE.to_string(),
            Some(cred) => base64_url_hmac_sha256(&cred.key, &cred.salt, path.as_bytes()),
        }
    }
}
