use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use serde_json::{Map, Value};
use sha2::Sha384;
use std::collections::HashMap;

type HmacSha384 = Hmac<Sha384>;

/// Headers and the exact body bytes of an authenticated request.
///
/// The body is produced by the signer so that what goes on the wire is
/// byte-for-byte what was signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Signer trait for request authentication
///
/// Each implementation is one authentication scheme. Implementations own
/// their nonce source, so repeated calls on one signer never reuse a nonce.
pub trait Signer: Send + Sync {
    /// Sign an authenticated POST
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint path, as listed in the endpoint catalog
    /// * `params` - Endpoint-specific parameters
    fn sign_request(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
    ) -> Result<SignedRequest, ExchangeError>;
}

/// Lowercase hex HMAC-SHA384 of `message` keyed by `secret`
pub fn hmac_sha384_hex(secret: &[u8], message: &[u8]) -> Result<String, ExchangeError> {
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|e| ExchangeError::AuthError(format!("Invalid secret key: {}", e)))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha384_hex_is_lowercase_and_96_chars() {
        let digest = hmac_sha384_hex(b"key", b"message").unwrap();
        assert_eq!(digest.len(), 96);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_hmac_sha384_hex_depends_on_key() {
        let a = hmac_sha384_hex(b"key-a", b"message").unwrap();
        let b = hmac_sha384_hex(b"key-b", b"message").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, hmac_sha384_hex(b"key-a", b"message").unwrap());
    }
}
