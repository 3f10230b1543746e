//! Verification-token construction for the account-linking flow.
//!
//! The token proves to the service that a link request for a given account id
//! came from a holder of the shared secret, without sending the secret itself.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{ApiError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Compute the verification token for `auth_id` keyed with `hmac_key`.
///
/// The construction is `base64(auth_id + ":" + base64(HMAC-SHA256(hmac_key, auth_id)))`
/// with the standard alphabet and padding kept in both layers. The service
/// decodes the outer layer, splits on the colon and recomputes the inner hash.
pub fn create_verification_hmac(auth_id: &str, hmac_key: &str) -> Result<String> {
    if hmac_key.is_empty() {
        return Err(ApiError::EmptyHmacKey);
    }

    let mut mac =
        HmacSha256::new_from_slice(hmac_key.as_bytes()).map_err(|_| ApiError::EmptyHmacKey)?;
    mac.update(auth_id.as_bytes());
    let hash = STANDARD.encode(mac.finalize().into_bytes());

    Ok(STANDARD.encode(format!("{}:{}", auth_id, hash)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference value for ("auth-123", "secret"), fixed across implementations
    const KNOWN_TOKEN: &str =
        "YXV0aC0xMjM6ekxJMjlqTW9CVjNaUFYyNFhoUlZuUG83M0o0aG41cWpaSkhOc2ZwWmVkND0=";

    #[test]
    fn test_known_vector() {
        let token = create_verification_hmac("auth-123", "secret").unwrap();
        assert_eq!(token, KNOWN_TOKEN);
    }

    #[test]
    fn test_deterministic() {
        let first = create_verification_hmac("auth-123", "secret").unwrap();
        let second = create_verification_hmac("auth-123", "secret").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_character_changes_output() {
        let base = create_verification_hmac("auth-123", "secret").unwrap();
        let other_id = create_verification_hmac("auth-124", "secret").unwrap();
        let other_key = create_verification_hmac("auth-123", "secres").unwrap();

        assert_ne!(base, other_id);
        assert_ne!(base, other_key);
        assert_ne!(other_id, other_key);
    }

    #[test]
    fn test_randomized_inputs_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..200 {
            let auth_id = format!("auth-{}", i * 7919);
            let key = format!("key-{}", i * 104729);
            let token = create_verification_hmac(&auth_id, &key).unwrap();
            assert!(seen.insert(token), "collision for {}", auth_id);
        }
    }

    #[test]
    fn test_outer_layer_structure() {
        let auth_id = "participant-42";
        let key = "shared-secret";
        let token = create_verification_hmac(auth_id, key).unwrap();

        let decoded = STANDARD.decode(&token).unwrap();
        let decoded = String::from_utf8(decoded).unwrap();

        let (id, hash) = decoded.split_once(':').unwrap();
        assert_eq!(id, auth_id);

        let mut mac = HmacSha256::new_from_slice(key.as_bytes()).unwrap();
        mac.update(auth_id.as_bytes());
        assert_eq!(hash, STANDARD.encode(mac.finalize().into_bytes()));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = create_verification_hmac("auth-123", "");
        assert!(matches!(result, Err(ApiError::EmptyHmacKey)));
    }
}
