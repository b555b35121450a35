//! Compact HS256 tokens for placed orders
//!
//! `POST /api/order` hands back a JWT describing the order and
//! `POST /api/order/verify` checks it. Only the signature is checked; there
//! are no registered claims.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{digest::InvalidLength, Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Signs and verifies order JWTs with a shared secret
#[derive(Clone)]
pub struct OrderJwtSigner {
    mac: HmacSha256,
}

impl OrderJwtSigner {
    pub fn new(secret: &str) -> Result<Self, InvalidLength> {
        Ok(Self {
            mac: HmacSha256::new_from_slice(secret.as_bytes())?,
        })
    }

    /// Encode `claims` as `header.payload.signature`
    pub fn sign(&self, claims: &Value) -> Result<String, serde_json::Error> {
        let header = URL_SAFE_NO_PAD.encode(HEADER);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
        let signing_input = format!("{}.{}", header, payload);

        let mut mac = self.mac.clone();
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Return the claims when the signature matches, `None` otherwise
    pub fn verify(&self, jwt: &str) -> Option<Value> {
        let mut parts = jwt.split('.');
        let (header, payload, signature) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;
        let mut mac = self.mac.clone();
        mac.update(format!("{}.{}", header, payload).as_bytes());
        if mac.verify_slice(&signature).is_err() {
            tracing::debug!("Order JWT signature mismatch");
            return None;
        }

        let payload = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&payload).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signer() -> OrderJwtSigner {
        OrderJwtSigner::new("test-secret").unwrap()
    }

    #[test]
    fn signed_token_has_three_parts() {
        let jwt = signer().sign(&json!({"id": 23})).unwrap();
        assert_eq!(jwt.split('.').count(), 3);
        assert!(jwt.starts_with("eyJ")); // base64 of `{"`
    }

    #[test]
    fn verify_returns_claims() {
        let claims = json!({"vendor": {"id": "mock"}, "order": {"id": 23}});
        let jwt = signer().sign(&claims).unwrap();

        assert_eq!(signer().verify(&jwt), Some(claims));
    }

    #[test]
    fn verify_rejects_other_secret() {
        let jwt = signer().sign(&json!({"id": 1})).unwrap();
        let other = OrderJwtSigner::new("other-secret").unwrap();

        assert!(other.verify(&jwt).is_none());
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let jwt = signer().sign(&json!({"id": 1})).unwrap();
        let mut parts: Vec<&str> = jwt.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(r#"{"id":2}"#);
        parts[1] = &forged;

        assert!(signer().verify(&parts.join(".")).is_none());
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(signer().verify("").is_none());
        assert!(signer().verify("eyJpYXQ").is_none());
        assert!(signer().verify("a.b.c.d").is_none());
        assert!(signer().verify("a.b.!!!").is_none());
    }
}
