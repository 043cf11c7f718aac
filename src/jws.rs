//! RS256 JSON Web Signatures in the structured (non-compact) form used by
//! ACME clients.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::backend::{DigestAlgorithm, RsaBackend};
use crate::base64url;
use crate::bridge::KeyBridge;
use crate::error::Error;
use crate::keypair::KeyPair;
use crate::types::PublicJwk;

/// The only supported signature algorithm.
pub const ALG_RS256: &str = "RS256";

/// Payload to sign.
///
/// Text is taken to already be Base64 and is only converted to the URL-safe
/// alphabet; bytes are encoded first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwsPayload {
    Bytes(Vec<u8>),
    Base64(String),
}

impl JwsPayload {
    fn to_base64url(&self) -> String {
        match self {
            JwsPayload::Bytes(bytes) => base64url::encode_websafe(bytes),
            JwsPayload::Base64(b64) => base64url::to_websafe_base64(b64),
        }
    }
}

impl From<&[u8]> for JwsPayload {
    fn from(bytes: &[u8]) -> Self {
        JwsPayload::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for JwsPayload {
    fn from(bytes: &[u8; N]) -> Self {
        JwsPayload::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for JwsPayload {
    fn from(bytes: Vec<u8>) -> Self {
        JwsPayload::Bytes(bytes)
    }
}

impl From<&str> for JwsPayload {
    fn from(b64: &str) -> Self {
        JwsPayload::Base64(b64.to_string())
    }
}

impl From<String> for JwsPayload {
    fn from(b64: String) -> Self {
        JwsPayload::Base64(b64)
    }
}

/// Unprotected JWS header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwsHeader {
    pub alg: String,
    pub jwk: PublicJwk,
}

/// `{header: {alg, jwk}, protected, payload, signature}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwsEnvelope {
    pub header: JwsHeader,
    /// Base64URL of the protected header JSON (empty when there is no nonce).
    pub protected: String,
    /// Base64URL payload.
    pub payload: String,
    /// Base64URL RS256 signature over `protected.payload`.
    pub signature: String,
}

impl JwsEnvelope {
    /// `<protected>.<payload>`, the exact bytes that were signed.
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.protected, self.payload)
    }
}

#[derive(Serialize)]
struct NonceHeader<'a> {
    nonce: &'a str,
}

fn protected_header(nonce: Option<&str>) -> Result<String, Error> {
    match nonce {
        Some(nonce) => Ok(serde_json::to_string(&NonceHeader { nonce })?),
        None => Ok(String::new()),
    }
}

impl<B: RsaBackend> KeyBridge<B> {
    /// Sign `payload` with the keypair's private key.
    ///
    /// # Errors
    ///
    /// [`Error::Signing`] if the keypair has no private key material.
    pub fn sign_jws(
        &self,
        key_pair: &mut KeyPair,
        payload: impl Into<JwsPayload>,
        nonce: Option<&str>,
    ) -> Result<JwsEnvelope, Error> {
        if !key_pair.has_private() {
            return Err(Error::Signing(
                "a private key is required to sign a JWS".to_string(),
            ));
        }
        let jwk = self.export_public_jwk(key_pair)?;

        let protected = base64url::encode_websafe(protected_header(nonce)?.as_bytes());
        let payload = payload.into().to_base64url();
        let signing_input = format!("{}.{}", protected, payload);
        let digest = Sha256::digest(signing_input.as_bytes());

        let handle = self.ensure_handle(key_pair)?;
        let signature = self
            .backend()
            .sign(handle, DigestAlgorithm::Sha256, &digest)?;
        trace!(nonce = nonce.is_some(), "signed jws");

        Ok(JwsEnvelope {
            header: JwsHeader {
                alg: ALG_RS256.to_string(),
                jwk,
            },
            protected,
            payload,
            signature: base64url::encode_websafe(&signature),
        })
    }

    /// Check an envelope's signature against the public key in its header.
    ///
    /// Returns `Ok(false)` for a signature that does not verify or an
    /// algorithm other than RS256.
    pub fn verify_jws(&self, envelope: &JwsEnvelope) -> Result<bool, Error> {
        if envelope.header.alg != ALG_RS256 {
            return Ok(false);
        }
        let handle = self
            .backend()
            .import_public_components(&envelope.header.jwk.to_components()?)?;
        let signature = base64url::decode(&envelope.signature)?;
        let digest = Sha256::digest(envelope.signing_input().as_bytes());

        match self
            .backend()
            .verify(&handle, DigestAlgorithm::Sha256, &digest, &signature)
        {
            Ok(()) => Ok(true),
            Err(Error::Rsa(rsa::Error::Verification)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrivateJwk;

    const PRIVATE_PEM: &str = include_str!("../tests/fixtures/privkey.pem");
    const PRIVATE_JWK: &str = include_str!("../tests/fixtures/private_jwk.json");
    const PUBLIC_JWK: &str = include_str!("../tests/fixtures/public_jwk.json");

    // Produced with OpenSSL for the fixture key; PKCS#1 v1.5 is deterministic.
    const EXPECTED_PROTECTED: &str = "eyJub25jZSI6ImFiYy0xMjMifQ";
    const EXPECTED_PAYLOAD: &str = "eyJyZXNvdXJjZSI6Im5ldy1yZWcifQ";
    const EXPECTED_SIGNATURE: &str = "Yk_1LlGFO4hCsGBm6bDl_gxYL7X5GGDL8wd9InCvZQVv0MyqiAwTXBS9iilu8lgi5HCLrMzxEtU9w2vBYi60mk0KQIaD84UJeex60fnQB0pAS0A27LedC-1HRJGG1RfLLkWe0snLidXMjHy3lJAqNrskvQrawfSh-wD5Mp17tdhU2QjiwPRmSgWTzeI8U19k1Tem3iFIJYAJF3dbaBY-CyVqF4yhily6sFVVL1xy3g4UzKFHDhqOkp2K4GICkOHsXGQXmsM0AaIH5eVzQaLryuhyvh1e59TYny-BkC_RUrEQwZDmqZg5DqlzrXkta5rCyMM5sFG-e32xCymANcdmYg";

    #[test]
    fn test_known_signature() {
        let bridge = KeyBridge::new();
        let mut kp = KeyPair::from_private_pem(PRIVATE_PEM);
        let jws = bridge
            .sign_jws(&mut kp, br#"{"resource":"new-reg"}"#, Some("abc-123"))
            .unwrap();

        assert_eq!(jws.header.alg, "RS256");
        assert_eq!(
            jws.header.jwk,
            serde_json::from_str::<PublicJwk>(PUBLIC_JWK).unwrap()
        );
        assert_eq!(jws.protected, EXPECTED_PROTECTED);
        assert_eq!(jws.payload, EXPECTED_PAYLOAD);
        assert_eq!(jws.signature, EXPECTED_SIGNATURE);
    }

    #[test]
    fn test_text_payload_is_treated_as_base64() {
        let bridge = KeyBridge::new();
        let mut kp = KeyPair::from_private_pem(PRIVATE_PEM);
        let from_bytes = bridge
            .sign_jws(&mut kp, br#"{"resource":"new-reg"}"#, Some("abc-123"))
            .unwrap();
        let from_text = bridge
            .sign_jws(&mut kp, "eyJyZXNvdXJjZSI6Im5ldy1yZWcifQ==", Some("abc-123"))
            .unwrap();
        assert_eq!(from_bytes, from_text);
    }

    #[test]
    fn test_no_nonce_gives_empty_protected_header() {
        let bridge = KeyBridge::new();
        let mut kp = KeyPair::from_private_jwk(serde_json::from_str(PRIVATE_JWK).unwrap());
        let jws = bridge.sign_jws(&mut kp, b"hello".as_slice(), None).unwrap();
        assert_eq!(jws.protected, "");
        assert!(jws.signing_input().starts_with('.'));
        assert!(bridge.verify_jws(&jws).unwrap());
    }

    #[test]
    fn test_sign_and_verify() {
        let bridge = KeyBridge::new();
        let mut kp = KeyPair::from_private_pem(PRIVATE_PEM);
        let jws = bridge
            .sign_jws(&mut kp, b"payload".to_vec(), Some("nonce-1"))
            .unwrap();
        assert!(bridge.verify_jws(&jws).unwrap());

        let mut tampered = jws.clone();
        tampered.payload = base64url::encode_websafe(b"other");
        assert!(!bridge.verify_jws(&tampered).unwrap());

        let mut wrong_alg = jws;
        wrong_alg.header.alg = "HS256".to_string();
        assert!(!bridge.verify_jws(&wrong_alg).unwrap());
    }

    #[test]
    fn test_public_only_cannot_sign() {
        let bridge = KeyBridge::new();
        let mut kp = KeyPair::from_public_jwk(serde_json::from_str(PUBLIC_JWK).unwrap());
        assert!(matches!(
            bridge.sign_jws(&mut kp, b"payload", None),
            Err(Error::Signing(_))
        ));
        assert!(matches!(
            bridge.sign_jws(&mut KeyPair::new(), b"payload", None),
            Err(Error::Signing(_))
        ));
    }

    #[test]
    fn test_header_jwk_reuses_private_jwk_strings() {
        let bridge = KeyBridge::new();
        let private: PrivateJwk = serde_json::from_str(PRIVATE_JWK).unwrap();
        let mut kp = KeyPair::from_private_jwk(private.clone());
        let jws = bridge.sign_jws(&mut kp, b"x", None).unwrap();
        assert_eq!(jws.header.jwk.n, private.n);
        assert_eq!(kp.public_key_jwk.as_ref(), Some(&jws.header.jwk));
    }

    #[test]
    fn test_envelope_json_shape() {
        let bridge = KeyBridge::new();
        let mut kp = KeyPair::from_private_pem(PRIVATE_PEM);
        let jws = bridge.sign_jws(&mut kp, b"x", Some("n")).unwrap();
        let value = serde_json::to_value(&jws).unwrap();
        assert_eq!(value["header"]["alg"], "RS256");
        assert_eq!(value["header"]["jwk"]["kty"], "RSA");
        assert!(value["protected"].is_string());
        assert!(value["payload"].is_string());
        assert!(value["signature"].is_string());
    }
}
