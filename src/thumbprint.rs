//! JWK Thumbprint computation (RFC 7638)

use sha2::{Digest, Sha256};
use tracing::trace;

use crate::backend::RsaBackend;
use crate::base64url;
use crate::bridge::KeyBridge;
use crate::error::Error;
use crate::keypair::KeyPair;

/// Canonical thumbprint input for an RSA key.
///
/// RFC 7638: members MUST be in lexicographic order, which for RSA is
/// `e < kty < n`. Values are used verbatim.
pub fn thumbprint_input(n: &str, e: &str) -> String {
    format!(r#"{{"e":"{}","kty":"RSA","n":"{}"}}"#, e, n)
}

/// Thumbprint of an RSA public key given its JWK `n` and `e` values.
pub fn thumbprint_from_parts(n: &str, e: &str) -> Result<String, Error> {
    if e.is_empty() {
        return Err(Error::MissingComponent("e".to_string()));
    }
    if n.is_empty() {
        return Err(Error::MissingComponent("n".to_string()));
    }
    let hash = Sha256::digest(thumbprint_input(n, e).as_bytes());
    Ok(base64url::to_websafe_base64(&base64url::encode(&hash)))
}

impl<B: RsaBackend> KeyBridge<B> {
    /// RFC 7638 thumbprint of the keypair's public JWK.
    ///
    /// The public JWK is exported (and memoized) first if needed. The
    /// thumbprint itself is never stored by this call.
    pub fn thumbprint(&self, key_pair: &mut KeyPair) -> Result<String, Error> {
        let jwk = self.export_public_jwk(key_pair)?;
        let thumbprint = thumbprint_from_parts(&jwk.n, &jwk.e)?;
        trace!(%thumbprint, "computed jwk thumbprint");
        Ok(thumbprint)
    }
}
