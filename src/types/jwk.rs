use serde::{Deserialize, Serialize};

use crate::base64url;
use crate::error::Error;
use crate::types::components::{PrivateComponents, PublicComponents};

/// Key type tag carried by every RSA JWK.
pub const KTY_RSA: &str = "RSA";

fn default_kty() -> String {
    KTY_RSA.to_string()
}

/// Public RSA JWK: `{kty, n, e}`.
///
/// Component values are standard Base64 of big-endian bytes. A field missing
/// from JSON deserializes as an empty string and is reported as a missing
/// component when used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicJwk {
    #[serde(default = "default_kty")]
    pub kty: String,
    #[serde(default)]
    pub n: String,
    #[serde(default)]
    pub e: String,
}

/// Private RSA JWK: `{kty, n, e, p, q, dp, dq, qi, d}`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateJwk {
    #[serde(default = "default_kty")]
    pub kty: String,
    #[serde(default)]
    pub n: String,
    #[serde(default)]
    pub e: String,
    #[serde(default)]
    pub p: String,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub dp: String,
    #[serde(default)]
    pub dq: String,
    #[serde(default)]
    pub qi: String,
    #[serde(default)]
    pub d: String,
}

impl std::fmt::Debug for PrivateJwk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateJwk")
            .field("kty", &self.kty)
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

fn decode_field(name: &str, value: &str) -> Result<Vec<u8>, Error> {
    if value.is_empty() {
        return Err(Error::MissingComponent(name.to_string()));
    }
    base64url::decode(value)
}

impl PublicJwk {
    pub fn from_components(components: &PublicComponents) -> Self {
        Self {
            kty: default_kty(),
            n: base64url::encode(&components.n),
            e: base64url::encode(&components.e),
        }
    }

    /// Decode `n` and `e`.
    pub fn to_components(&self) -> Result<PublicComponents, Error> {
        Ok(PublicComponents {
            n: decode_field("n", &self.n)?,
            e: decode_field("e", &self.e)?,
        })
    }
}

impl PrivateJwk {
    pub fn from_components(components: &PrivateComponents) -> Self {
        Self {
            kty: default_kty(),
            n: base64url::encode(&components.n),
            e: base64url::encode(&components.e),
            p: base64url::encode(&components.p),
            q: base64url::encode(&components.q),
            dp: base64url::encode(&components.dp),
            dq: base64url::encode(&components.dq),
            qi: base64url::encode(&components.qi),
            d: base64url::encode(&components.d),
        }
    }

    /// Decode all eight fields, in the order `n, e, p, q, dp, dq, qi, d`.
    pub fn to_components(&self) -> Result<PrivateComponents, Error> {
        Ok(PrivateComponents {
            n: decode_field("n", &self.n)?,
            e: decode_field("e", &self.e)?,
            p: decode_field("p", &self.p)?,
            q: decode_field("q", &self.q)?,
            dp: decode_field("dp", &self.dp)?,
            dq: decode_field("dq", &self.dq)?,
            qi: decode_field("qi", &self.qi)?,
            d: decode_field("d", &self.d)?,
        })
    }

    /// The public half, with `n` and `e` copied verbatim.
    pub fn to_public(&self) -> PublicJwk {
        PublicJwk {
            kty: default_kty(),
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }
}
