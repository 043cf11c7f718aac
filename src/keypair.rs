use serde::{Deserialize, Serialize};

use crate::backend::KeyHandle;
use crate::types::{PrivateComponents, PrivateJwk, PublicComponents, PublicJwk};

/// An RSA key held in any subset of its supported representations.
///
/// Every populated field must describe the same key. Nothing here checks
/// that; the normalizer trusts what the caller supplies. Derived
/// representations are written back by [`KeyBridge`](crate::KeyBridge) and
/// never recomputed once present.
///
/// The JSON form carries the PEM and JWK representations plus the
/// thumbprint, using the field names `privateKeyPem`, `publicKeyPem`,
/// `privateKeyJwk`, `publicKeyJwk` and `thumbprint`.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_pem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_pem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_jwk: Option<PrivateJwk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_jwk: Option<PublicJwk>,
    #[serde(skip)]
    pub private_components: Option<PrivateComponents>,
    #[serde(skip)]
    pub public_components: Option<PublicComponents>,
    /// Live key from the backend; the only representation that can sign.
    #[serde(skip)]
    pub handle: Option<KeyHandle>,
    /// Attached only when generation asked for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbprint: Option<String>,
}

/// Where a live handle can be obtained from, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    PrivateHandle,
    PrivatePem,
    PrivateJwk,
    PrivateComponents,
    PublicHandle,
    PublicPem,
    PublicJwk,
    PublicComponents,
}

impl KeySource {
    pub fn is_private(self) -> bool {
        matches!(
            self,
            KeySource::PrivateHandle
                | KeySource::PrivatePem
                | KeySource::PrivateJwk
                | KeySource::PrivateComponents
        )
    }
}

impl KeyPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_private_pem(pem: impl Into<String>) -> Self {
        Self {
            private_key_pem: Some(pem.into()),
            ..Self::default()
        }
    }

    pub fn from_public_pem(pem: impl Into<String>) -> Self {
        Self {
            public_key_pem: Some(pem.into()),
            ..Self::default()
        }
    }

    pub fn from_private_jwk(jwk: PrivateJwk) -> Self {
        Self {
            private_key_jwk: Some(jwk),
            ..Self::default()
        }
    }

    pub fn from_public_jwk(jwk: PublicJwk) -> Self {
        Self {
            public_key_jwk: Some(jwk),
            ..Self::default()
        }
    }

    pub fn from_private_components(components: PrivateComponents) -> Self {
        Self {
            private_components: Some(components),
            ..Self::default()
        }
    }

    pub fn from_public_components(components: PublicComponents) -> Self {
        Self {
            public_components: Some(components),
            ..Self::default()
        }
    }

    /// Wrap a live backend key.
    pub fn from_handle(handle: KeyHandle) -> Self {
        Self {
            handle: Some(handle),
            ..Self::default()
        }
    }

    /// The best source for a live handle, private material first.
    ///
    /// A public handle only wins when no private representation exists.
    pub fn source(&self) -> Option<KeySource> {
        let handle_private = self.handle.as_ref().map(KeyHandle::is_private);
        if handle_private == Some(true) {
            Some(KeySource::PrivateHandle)
        } else if self.private_key_pem.is_some() {
            Some(KeySource::PrivatePem)
        } else if self.private_key_jwk.is_some() {
            Some(KeySource::PrivateJwk)
        } else if self.private_components.is_some() {
            Some(KeySource::PrivateComponents)
        } else if handle_private == Some(false) {
            Some(KeySource::PublicHandle)
        } else if self.public_key_pem.is_some() {
            Some(KeySource::PublicPem)
        } else if self.public_key_jwk.is_some() {
            Some(KeySource::PublicJwk)
        } else if self.public_components.is_some() {
            Some(KeySource::PublicComponents)
        } else {
            None
        }
    }

    /// True if any private representation is present.
    pub fn has_private(&self) -> bool {
        self.source().map_or(false, KeySource::is_private)
    }

    pub fn is_empty(&self) -> bool {
        self.source().is_none()
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key_pem", &self.private_key_pem.is_some())
            .field("public_key_pem", &self.public_key_pem.is_some())
            .field("private_key_jwk", &self.private_key_jwk.is_some())
            .field("public_key_jwk", &self.public_key_jwk)
            .field("private_components", &self.private_components.is_some())
            .field("public_components", &self.public_components.is_some())
            .field("handle", &self.handle)
            .field("thumbprint", &self.thumbprint)
            .finish()
    }
}
