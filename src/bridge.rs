use crate::backend::{RsaBackend, RustCryptoBackend};

/// Entry point for every keypair operation.
///
/// Holds the [`RsaBackend`] that performs the actual RSA work. Operations are
/// split by concern across `normalize`, `thumbprint`, `jws` and `generate`.
///
/// ```rust
/// use rsa_compat::{GenerateOptions, KeyBridge};
///
/// let bridge = KeyBridge::new();
/// let options = GenerateOptions { public: true, jwk: true, ..Default::default() };
/// let mut key_pair = bridge.generate_key_pair(1024, 65537, &options).unwrap();
///
/// let thumbprint = bridge.thumbprint(&mut key_pair).unwrap();
/// assert_eq!(thumbprint.len(), 43);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyBridge<B = RustCryptoBackend> {
    backend: B,
}

impl KeyBridge<RustCryptoBackend> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: RsaBackend> KeyBridge<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
