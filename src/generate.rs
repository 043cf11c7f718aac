use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::RsaBackend;
use crate::bridge::KeyBridge;
use crate::error::Error;
use crate::keypair::KeyPair;
use crate::thumbprint::thumbprint_from_parts;

pub const DEFAULT_BITS: usize = 2048;
pub const DEFAULT_EXPONENT: u64 = 65537;

/// Which representations to produce eagerly after generation.
///
/// Every flag defaults to `false`, so a generated keypair carries only its
/// live handle unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Also export the public halves of the requested formats.
    pub public: bool,
    pub jwk: bool,
    pub pem: bool,
    /// Attach a thumbprint (implies the private JWK).
    pub thumbprint: bool,
}

impl<B: RsaBackend> KeyBridge<B> {
    /// Generate a new RSA keypair and export what `options` requests.
    ///
    /// `bits` and `exponent` are passed to the backend untouched; it rejects
    /// values it cannot use and that error is returned as-is.
    pub fn generate_key_pair(
        &self,
        bits: usize,
        exponent: u64,
        options: &GenerateOptions,
    ) -> Result<KeyPair, Error> {
        debug!(bits, exponent, ?options, "generating rsa keypair");
        let mut key_pair = KeyPair::from_handle(self.backend().generate(bits, exponent)?);

        if options.jwk || options.thumbprint {
            self.export_private_jwk(&mut key_pair)?;
            if options.public {
                self.export_public_jwk(&mut key_pair)?;
            }
        }

        if options.pem {
            self.export_private_pem(&mut key_pair)?;
            if options.public {
                self.export_public_pem(&mut key_pair)?;
            }
        }

        if options.thumbprint {
            // From the private JWK, so no public JWK is stored unless asked for.
            let jwk = self.export_private_jwk(&mut key_pair)?;
            key_pair.thumbprint = Some(thumbprint_from_parts(&jwk.n, &jwk.e)?);
        }

        Ok(key_pair)
    }

    /// [`generate_key_pair`](Self::generate_key_pair) with 2048 bits and exponent 65537.
    pub fn generate_default_key_pair(&self, options: &GenerateOptions) -> Result<KeyPair, Error> {
        self.generate_key_pair(DEFAULT_BITS, DEFAULT_EXPONENT, options)
    }
}
