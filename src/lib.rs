//! # rsa-compat
//!
//! RSA keypair bridge between raw components, PEM and JSON Web Keys.
//!
//! A [`KeyPair`] may arrive holding any subset of its representations. A
//! [`KeyBridge`] derives whichever one is asked for, lazily, and memoizes the
//! result on the same keypair. On top of that it computes RFC 7638 JWK
//! thumbprints and RS256 JSON Web Signatures for ACME-style protocols.
//!
//! ## Features
//!
//! - **Normalization**: private/public PEM, JWK and components, in any direction
//! - **Thumbprints**: RFC 7638 canonical input, SHA-256, Base64URL
//! - **JWS**: RS256 signing and verification of `{header, protected, payload, signature}`
//! - **Key Generation**: eager export of the formats selected in [`GenerateOptions`]
//! - **Pluggable Backend**: RSA primitives sit behind the [`RsaBackend`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use rsa_compat::{GenerateOptions, KeyBridge, KeyPair};
//!
//! let bridge = KeyBridge::new();
//!
//! // Generate a key and export its PEM
//! let options = GenerateOptions { pem: true, ..Default::default() };
//! let generated = bridge.generate_key_pair(1024, 65537, &options).unwrap();
//! let pem = generated.private_key_pem.clone().unwrap();
//!
//! // Load it back and derive the JWK
//! let mut key_pair = KeyPair::from_private_pem(pem);
//! bridge.import(&mut key_pair).unwrap();
//! assert_eq!(key_pair.private_key_jwk.as_ref().unwrap().kty, "RSA");
//!
//! // Sign an ACME request
//! let jws = bridge
//!     .sign_jws(&mut key_pair, br#"{"resource":"new-reg"}"#, Some("nonce"))
//!     .unwrap();
//! assert!(bridge.verify_jws(&jws).unwrap());
//! ```
//!
//! ## Representations
//!
//! JWK component values are kept as standard Base64. They are converted to
//! Base64URL only in thumbprint and JWS output. PEM text produced by the
//! crate always uses CRLF line endings. Representations supplied by the
//! caller are trusted and never cross-checked against each other.
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, Error>`. Backend failures (malformed PEM,
//! unusable bit length or exponent) are passed through unchanged.

pub mod backend;
pub mod base64url;
pub mod bridge;
pub mod error;
pub mod generate;
pub mod jws;
pub mod keyfile;
pub mod keypair;
pub mod normalize;
pub mod thumbprint;
pub mod types;

pub use backend::{DigestAlgorithm, KeyHandle, RsaBackend, RustCryptoBackend};
pub use bridge::KeyBridge;
pub use error::Error;
pub use generate::{GenerateOptions, DEFAULT_BITS, DEFAULT_EXPONENT};
pub use jws::{JwsEnvelope, JwsHeader, JwsPayload};
pub use keyfile::KeyFiles;
pub use keypair::{KeyPair, KeySource};
pub use thumbprint::thumbprint_from_parts;
pub use types::{PrivateComponents, PrivateJwk, PublicComponents, PublicJwk};
