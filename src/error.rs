use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Found neither private nor public keypair in any supported format")]
    KeyFormat,

    #[error("Failed to export {what}: {reason}")]
    Export { what: &'static str, reason: String },

    #[error("You must provide an RSA jwk with '{0}'")]
    MissingComponent(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("RSA error: {0}")]
    Rsa(#[from] rsa::Error),

    #[error("PKCS1 error: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    #[error("PKCS8 error: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),

    #[error("SPKI error: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn export(what: &'static str, reason: impl Into<String>) -> Self {
        Error::Export {
            what,
            reason: reason.into(),
        }
    }
}
