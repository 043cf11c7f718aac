//! Writing freshly generated keys to `privkey.pem` / `pubkey.pem`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::backend::RsaBackend;
use crate::bridge::KeyBridge;
use crate::error::Error;
use crate::generate::GenerateOptions;

pub const PRIVATE_KEY_FILE: &str = "privkey.pem";
pub const PUBLIC_KEY_FILE: &str = "pubkey.pem";

/// Paths and contents of a written keypair.
#[derive(Debug, Clone)]
pub struct KeyFiles {
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
    pub private_key_pem: String,
    pub public_key_pem: String,
}

/// Write `pem` to a file that must not exist yet.
fn create_private_key_file(path: &Path, pem: &str) -> Result<(), Error> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(pem.as_bytes())?;
    Ok(())
}

impl<B: RsaBackend> KeyBridge<B> {
    /// Generate a keypair and write both PEMs into `dir`.
    ///
    /// Refuses to run, and writes nothing, if `dir/privkey.pem` already exists.
    pub fn write_key_files(
        &self,
        dir: &Path,
        bits: usize,
        exponent: u64,
    ) -> Result<KeyFiles, Error> {
        let private_key_path = dir.join(PRIVATE_KEY_FILE);
        let public_key_path = dir.join(PUBLIC_KEY_FILE);
        if private_key_path.exists() {
            return Err(Error::AlreadyExists(private_key_path));
        }

        let options = GenerateOptions {
            public: true,
            pem: true,
            ..Default::default()
        };
        let mut key_pair = self.generate_key_pair(bits, exponent, &options)?;
        let private_key_pem = self.export_private_pem(&mut key_pair)?;
        let public_key_pem = self.export_public_pem(&mut key_pair)?;

        create_private_key_file(&private_key_path, &private_key_pem)?;
        fs::write(&public_key_path, &public_key_pem)?;
        info!(path = %private_key_path.display(), "wrote private key");
        info!(path = %public_key_path.display(), "wrote public key");

        Ok(KeyFiles {
            private_key_path,
            public_key_path,
            private_key_pem,
            public_key_pem,
        })
    }
}
