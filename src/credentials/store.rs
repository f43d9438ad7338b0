//! Credential blob persistence
//!
//! The transport negotiates authentication material on every connect and
//! rotation; the gateway treats it as an opaque blob that must round-trip
//! exactly across restarts. Writes go through a temp file and an atomic
//! rename so a half-written blob is never observed.

use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CredentialError;
use crate::transport::CredentialBlob;

/// File-backed store for the opaque credential blob.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted blob. `None` means no credentials exist yet and
    /// the session must start with an interactive pairing flow.
    pub fn load(&self) -> Result<Option<CredentialBlob>, CredentialError> {
        match fs::read(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CredentialError::Read(e)),
        }
    }

    /// Persists the blob write-through. Called as soon as the transport
    /// reports a credential rotation; a crash before this write loses at
    /// most that one rotation.
    pub fn save(&self, blob: &[u8]) -> Result<(), CredentialError> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir),
            None => tempfile::NamedTempFile::new_in("."),
        }
        .map_err(CredentialError::Write)?;

        tmp.write_all(blob).map_err(CredentialError::Write)?;
        tmp.flush().map_err(CredentialError::Write)?;
        tmp.persist(&self.path)
            .map_err(|e| CredentialError::Write(e.error))?;

        info!("Persisted credential blob ({} bytes)", blob.len());
        Ok(())
    }
}
