// [libs/infra/persistence/src/sink.rs]
//! `MatchSink`: persists each delivered match as its own file, named after
//! its base58 public key, inside a fixed output directory. One file per
//! match (not a shared array) means a reader can watch the directory grow
//! and pick up new keys without ever re-parsing old ones. Each file holds
//! nothing but the bare JSON array of the 64 expanded secret-key bytes —
//! the same layout a Solana keypair file uses — written through a
//! temporary file plus an atomic rename so a crash mid-write never leaves
//! a half-written key on disk.

use std::path::{Path, PathBuf};

use vanguard_domain_models::VanityMatch;

use crate::errors::PersistenceError;

/// A persistence sink rooted at a fixed directory.
#[derive(Debug, Clone)]
pub struct MatchSink {
    dir: PathBuf,
}

impl MatchSink {
    /// Roots the sink at `dir`. The directory (and any missing parents) is
    /// created on the first call to [`MatchSink::persist`] if it doesn't
    /// already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        MatchSink { dir: dir.into() }
    }

    /// The directory this sink writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `found`'s secret key to `<dir>/<base58PublicKey>.json`. If the
    /// operation fails, it is retried once before the error is propagated to
    /// the caller, which is responsible for re-queuing the match.
    pub fn persist(&self, found: &VanityMatch) -> Result<(), PersistenceError> {
        match self.try_persist(found) {
            Ok(()) => Ok(()),
            Err(first_error) => {
                tracing::warn!(error = %first_error, "retrying persistence after I/O fault");
                self.try_persist(found)
            }
        }
    }

    fn try_persist(&self, found: &VanityMatch) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::IoFault(e.to_string()))?;

        let file_stem = &found.public_key_base58;
        let path = self.dir.join(format!("{file_stem}.json"));
        let tmp_path = self.dir.join(format!("{file_stem}.json.tmp"));

        let mut serialized = serde_json::to_vec(&found.secret_key_bytes)
            .map_err(|e| PersistenceError::IoFault(e.to_string()))?;
        serialized.push(b'\n');

        std::fs::write(&tmp_path, &serialized).map_err(|e| PersistenceError::IoFault(e.to_string()))?;
        std::fs::rename(&tmp_path, &path).map_err(|e| PersistenceError::IoFault(e.to_string()))?;
        Ok(())
    }
}
