use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};
use wordswap::{dictionary::Import, Dictionary};

use crate::error::{Error, IoError};

/// JSON file holding the dictionary between runs.
#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of an unusable store, written before it can be overwritten.
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Loads the stored dictionary.
    ///
    /// A missing, blank or unreadable-as-JSON file yields the default
    /// dictionary; other I/O failures are errors. An unparsable file is
    /// first copied to [`Store::backup_path`], since the next save replaces it.
    pub async fn load(&self) -> Result<Dictionary, Error> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no store yet, using default dictionary");
                return Ok(Dictionary::with_defaults());
            }
            Err(error) => return Err(IoError::file(&self.path, &error).into()),
        };

        let mut dictionary = Dictionary::new();

        match dictionary.import_json(&raw) {
            Ok(Import::Replaced { accepted, rejected }) => {
                info!(path = %self.path.display(), accepted, rejected, "loaded dictionary");
                Ok(dictionary)
            }
            Ok(Import::Skipped) => Ok(Dictionary::with_defaults()),
            Err(error) => {
                let backup = self.backup_path();
                fs::copy(&self.path, &backup)
                    .await
                    .map_err(|error| IoError::file(&backup, &error))?;

                warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    %error,
                    "unusable store, using default dictionary"
                );
                Ok(Dictionary::with_defaults())
            }
        }
    }

    /// Writes the dictionary next to the store, then renames it into place
    /// so a failed write never leaves a truncated store behind.
    pub async fn save(&self, dictionary: &Dictionary) -> Result<(), Error> {
        let raw = dictionary.export_json()?;
        let staging = self.path.with_extension("json.tmp");

        fs::write(&staging, raw)
            .await
            .map_err(|error| IoError::file(&staging, &error))?;
        if let Err(error) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(IoError::file(&self.path, &error).into());
        }

        info!(path = %self.path.display(), pairs = dictionary.len(), "saved dictionary");
        Ok(())
    }
}
