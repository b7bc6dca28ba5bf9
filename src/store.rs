//! Commit message storage.

use crate::error::{Error, Result};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Where the repair loop reads the message from and writes it back to
pub trait MessageStore {
    fn read(&mut self) -> Result<String>;
    fn write(&mut self, message: &str) -> Result<()>;
}

/// The commit message file git hands to the hook
#[derive(Debug)]
pub struct MessageFile {
    path: PathBuf,
    // Keeps a stdin-backed temp file alive; removed on drop.
    _temp: Option<NamedTempFile>,
}

impl MessageFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            _temp: None,
        }
    }

    /// Capture `reader` into a throwaway file and use that as the store
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(Error::Stdin)?;

        let mut temp = tempfile::Builder::new()
            .prefix("COMMIT_EDITMSG")
            .tempfile()
            .map_err(|source| Error::Io {
                path: std::env::temp_dir(),
                source,
            })?;
        let path = temp.path().to_path_buf();
        temp.write_all(content.as_bytes())
            .map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), bytes = content.len(), "captured message from stdin");

        Ok(Self {
            path,
            _temp: Some(temp),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl MessageStore for MessageFile {
    fn read(&mut self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))
    }

    fn write(&mut self, message: &str) -> Result<()> {
        debug!(path = %self.path.display(), "writing commit message");
        std::fs::write(&self.path, message).map_err(|e| self.io_error(e))
    }
}
