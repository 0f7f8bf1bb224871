//! Session state between CLI invocations.
//!
//! The session link is the source of truth for roster and settings, exactly
//! what a shared URL carries. The engine checkpoint only remembers where an
//! interrupted `run` left off.

use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::StorageError;
use crate::link::SessionLink;
use crate::timer::{EngineCheckpoint, RotationSettings};

const LINK_FILE: &str = "session.link";
const CHECKPOINT_FILE: &str = "engine.json";

#[derive(Debug, Clone)]
pub struct SessionFiles {
    dir: PathBuf,
}

impl SessionFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn link_path(&self) -> PathBuf {
        self.dir.join(LINK_FILE)
    }

    pub fn checkpoint_path(&self) -> PathBuf {
        self.dir.join(CHECKPOINT_FILE)
    }

    /// The saved session, or an empty roster with `defaults` if none exists.
    pub fn load_link(&self, defaults: RotationSettings) -> Result<SessionLink, StorageError> {
        let query = read_optional(&self.link_path())?.unwrap_or_default();
        Ok(SessionLink::parse(&query, defaults))
    }

    pub fn save_link(&self, link: &SessionLink) -> Result<(), StorageError> {
        write(&self.link_path(), &link.to_query())
    }

    /// A checkpoint that cannot be parsed is discarded with a warning.
    pub fn load_checkpoint(&self) -> Result<Option<EngineCheckpoint>, StorageError> {
        let Some(json) = read_optional(&self.checkpoint_path())? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(checkpoint) => Ok(Some(checkpoint)),
            Err(e) => {
                warn!("discarding unreadable engine checkpoint: {e}");
                Ok(None)
            }
        }
    }

    pub fn save_checkpoint(&self, checkpoint: &EngineCheckpoint) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(checkpoint)?;
        write(&self.checkpoint_path(), &json)
    }

    pub fn clear_checkpoint(&self) -> Result<(), StorageError> {
        let path = self.checkpoint_path();
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::WriteFailed { path, source }),
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::ReadFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write(path: &Path, contents: &str) -> Result<(), StorageError> {
    std::fs::write(path, contents).map_err(|source| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
