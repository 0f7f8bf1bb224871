//! Append-only stat log with write-through persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::sample::{Reading, StatSample};
use crate::error::{CoreError, StorageError};
use crate::notice::Notice;

/// Storage key for the stat log; the file backend appends `.json`.
pub const STATS_KEY: &str = "mobStats";

/// A key-value slot holding the serialized stat log.
pub trait StatStorage {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&mut self, contents: &str) -> Result<(), StorageError>;
}

/// Stat log kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, contents).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory slot. Writes can be made to fail to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
    reject_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            reject_writes: false,
        }
    }

    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl StatStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Unavailable("storage is full or disabled".into()));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

/// Mean energy and flow over the whole log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatAverage {
    pub energy: f64,
    pub flow: f64,
    pub count: usize,
}

/// Owns the stat log and writes it through to `S` on every mutation.
#[derive(Debug)]
pub struct StatStore<S: StatStorage> {
    storage: S,
    samples: Vec<StatSample>,
}

impl<S: StatStorage> StatStore<S> {
    /// Load the log from `storage`. Unreadable storage starts an empty log
    /// and malformed entries are dropped.
    pub fn open(storage: S) -> Self {
        let samples = match storage.read() {
            Ok(Some(content)) => parse_samples(&content),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Error loading stats: {e}");
                Vec::new()
            }
        };
        debug!(count = samples.len(), "stats loaded");
        Self { storage, samples }
    }

    pub fn samples(&self) -> &[StatSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Record a reading stamped with the current time.
    ///
    /// Returns a warning notice if the write failed. The sample stays in
    /// memory either way.
    pub fn record(&mut self, reading: Reading) -> Option<Notice> {
        self.record_at(reading, Utc::now())
    }

    pub fn record_at(&mut self, reading: Reading, at: DateTime<Utc>) -> Option<Notice> {
        let sample = StatSample::new(reading, at);
        debug!(energy = %sample.energy, flow = %sample.flow, "recording stat");
        self.samples.push(sample);
        self.persist()
    }

    /// Drop every sample and persist the empty log.
    pub fn clear(&mut self) -> Option<Notice> {
        self.samples.clear();
        self.persist()
    }

    /// `None` when there is no data.
    pub fn average(&self) -> Option<StatAverage> {
        if self.samples.is_empty() {
            return None;
        }
        let count = self.samples.len();
        let (energy, flow) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(e, f), s| (e + s.energy.value(), f + s.flow.value()));
        Some(StatAverage {
            energy: energy / count as f64,
            flow: flow / count as f64,
            count,
        })
    }

    fn persist(&mut self) -> Option<Notice> {
        let result = serde_json::to_string(&self.samples)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.write(&json));
        match result {
            Ok(()) => None,
            Err(e) => {
                warn!("Error saving stats: {e}");
                Some(Notice::from(&CoreError::from(e)))
            }
        }
    }
}

/// Parse a stored log, keeping only well-formed samples.
fn parse_samples(content: &str) -> Vec<StatSample> {
    let raw: Vec<serde_json::Value> = match serde_json::from_str(content) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Error loading stats: {e}");
            return Vec::new();
        }
    };
    let total = raw.len();
    let samples: Vec<StatSample> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    if samples.len() < total {
        warn!(
            dropped = total - samples.len(),
            "dropped malformed stat entries"
        );
    }
    samples
}
