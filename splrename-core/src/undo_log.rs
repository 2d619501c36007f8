//! The persisted undo table enabling reverse renames.
//!
//! Lives next to the input spreadsheet as `reverse_rename.csv`. Entries are
//! flushed to disk per rename rather than once at the end of the run, so an
//! interrupted run still leaves an undo record for every file it touched.
//! Users may edit the file by hand before reversing; rows they delete are
//! simply never replayed.

use crate::error::AppError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const UNDO_LOG_NAME: &str = "reverse_rename.csv";

/// One row of the undo table. Only `OldName`/`NewName` are consulted on
/// reverse; the remaining columns are kept for operator review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoEntry {
    #[serde(rename = "OldName")]
    pub old_name: PathBuf,
    #[serde(rename = "NewName")]
    pub new_name: PathBuf,
    #[serde(rename = "Incremental", default)]
    pub duplicate_index: Option<u32>,
    #[serde(rename = "Sensor Type", default)]
    pub sensor_type: String,
    #[serde(rename = "Vessel Name", default)]
    pub vessel: String,
}

/// Append-only writer for the undo table.
pub struct UndoLog {
    writer: csv::Writer<File>,
    path: PathBuf,
    entries: usize,
}

impl UndoLog {
    /// Delete a stale undo log left behind by a previous forward run.
    ///
    /// A log that exists but cannot be removed (locked by another process)
    /// aborts the run before any file is renamed.
    pub fn remove_stale(dir: &Path) -> Result<(), AppError> {
        let path = dir.join(UNDO_LOG_NAME);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| AppError::UndoLogLocked {
                path: path.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Create a fresh undo log in `dir`, truncating any existing one.
    pub fn create(dir: &Path) -> Result<Self> {
        let path = dir.join(UNDO_LOG_NAME);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create undo log: {}", path.display()))?;
        Ok(Self {
            writer: csv::Writer::from_writer(file),
            path,
            entries: 0,
        })
    }

    /// Append one entry and flush it to disk immediately.
    pub fn append(&mut self, entry: &UndoEntry) -> Result<()> {
        self.writer
            .serialize(entry)
            .with_context(|| format!("Failed to write undo log: {}", self.path.display()))?;
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush undo log: {}", self.path.display()))?;
        self.entries += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Read an undo table back for a reverse run.
    pub fn load(path: &Path) -> Result<Vec<UndoEntry>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| AppError::UndoLogUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let entries = reader
            .deserialize()
            .collect::<Result<Vec<UndoEntry>, _>>()
            .map_err(|source| AppError::UndoLogUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(entries)
    }
}
