//! Forward rename engines.
//!
//! Both modes share the same per-record semantics: a record whose source
//! path no longer exists is skipped without error, a rename that the
//! filesystem refuses or whose target name is already taken is recorded as
//! a failure and the run continues, and every successful rename lands in
//! the undo log before the next record is touched. Only a failure to write
//! the undo log itself aborts the run: a rename without an undo record
//! cannot be reversed later.

use crate::config::RunConfig;
use crate::progress::ProgressSink;
use crate::record::{LineNameRecord, RenameRecord};
use crate::template::FilenameTemplate;
use crate::undo_log::{UndoEntry, UndoLog};
use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordOutcome {
    Renamed,
    SkippedMissing,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Tallied outcomes for a whole run. `total` always equals the input record
/// count; skips and failures are counted, not swallowed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameStats {
    pub total: usize,
    pub renamed: usize,
    pub skipped_missing: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

impl RenameStats {
    fn tally(&mut self, path: &Path, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Renamed => self.renamed += 1,
            RecordOutcome::SkippedMissing => self.skipped_missing += 1,
            RecordOutcome::Failed(reason) => {
                self.failed += 1;
                self.failures.push(RecordFailure {
                    path: path.to_path_buf(),
                    reason,
                });
            },
        }
    }
}

/// Bulk mode: resolve the template per record and rename in place.
pub fn rename_all(
    records: &[RenameRecord],
    template: &FilenameTemplate,
    config: &RunConfig,
    undo_log: &mut UndoLog,
    progress: &mut dyn ProgressSink,
) -> Result<RenameStats> {
    let mut stats = RenameStats {
        total: records.len(),
        ..RenameStats::default()
    };

    progress.begin(records.len());
    for (index, record) in records.iter().enumerate() {
        let stem = template.resolve(record, config);
        let outcome = rename_to_stem(&record.file_path, &stem, undo_log, |new_path| UndoEntry {
            old_name: record.file_path.clone(),
            new_name: new_path,
            duplicate_index: record.duplicate_index,
            sensor_type: record.sensor_type.clone(),
            vessel: record.vessel.clone(),
        })?;
        stats.tally(&record.file_path, outcome);
        progress.record_done(index);
    }
    progress.finish();

    Ok(stats)
}

/// Line-name mode: the new stem is the record's `New LineName`, verbatim.
pub fn rename_line_names(
    records: &[LineNameRecord],
    undo_log: &mut UndoLog,
    progress: &mut dyn ProgressSink,
) -> Result<RenameStats> {
    let mut stats = RenameStats {
        total: records.len(),
        ..RenameStats::default()
    };

    progress.begin(records.len());
    for (index, record) in records.iter().enumerate() {
        let outcome = rename_to_stem(
            &record.file_path,
            &record.new_line_name,
            undo_log,
            |new_path| UndoEntry {
                old_name: record.file_path.clone(),
                new_name: new_path,
                duplicate_index: None,
                sensor_type: String::new(),
                vessel: String::new(),
            },
        )?;
        stats.tally(&record.file_path, outcome);
        progress.record_done(index);
    }
    progress.finish();

    Ok(stats)
}

/// Rename `old_path` to `<same dir>/<stem><original extension>`.
///
/// An occupied target is a per-record failure, never an overwrite:
/// `fs::rename` on Unix silently replaces an existing file, which would
/// destroy data and leave two undo entries pointing at one surviving file.
/// The undo entry is appended and flushed before the outcome is returned.
fn rename_to_stem(
    old_path: &Path,
    stem: &str,
    undo_log: &mut UndoLog,
    make_entry: impl FnOnce(PathBuf) -> UndoEntry,
) -> Result<RecordOutcome> {
    if !old_path.exists() {
        return Ok(RecordOutcome::SkippedMissing);
    }

    let dir = old_path
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let file_name = old_path.extension().map_or_else(
        || stem.to_string(),
        |ext| format!("{stem}.{}", ext.to_string_lossy()),
    );
    let new_path = dir.join(file_name);
    if new_path != *old_path && new_path.exists() {
        return Ok(RecordOutcome::Failed(format!(
            "target {} already exists",
            new_path.display()
        )));
    }

    match fs::rename(old_path, &new_path) {
        Ok(()) => {
            undo_log.append(&make_entry(new_path))?;
            Ok(RecordOutcome::Renamed)
        },
        Err(e) => Ok(RecordOutcome::Failed(e.to_string())),
    }
}
