//! Reverse engine: replay an undo table to restore original filenames.
//!
//! Entries whose renamed file no longer exists are skipped silently; the
//! tool does not distinguish "already reverted" from "externally moved or
//! deleted". An entry whose old name is now occupied by some other file is
//! a failure, not an overwrite. No new undo log is produced by a reverse
//! run.

use crate::engine::RecordFailure;
use crate::progress::ProgressSink;
use crate::undo_log::UndoEntry;
use serde::Serialize;
use std::fs;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReverseStats {
    pub total: usize,
    pub reverted: usize,
    pub skipped_missing: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

/// Rename every entry's `new_name` back to its `old_name`, in file order.
pub fn reverse_all(entries: &[UndoEntry], progress: &mut dyn ProgressSink) -> ReverseStats {
    let mut stats = ReverseStats {
        total: entries.len(),
        ..ReverseStats::default()
    };

    progress.begin(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.new_name.exists() {
            if entry.old_name != entry.new_name && entry.old_name.exists() {
                stats.failed += 1;
                stats.failures.push(RecordFailure {
                    path: entry.new_name.clone(),
                    reason: format!(
                        "a file already exists at {}",
                        entry.old_name.display()
                    ),
                });
                progress.record_done(index);
                continue;
            }
            match fs::rename(&entry.new_name, &entry.old_name) {
                Ok(()) => stats.reverted += 1,
                Err(e) => {
                    stats.failed += 1;
                    stats.failures.push(RecordFailure {
                        path: entry.new_name.clone(),
                        reason: e.to_string(),
                    });
                },
            }
        } else {
            stats.skipped_missing += 1;
        }
        progress.record_done(index);
    }
    progress.finish();

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(old: PathBuf, new: PathBuf) -> UndoEntry {
        UndoEntry {
            old_name: old,
            new_name: new,
            duplicate_index: None,
            sensor_type: String::new(),
            vessel: String::new(),
        }
    }

    #[test]
    fn restores_original_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Line01.sgy"), b"a").unwrap();
        fs::write(dir.path().join("Line02.sgy"), b"b").unwrap();

        let entries = vec![
            entry(dir.path().join("raw_a.sgy"), dir.path().join("Line01.sgy")),
            entry(dir.path().join("raw_b.sgy"), dir.path().join("Line02.sgy")),
        ];

        let stats = reverse_all(&entries, &mut NullProgress);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.reverted, 2);
        assert!(dir.path().join("raw_a.sgy").exists());
        assert!(dir.path().join("raw_b.sgy").exists());
        assert!(!dir.path().join("Line01.sgy").exists());
    }

    #[test]
    fn deleted_targets_are_skipped_silently() {
        // Five entries, one target since deleted: four renamed back, five
        // processed in total.
        let dir = TempDir::new().unwrap();
        let mut entries = Vec::new();
        for i in 0..5 {
            let new_name = dir.path().join(format!("Line0{i}.sgy"));
            if i != 2 {
                fs::write(&new_name, b"x").unwrap();
            }
            entries.push(entry(dir.path().join(format!("raw_{i}.sgy")), new_name));
        }

        let stats = reverse_all(&entries, &mut NullProgress);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.reverted, 4);
        assert_eq!(stats.skipped_missing, 1);
        assert_eq!(stats.failed, 0);
        assert!(!dir.path().join("raw_2.sgy").exists());
    }

    #[test]
    fn occupied_old_name_is_not_overwritten() {
        // A new file created at the old name since the forward run must
        // survive; the entry is a failure and both files stay put.
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Line01.sgy"), b"renamed").unwrap();
        fs::write(dir.path().join("raw_a.sgy"), b"newcomer").unwrap();

        let entries = vec![entry(
            dir.path().join("raw_a.sgy"),
            dir.path().join("Line01.sgy"),
        )];
        let stats = reverse_all(&entries, &mut NullProgress);

        assert_eq!(stats.reverted, 0);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.failures[0].path, dir.path().join("Line01.sgy"));
        assert!(stats.failures[0].reason.contains("already exists"));
        assert_eq!(fs::read(dir.path().join("raw_a.sgy")).unwrap(), b"newcomer");
        assert_eq!(fs::read(dir.path().join("Line01.sgy")).unwrap(), b"renamed");
    }

    #[test]
    fn rename_failure_is_recorded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Line01.sgy"), b"a").unwrap();
        // Old name already exists as a directory, so the rename back fails.
        fs::create_dir(dir.path().join("raw_a.sgy")).unwrap();

        let entries = vec![entry(
            dir.path().join("raw_a.sgy"),
            dir.path().join("Line01.sgy"),
        )];
        let stats = reverse_all(&entries, &mut NullProgress);

        assert_eq!(stats.failed, 1);
        assert_eq!(stats.reverted, 0);
        assert_eq!(stats.failures[0].path, dir.path().join("Line01.sgy"));
    }

    #[test]
    fn forward_then_reverse_round_trip() {
        use crate::config::RunConfig;
        use crate::engine::rename_all;
        use crate::record::RenameRecord;
        use crate::template::FilenameTemplate;
        use crate::undo_log::{UndoLog, UNDO_LOG_NAME};
        use chrono::NaiveDate;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("raw_a.sgy"), b"a").unwrap();
        fs::write(dir.path().join("raw_b.sgy"), b"b").unwrap();

        let records: Vec<RenameRecord> = ["raw_a.sgy", "raw_b.sgy"]
            .iter()
            .zip(["Line01", "Line02"])
            .map(|(file, line_name)| RenameRecord {
                file_path: dir.path().join(file),
                vessel: "Vessel1".to_string(),
                sensor_type: "SSS".to_string(),
                line_name: line_name.to_string(),
                sensor_start: NaiveDate::from_ymd_opt(2020, 12, 24)
                    .unwrap()
                    .and_hms_opt(15, 24, 0)
                    .unwrap(),
                duplicate_index: None,
            })
            .collect();

        let template = FilenameTemplate::new("[V]_[LN]_[SD]_ASOW").unwrap();
        let mut undo_log = UndoLog::create(dir.path()).unwrap();
        rename_all(
            &records,
            &template,
            &RunConfig::default(),
            &mut undo_log,
            &mut NullProgress,
        )
        .unwrap();
        drop(undo_log);

        let entries = UndoLog::load(&dir.path().join(UNDO_LOG_NAME)).unwrap();
        let stats = reverse_all(&entries, &mut NullProgress);

        assert_eq!(stats.reverted, 2);
        assert!(dir.path().join("raw_a.sgy").exists());
        assert!(dir.path().join("raw_b.sgy").exists());
        assert!(!dir.path().join("Vessel1_Line01_20201224_1524_ASOW.sgy").exists());
    }
}
