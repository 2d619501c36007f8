use crate::engine::{RecordFailure, RenameStats};
use crate::reverse::ReverseStats;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a forward rename run (bulk or line-name mode)
#[derive(Debug, Serialize)]
pub struct RenameRunResult {
    pub mode: String,
    pub spreadsheet: PathBuf,
    pub undo_log: PathBuf,
    pub total: usize,
    pub renamed: usize,
    pub skipped_missing: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

impl RenameRunResult {
    pub fn new(mode: &str, spreadsheet: &Path, undo_log: &Path, stats: RenameStats) -> Self {
        Self {
            mode: mode.to_string(),
            spreadsheet: spreadsheet.to_path_buf(),
            undo_log: undo_log.to_path_buf(),
            total: stats.total,
            renamed: stats.renamed,
            skipped_missing: stats.skipped_missing,
            failed: stats.failed,
            failures: stats.failures,
        }
    }
}

/// Result of a reverse run
#[derive(Debug, Serialize)]
pub struct ReverseRunResult {
    pub log: PathBuf,
    pub total: usize,
    pub reverted: usize,
    pub skipped_missing: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

impl ReverseRunResult {
    pub fn new(log: &Path, stats: ReverseStats) -> Self {
        Self {
            log: log.to_path_buf(),
            total: stats.total,
            reverted: stats.reverted,
            skipped_missing: stats.skipped_missing,
            failed: stats.failed,
            failures: stats.failures,
        }
    }
}

/// Result of a version command
#[derive(Debug, Serialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameRunResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": self.mode,
            "spreadsheet": self.spreadsheet,
            "undo_log": self.undo_log,
            "summary": {
                "total": self.total,
                "renamed": self.renamed,
                "skipped_missing": self.skipped_missing,
                "failed": self.failed,
            },
            "failures": self.failures,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "A total of {} of {} files were renamed.",
            self.renamed, self.total
        )
        .unwrap();
        if self.skipped_missing > 0 {
            writeln!(
                output,
                "{} files were skipped because the source no longer exists.",
                self.skipped_missing
            )
            .unwrap();
        }
        for failure in &self.failures {
            writeln!(
                output,
                "FAILED {}: {}",
                failure.path.display(),
                failure.reason
            )
            .unwrap();
        }
        writeln!(
            output,
            "Reverse log can be found in {}",
            self.undo_log.display()
        )
        .unwrap();
        output
    }
}

impl OutputFormatter for ReverseRunResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "reverse",
            "log": self.log,
            "summary": {
                "total": self.total,
                "reverted": self.reverted,
                "skipped_missing": self.skipped_missing,
                "failed": self.failed,
            },
            "failures": self.failures,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "A total of {} files were renamed back ({} processed).",
            self.reverted, self.total
        )
        .unwrap();
        if self.skipped_missing > 0 {
            writeln!(
                output,
                "{} entries were skipped because the renamed file no longer exists.",
                self.skipped_missing
            )
            .unwrap();
        }
        for failure in &self.failures {
            writeln!(
                output,
                "FAILED {}: {}",
                failure.path.display(),
                failure.reason
            )
            .unwrap();
        }
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
