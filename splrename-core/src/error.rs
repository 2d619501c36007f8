//! Unified error type for splrename.
//!
//! Configuration and spreadsheet errors abort a run before any file is
//! touched; per-record rename failures are reported through
//! `engine::RecordOutcome` instead and never surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Spreadsheet {0} does not exist. Please select the Final spreadsheet created by the splsensors tool")]
    SpreadsheetNotFound(PathBuf),

    #[error("Failed to open spreadsheet {path}: {source}. Please close the file if it is open elsewhere")]
    SpreadsheetUnreadable {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("Sheet '{sheet}' not found in {path}. Please select a Final spreadsheet created by the splsensors tool")]
    WrongSpreadsheet { sheet: String, path: PathBuf },

    #[error("Sheet '{sheet}' has no header row")]
    EmptySheet { sheet: String },

    #[error("Missing column '{column}' in sheet '{sheet}'")]
    MissingColumn { column: String, sheet: String },

    #[error("Unreadable 'Sensor Start' value '{value}' in sheet '{sheet}'")]
    BadTimestamp { value: String, sheet: String },

    #[error("Filename template is empty. Please define the new file name")]
    MissingTemplate,

    #[error("Invalid timestamp format '{0}'")]
    BadTimeFormat(String),

    #[error("The undo log {path} is locked or cannot be removed: {source}")]
    UndoLogLocked {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read undo log {path}: {source}")]
    UndoLogUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
