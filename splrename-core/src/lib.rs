#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod dedup;
pub mod engine;
pub mod error;
pub mod operations;
pub mod output;
pub mod progress;
pub mod record;
pub mod reverse;
pub mod sheet;
pub mod template;
pub mod undo_log;

pub use config::{Config, RunConfig};
pub use dedup::assign_duplicate_indices;
pub use engine::{rename_all, rename_line_names, RecordFailure, RecordOutcome, RenameStats};
pub use error::AppError;
pub use operations::{line_name_operation, rename_operation, reverse_operation};
pub use output::{
    OutputFormat, OutputFormatter, RenameRunResult, ReverseRunResult, VersionResult,
};
pub use progress::{ConsoleProgress, NullProgress, ProgressSink};
pub use record::{LineNameRecord, RenameRecord};
pub use reverse::{reverse_all, ReverseStats};
pub use sheet::{load_full_list, load_line_name_list, FULL_LIST_SHEET, RENAME_LN_SHEET};
pub use template::FilenameTemplate;
pub use undo_log::{UndoEntry, UndoLog, UNDO_LOG_NAME};
