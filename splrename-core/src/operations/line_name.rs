use super::rename::{ensure_exists, spreadsheet_dir};
use crate::engine::rename_line_names;
use crate::output::RenameRunResult;
use crate::progress::ProgressSink;
use crate::sheet::load_line_name_list;
use crate::undo_log::UndoLog;
use anyhow::{Context, Result};
use std::path::Path;

/// Line-name rename - equivalent to the `splrename rename-ln` command.
///
/// No templating and no duplicate disambiguation; the new stem is the
/// `New LineName` column verbatim. Skip/undo semantics are shared with the
/// bulk mode.
pub fn line_name_operation(
    spreadsheet: &Path,
    progress: &mut dyn ProgressSink,
) -> Result<RenameRunResult> {
    ensure_exists(spreadsheet)?;

    let records = load_line_name_list(spreadsheet)
        .with_context(|| format!("Failed to load {}", spreadsheet.display()))?;

    let log_dir = spreadsheet_dir(spreadsheet)?;
    UndoLog::remove_stale(&log_dir)?;
    let mut undo_log = UndoLog::create(&log_dir)?;

    let stats = rename_line_names(&records, &mut undo_log, progress)?;
    Ok(RenameRunResult::new(
        "rename-ln",
        spreadsheet,
        undo_log.path(),
        stats,
    ))
}
