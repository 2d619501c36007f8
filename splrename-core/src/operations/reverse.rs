use crate::output::ReverseRunResult;
use crate::progress::ProgressSink;
use crate::reverse::reverse_all;
use crate::undo_log::UndoLog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reverse rename - equivalent to the `splrename reverse` command.
///
/// Replays the undo table in file order. The log itself is left in place
/// unless `delete_log` is set, so a partially successful reverse can be
/// retried.
pub fn reverse_operation(
    log: &Path,
    delete_log: bool,
    progress: &mut dyn ProgressSink,
) -> Result<ReverseRunResult> {
    let entries = UndoLog::load(log)?;
    let stats = reverse_all(&entries, progress);

    if delete_log && stats.failed == 0 {
        fs::remove_file(log)
            .with_context(|| format!("Failed to delete undo log: {}", log.display()))?;
    }

    Ok(ReverseRunResult::new(log, stats))
}
