use crate::config::RunConfig;
use crate::dedup::assign_duplicate_indices;
use crate::engine::rename_all;
use crate::error::AppError;
use crate::output::RenameRunResult;
use crate::progress::ProgressSink;
use crate::sheet::load_full_list;
use crate::template::FilenameTemplate;
use crate::undo_log::UndoLog;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Bulk rename - equivalent to the `splrename rename` command.
///
/// Order of events: validate the template, load and deduplicate the
/// `Full_List` records, clear any stale undo log next to the spreadsheet,
/// then rename record by record while the fresh undo log fills up.
pub fn rename_operation(
    spreadsheet: &Path,
    template: &str,
    config: &RunConfig,
    progress: &mut dyn ProgressSink,
) -> Result<RenameRunResult> {
    let template = FilenameTemplate::new(template)?;
    ensure_exists(spreadsheet)?;

    let mut records = load_full_list(spreadsheet)
        .with_context(|| format!("Failed to load {}", spreadsheet.display()))?;
    assign_duplicate_indices(&mut records);

    let log_dir = spreadsheet_dir(spreadsheet)?;
    UndoLog::remove_stale(&log_dir)?;
    let mut undo_log = UndoLog::create(&log_dir)?;

    let stats = rename_all(&records, &template, config, &mut undo_log, progress)?;
    Ok(RenameRunResult::new(
        "rename",
        spreadsheet,
        undo_log.path(),
        stats,
    ))
}

pub(crate) fn ensure_exists(spreadsheet: &Path) -> Result<(), AppError> {
    if spreadsheet.exists() {
        Ok(())
    } else {
        Err(AppError::SpreadsheetNotFound(spreadsheet.to_path_buf()))
    }
}

/// The undo log always lands next to the input spreadsheet.
pub(crate) fn spreadsheet_dir(spreadsheet: &Path) -> Result<PathBuf> {
    let absolute = if spreadsheet.is_absolute() {
        spreadsheet.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(spreadsheet)
    };
    Ok(absolute
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;
    use tempfile::TempDir;

    #[test]
    fn empty_template_aborts_before_io() {
        let result = rename_operation(
            Path::new("/nowhere/sheets_combined.xlsx"),
            "",
            &RunConfig::default(),
            &mut NullProgress,
        );
        let err = result.unwrap_err();
        assert!(err
            .downcast_ref::<AppError>()
            .is_some_and(|e| matches!(e, AppError::MissingTemplate)));
    }

    #[test]
    fn missing_spreadsheet_aborts() {
        let dir = TempDir::new().unwrap();
        let result = rename_operation(
            &dir.path().join("sheets_combined.xlsx"),
            "[V]_[LN]",
            &RunConfig::default(),
            &mut NullProgress,
        );
        let err = result.unwrap_err();
        assert!(err
            .downcast_ref::<AppError>()
            .is_some_and(|e| matches!(e, AppError::SpreadsheetNotFound(_))));
    }

    #[test]
    fn non_xlsx_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheets_combined.xlsx");
        std::fs::write(&path, b"not a workbook").unwrap();

        let result = rename_operation(&path, "[V]_[LN]", &RunConfig::default(), &mut NullProgress);
        assert!(result.is_err());
    }
}
