use crate::cli::OutputFormat;
use crate::progress::progress_sink;
use anyhow::Result;
use splrename_core::{line_name_operation, OutputFormatter};
use std::path::Path;

pub fn handle_rename_ln(spreadsheet: &Path, output: OutputFormat, quiet: bool) -> Result<()> {
    let mut progress = progress_sink(quiet || output == OutputFormat::Json);

    let result = line_name_operation(spreadsheet, progress.as_mut())?;
    println!("{}", result.format(output.into()));
    Ok(())
}
