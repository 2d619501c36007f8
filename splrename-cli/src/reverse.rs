use crate::cli::OutputFormat;
use crate::progress::progress_sink;
use anyhow::Result;
use splrename_core::{reverse_operation, OutputFormatter};
use std::path::Path;

pub fn handle_reverse(
    log: &Path,
    delete_log: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut progress = progress_sink(quiet || output == OutputFormat::Json);

    let result = reverse_operation(log, delete_log, progress.as_mut())?;
    println!("{}", result.format(output.into()));
    Ok(())
}
