use crate::cli::OutputFormat;
use crate::progress::progress_sink;
use anyhow::Result;
use splrename_core::{rename_operation, Config, OutputFormatter, RunConfig};
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn handle_rename(
    spreadsheet: &Path,
    filename: &str,
    seq_format: Option<&str>,
    time_format: Option<&str>,
    config: &Config,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let run_config = RunConfig::resolve(config, time_format, seq_format)?;
    let mut progress = progress_sink(quiet || output == OutputFormat::Json);

    let result = rename_operation(spreadsheet, filename, &run_config, progress.as_mut())?;
    println!("{}", result.format(output.into()));
    Ok(())
}
