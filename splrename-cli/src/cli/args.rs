use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename tool for sensor files using the spreadsheet generated by splsensors
#[derive(Parser, Debug)]
#[command(name = "splrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bulk-rename sensor files listed in the Full_List sheet
    Rename {
        /// The merge file with all the Final spreadsheets generated by the
        /// splsensors tool. Make sure the spreadsheet has been QC'd!
        #[arg(short = 'i', long = "spreadsheet", value_name = "XLSX")]
        spreadsheet: PathBuf,

        /// Filename template for the renamed files. Tokens:
        /// [V] = vessel; [LN] = line name from SPL; [ST] = sensor type;
        /// [SD] = start date from the sensor; [N] = sequence number for
        /// split sensors. e.g. [V]_[LN]_[SD]_ASOW
        #[arg(
            short = 'n',
            long = "filename",
            value_name = "TEMPLATE",
            verbatim_doc_comment
        )]
        filename: String,

        /// Zero-pad mask for the [N] token, e.g. 000 or 00
        #[arg(short = 's', long = "seq-format", value_name = "MASK")]
        seq_format: Option<String>,

        /// Timestamp format for the [SD] token, e.g. %Y%m%d_%H%M%S
        #[arg(short = 't', long = "time-format", value_name = "FORMAT")]
        time_format: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rename files to the New LineName column of the Rename_LN sheet
    RenameLn {
        /// The merge file with all the Final spreadsheets generated by the
        /// splsensors tool
        #[arg(short = 'i', long = "spreadsheet", value_name = "XLSX")]
        spreadsheet: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rename files back using the undo log from a previous run
    Reverse {
        /// The reverse_rename.csv file generated by this tool. The file can
        /// be edited to remove rows you do not want renamed back.
        #[arg(short = 'r', long = "log", value_name = "CSV")]
        log: PathBuf,

        /// Delete the undo log after a fully successful reverse
        #[arg(long)]
        delete_log: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
