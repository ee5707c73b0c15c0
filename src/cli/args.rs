//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "donor-medians")]
#[command(
    about = "Running medians of FEC contributions by recipient and ZIP code or date",
    version
)]
pub(crate) struct Cli {
    /// FEC individual contributions file (pipe-delimited)
    #[arg(value_name = "INPUT")]
    pub(crate) input: PathBuf,

    /// Report written while reading: recipient|zip|median|count|total
    #[arg(value_name = "ZIP_OUTPUT")]
    pub(crate) zip_output: PathBuf,

    /// Report written at the end, sorted: recipient|date|median|count|total
    #[arg(value_name = "DATE_OUTPUT")]
    pub(crate) date_output: PathBuf,
}
