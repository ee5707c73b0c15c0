use log::info;

use crate::cli::Cli;
use crate::core::{RecordProcessor, RunSummary};
use crate::error::AppError;
use crate::output::PipeWriter;
use crate::source::FecReader;

/// Stream the input once, writing the ZIP report as records arrive, then
/// write the date report.
///
/// The date report is only created after the whole input has been read, so
/// a fatal input error leaves the ZIP lines produced so far and no date file.
pub(crate) fn run(cli: &Cli) -> Result<RunSummary, AppError> {
    let mut zip_report = PipeWriter::create(&cli.zip_output)?;
    let reader = FecReader::open(&cli.input)?;

    let mut processor = RecordProcessor::new();
    for record in reader {
        processor.process(&record?, &mut zip_report)?;
    }
    zip_report.finish()?;

    info!(
        "Aggregated {} ZIP groups and {} date groups",
        processor.zip_groups(),
        processor.date_groups()
    );

    let mut date_report = PipeWriter::create(&cli.date_output)?;
    let summary = processor.finish(&mut date_report)?;
    date_report.finish()?;

    info!(
        "Read {} records ({} transfers, {} invalid ZIP, {} invalid date); wrote {} ZIP lines, {} date lines",
        summary.records,
        summary.transfers,
        summary.invalid_zip,
        summary.invalid_date,
        summary.zip_lines,
        summary.date_lines
    );

    Ok(summary)
}
