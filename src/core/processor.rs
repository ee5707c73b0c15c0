//! Routes contributions into the ZIP and date tables

use log::debug;

use crate::core::table::{DateTable, ZipTable};
use crate::core::types::{Contribution, RunSummary, StatLine};
use crate::error::AppError;
use crate::output::StatSink;
use crate::utils::{format_date, validate_date, validate_zip};

/// Owns both tables for a single run.
///
/// ZIP lines go to the sink passed to [`Self::process`] as each record is
/// accepted; date lines are only produced by [`Self::finish`].
#[derive(Debug)]
pub(crate) struct RecordProcessor {
    by_zip: ZipTable,
    by_date: DateTable,
    summary: RunSummary,
}

impl RecordProcessor {
    pub(crate) fn new() -> Self {
        Self {
            by_zip: ZipTable::new(),
            by_date: DateTable::new(),
            summary: RunSummary::default(),
        }
    }

    pub(crate) fn process(
        &mut self,
        record: &Contribution,
        zip_sink: &mut dyn StatSink,
    ) -> Result<(), AppError> {
        self.summary.records += 1;

        if record.is_transfer() {
            debug!(
                "Skipping transfer to {} from {}",
                record.recipient, record.other_id
            );
            self.summary.transfers += 1;
            return Ok(());
        }

        let amount = record.amount()?;

        match validate_zip(&record.zip_code) {
            Some(zip) => {
                let line = self.by_zip.record(&record.recipient, zip, amount);
                zip_sink.emit(&line)?;
                self.summary.zip_lines += 1;
            }
            None => {
                debug!(
                    "Invalid ZIP \"{}\" for {}",
                    record.zip_code, record.recipient
                );
                self.summary.invalid_zip += 1;
            }
        }

        match validate_date(&record.transaction_dt) {
            Some(date) => self.by_date.record(&record.recipient, date, amount),
            None => {
                debug!(
                    "Invalid date \"{}\" for {}",
                    record.transaction_dt, record.recipient
                );
                self.summary.invalid_date += 1;
            }
        }

        Ok(())
    }

    /// Emit the date report in key order and return the run's counters.
    pub(crate) fn finish(self, date_sink: &mut dyn StatSink) -> Result<RunSummary, AppError> {
        let mut summary = self.summary;
        for (key, stats) in self.by_date.drain() {
            let line = StatLine {
                recipient: &key.recipient,
                key: format_date(key.date),
                stats,
            };
            date_sink.emit(&line)?;
            summary.date_lines += 1;
        }
        Ok(summary)
    }

    pub(crate) fn zip_groups(&self) -> usize {
        self.by_zip.len()
    }

    pub(crate) fn date_groups(&self) -> usize {
        self.by_date.len()
    }
}
