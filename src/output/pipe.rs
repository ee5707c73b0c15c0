use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::StatLine;
use crate::error::AppError;
use crate::output::StatSink;

/// Writes `recipient|key|median|count|sum` rows, each ending in CRLF
pub(crate) struct PipeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl PipeWriter<File> {
    pub(crate) fn create(path: &Path) -> Result<Self, AppError> {
        let file = File::create(path).map_err(|e| AppError::io(path, e))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> PipeWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        Self { writer }
    }

    /// Flush buffered rows and hand back the underlying writer.
    pub(crate) fn finish(self) -> Result<W, AppError> {
        self.writer
            .into_inner()
            .map_err(|e| AppError::Write(e.into_error()))
    }
}

impl<W: Write> StatSink for PipeWriter<W> {
    fn emit(&mut self, line: &StatLine<'_>) -> Result<(), AppError> {
        let median = line.stats.median.to_string();
        let count = line.stats.count.to_string();
        let sum = line.stats.sum.to_string();
        self.writer.write_record([
            line.recipient,
            line.key.as_str(),
            median.as_str(),
            count.as_str(),
            sum.as_str(),
        ])?;
        Ok(())
    }
}
