//! Report writers

mod pipe;

use crate::core::StatLine;
use crate::error::AppError;

pub(crate) use pipe::PipeWriter;

/// Destination for report lines
pub(crate) trait StatSink {
    fn emit(&mut self, line: &StatLine<'_>) -> Result<(), AppError>;
}
