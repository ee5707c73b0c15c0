use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::Contribution;
use crate::error::AppError;
use crate::source::{CMTE_ID, OTHER_ID, TRANSACTION_AMT, TRANSACTION_DT, ZIP_CODE};

/// Streaming reader over FEC contribution records
pub(crate) struct FecReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
}

impl FecReader<BufReader<File>> {
    pub(crate) fn open(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| AppError::io(path, e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> FecReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .flexible(true)
            .from_reader(inner);
        Self {
            records: reader.into_records(),
        }
    }
}

fn parse(record: &csv::StringRecord) -> Result<Contribution, AppError> {
    let line = record.position().map_or(0, |p| p.line());
    let field = |index: usize| {
        record
            .get(index)
            .map(str::to_string)
            .ok_or(AppError::MissingField { line, index })
    };

    Ok(Contribution {
        line,
        recipient: field(CMTE_ID)?,
        zip_code: field(ZIP_CODE)?,
        transaction_dt: field(TRANSACTION_DT)?,
        transaction_amt: field(TRANSACTION_AMT)?,
        other_id: field(OTHER_ID)?,
    })
}

impl<R: Read> Iterator for FecReader<R> {
    type Item = Result<Contribution, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        Some(parse(&record))
    }
}
