//! FEC input source
//!
//! Reads the pipe-delimited FEC individual contributions format and yields
//! only the fields the reports consume.

pub(crate) mod fec;

pub(crate) use fec::FecReader;

// Zero-based column positions in the FEC `itcont.txt` bulk files
pub(crate) const CMTE_ID: usize = 0;
pub(crate) const ZIP_CODE: usize = 10;
pub(crate) const TRANSACTION_DT: usize = 13;
pub(crate) const TRANSACTION_AMT: usize = 14;
pub(crate) const OTHER_ID: usize = 15;
