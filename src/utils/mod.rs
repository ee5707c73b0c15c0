pub(crate) mod date;
pub(crate) mod zip;

pub(crate) use date::{format_date, validate_date};
pub(crate) use zip::{ZipCode, validate_zip};
