use chrono::{Datelike, NaiveDate};

const DATE_FORMAT: &str = "%m%d%Y";

/// Parse an FEC transaction date (`MMDDYYYY`).
///
/// Anything other than exactly eight digits naming a real calendar date is
/// rejected, including year `0000`.
pub(crate) fn validate_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|d| d.year() >= 1)
}

/// Render a date back into `MMDDYYYY`.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
