//! Core data types shared by the processor, tables and report writers

use chrono::NaiveDate;
use std::fmt;

use crate::error::AppError;
use crate::utils::ZipCode;

/// The consumed fields of one FEC contribution record
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Contribution {
    /// 1-based line in the input, for error messages
    pub(crate) line: u64,
    /// Recipient committee ID (CMTE_ID), taken verbatim
    pub(crate) recipient: String,
    /// Raw ZIP_CODE field, not yet validated
    pub(crate) zip_code: String,
    /// Raw TRANSACTION_DT field, not yet validated
    pub(crate) transaction_dt: String,
    /// Raw TRANSACTION_AMT field; only parsed for non-transfers
    pub(crate) transaction_amt: String,
    /// OTHER_ID; non-empty marks a transfer from another committee
    pub(crate) other_id: String,
}

impl Contribution {
    pub(crate) fn is_transfer(&self) -> bool {
        !self.other_id.is_empty()
    }

    /// Whole-dollar amount, optionally signed, surrounding whitespace ignored
    pub(crate) fn amount(&self) -> Result<i64, AppError> {
        self.transaction_amt
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidAmount {
                line: self.line,
                value: self.transaction_amt.clone(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ZipKey {
    pub(crate) recipient: String,
    pub(crate) zip: ZipCode,
}

/// Field order matters: the date report is sorted by recipient, then date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct DateKey {
    pub(crate) recipient: String,
    pub(crate) date: NaiveDate,
}

/// Running statistics of one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GroupStats {
    pub(crate) median: i64,
    pub(crate) count: u64,
    pub(crate) sum: i128,
}

/// One report row, borrowing the recipient from the record or key it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatLine<'a> {
    pub(crate) recipient: &'a str,
    /// Grouping value already rendered for output (ZIP or MMDDYYYY)
    pub(crate) key: String,
    pub(crate) stats: GroupStats,
}

impl fmt::Display for StatLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.recipient, self.key, self.stats.median, self.stats.count, self.stats.sum
        )
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) records: u64,
    pub(crate) transfers: u64,
    pub(crate) invalid_zip: u64,
    pub(crate) invalid_date: u64,
    pub(crate) zip_lines: u64,
    pub(crate) date_lines: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate_zip;

    fn contribution(amount: &str, other_id: &str) -> Contribution {
        Contribution {
            line: 4,
            recipient: "C00629618".to_string(),
            zip_code: "90017".to_string(),
            transaction_dt: "01032017".to_string(),
            transaction_amt: amount.to_string(),
            other_id: other_id.to_string(),
        }
    }

    #[test]
    fn transfer_detection() {
        assert!(!contribution("40", "").is_transfer());
        assert!(contribution("40", "H6CA34245").is_transfer());
    }

    #[test]
    fn amount_allows_sign_and_padding() {
        assert_eq!(contribution("-250", "").amount().unwrap(), -250);
        assert_eq!(contribution("+10", "").amount().unwrap(), 10);
        assert_eq!(contribution(" 75 ", "").amount().unwrap(), 75);
    }

    #[test]
    fn non_integer_amount_is_an_error() {
        for raw in ["12.50", "", "abc", "1e3"] {
            match contribution(raw, "").amount() {
                Err(AppError::InvalidAmount { line, value }) => {
                    assert_eq!(line, 4);
                    assert_eq!(value, raw);
                }
                other => panic!("expected InvalidAmount for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn date_keys_sort_by_recipient_then_date() {
        let key = |r: &str, y, m, d| DateKey {
            recipient: r.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        };
        let mut keys = vec![
            key("B", 2017, 1, 1),
            key("A", 2018, 1, 1),
            key("A", 2017, 12, 31),
        ];
        keys.sort();
        assert_eq!(keys[0], key("A", 2017, 12, 31));
        assert_eq!(keys[1], key("A", 2018, 1, 1));
        assert_eq!(keys[2], key("B", 2017, 1, 1));
    }

    #[test]
    fn zip_keys_distinguish_recipients() {
        let zip = validate_zip("02895").unwrap();
        let a = ZipKey {
            recipient: "A".to_string(),
            zip: zip.clone(),
        };
        let b = ZipKey {
            recipient: "B".to_string(),
            zip,
        };
        assert_ne!(a, b);
    }

    #[test]
    fn stat_line_display_columns() {
        let line = StatLine {
            recipient: "C00177436",
            key: "30004".to_string(),
            stats: GroupStats {
                median: 384,
                count: 2,
                sum: 768,
            },
        };
        assert_eq!(line.to_string(), "C00177436|30004|384|2|768");
    }
}
