//! Aggregation tables keyed by (recipient, ZIP) and (recipient, date)

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::core::group::RunningMedian;
use crate::core::types::{DateKey, GroupStats, StatLine, ZipKey};
use crate::utils::ZipCode;

/// Groups by recipient and ZIP; every insert yields its report line at once.
#[derive(Debug, Default)]
pub(crate) struct ZipTable {
    groups: HashMap<ZipKey, RunningMedian>,
}

impl ZipTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the group and return the group's updated line.
    pub(crate) fn record<'a>(
        &mut self,
        recipient: &'a str,
        zip: ZipCode,
        amount: i64,
    ) -> StatLine<'a> {
        let line_key = zip.to_string();
        let key = ZipKey {
            recipient: recipient.to_string(),
            zip,
        };
        let stats = self.groups.entry(key).or_default().insert(amount);
        StatLine {
            recipient,
            key: line_key,
            stats,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }
}

/// Groups by recipient and date; read only once, in key order, at the end.
#[derive(Debug, Default)]
pub(crate) struct DateTable {
    groups: BTreeMap<DateKey, RunningMedian>,
}

impl DateTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, recipient: &str, date: NaiveDate, amount: i64) {
        let key = DateKey {
            recipient: recipient.to_string(),
            date,
        };
        self.groups.entry(key).or_default().insert(amount);
    }

    /// Consume the table, yielding every group sorted by recipient then date.
    pub(crate) fn drain(self) -> impl Iterator<Item = (DateKey, GroupStats)> {
        self.groups
            .into_iter()
            .map(|(key, group)| (key, group.current()))
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }
}
