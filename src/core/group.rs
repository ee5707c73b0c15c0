//! Exact running median over a sorted sequence

use crate::core::types::GroupStats;

/// All amounts seen for one group, kept sorted, with running count and sum.
///
/// Insertion is a binary search plus a `Vec` shift; count, sum and median
/// are O(1) reads. Every value is retained so the median stays exact.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunningMedian {
    values: Vec<i64>,
    sum: i128,
}

impl RunningMedian {
    /// Insert `value` after any equal values already present and return the
    /// updated statistics.
    pub(crate) fn insert(&mut self, value: i64) -> GroupStats {
        let pos = self.values.partition_point(|v| *v <= value);
        self.values.insert(pos, value);
        self.sum += i128::from(value);
        self.current()
    }

    pub(crate) fn count(&self) -> u64 {
        self.values.len() as u64
    }

    pub(crate) fn sum(&self) -> i128 {
        self.sum
    }

    /// Statistics of a group that has seen at least one value.
    pub(crate) fn current(&self) -> GroupStats {
        GroupStats {
            median: self.middle(),
            count: self.count(),
            sum: self.sum(),
        }
    }

    /// Middle element for odd sizes; for even sizes the mean of the two
    /// middle elements rounded up (`-1.5` becomes `-1`, `2.5` becomes `3`).
    /// The group must not be empty.
    fn middle(&self) -> i64 {
        let n = self.values.len();
        if n % 2 == 1 {
            return self.values[n / 2];
        }
        let pair = i128::from(self.values[n / 2 - 1]) + i128::from(self.values[n / 2]);
        // ceil(pair / 2) lies between the two middle values, so it fits in i64
        (pair.div_euclid(2) + pair.rem_euclid(2)) as i64
    }

    #[cfg(test)]
    fn values(&self) -> &[i64] {
        &self.values
    }
}
