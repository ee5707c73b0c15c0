//! Core module - running order statistics grouped by ZIP and by date

mod group;
mod processor;
mod table;
pub(crate) mod types;

pub(crate) use processor::RecordProcessor;
pub(crate) use types::{Contribution, RunSummary, StatLine};
