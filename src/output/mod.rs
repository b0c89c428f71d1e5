//! Report structures and output formatting

pub mod report;
pub mod formatter;
