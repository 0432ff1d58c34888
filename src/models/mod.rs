pub mod aggregation;
pub mod day_summary;
pub mod punch;
pub mod raw_table;
