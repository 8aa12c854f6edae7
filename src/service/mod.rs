pub mod records;
pub mod statistics;
