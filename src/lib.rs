//! Rewrite every value of one named column in a comma-delimited file.

pub mod driver;
pub mod fields;
pub mod process;
pub mod types;
