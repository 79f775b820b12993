pub mod breakpoints;
pub mod config;
pub mod distance_table;
pub mod error;
