//! Common utilities shared across the crate

pub mod utils;

pub use utils::split_lines;
