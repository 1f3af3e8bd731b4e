//! Shared utilities for codebook crates.
//!
//! This crate provides the cell [`Value`] type every statistic is computed
//! over, the Polars `AnyValue` bridge that produces it, and the number
//! formatting used by every rendered table.

pub mod format;
pub mod polars;
pub mod value;

// Re-export commonly used functions at crate root for convenience
pub use crate::format::{
    NOT_AVAILABLE, format_count, format_fixed, format_percent, group_thousands,
};
pub use crate::polars::{any_to_f64, any_to_value, column_values, format_numeric, parse_f64};
pub use crate::value::Value;
