//! Table layout vocabulary: width strategies, resolved widths and alignment.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CodebookError;

/// How column widths of a table are decided.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WidthStrategy {
    /// Available width shared equally.
    Even,
    /// Each column sized to its widest cell plus padding.
    Uneven,
    /// Two columns at 20% / 80% of the available width.
    Split2080,
    /// Every column gets the same fixed width.
    Fixed(f64),
    /// Explicit width per column.
    PerColumn(Vec<f64>),
}

impl FromStr for WidthStrategy {
    type Err = CodebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" => Ok(WidthStrategy::Even),
            "uneven" => Ok(WidthStrategy::Uneven),
            "split-20-80" => Ok(WidthStrategy::Split2080),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|width| width.is_finite() && *width > 0.0)
                .map(WidthStrategy::Fixed)
                .ok_or_else(|| CodebookError::InvalidWidthStrategy {
                    value: s.to_string(),
                }),
        }
    }
}

impl fmt::Display for WidthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthStrategy::Even => f.write_str("even"),
            WidthStrategy::Uneven => f.write_str("uneven"),
            WidthStrategy::Split2080 => f.write_str("split-20-80"),
            WidthStrategy::Fixed(width) => write!(f, "{width}"),
            WidthStrategy::PerColumn(widths) => {
                let parts: Vec<String> = widths.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

/// Widths decided for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColumnWidths {
    Uniform(f64),
    PerColumn(Vec<f64>),
}

impl ColumnWidths {
    /// Width of every column for a table with `columns` columns.
    ///
    /// A per-column list shorter than `columns` repeats its last width.
    pub fn resolve(&self, columns: usize) -> Vec<f64> {
        match self {
            ColumnWidths::Uniform(width) => vec![*width; columns],
            ColumnWidths::PerColumn(widths) => {
                let last = widths.last().copied().unwrap_or(0.0);
                (0..columns)
                    .map(|idx| widths.get(idx).copied().unwrap_or(last))
                    .collect()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}
