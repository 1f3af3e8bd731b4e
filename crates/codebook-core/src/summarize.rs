//! Per-variable summary tables.
//!
//! [`summarize`] dispatches on the descriptor's [`VariableKind`]:
//!
//! - numeric columns get counts, units, range, mean, median, standard
//!   deviation and the 10/25/50/75/90 percentiles;
//! - text columns get counts, units, distinct count, length bounds and four
//!   sampled examples;
//! - categorical columns get counts, units and the numeric range of their codes.
//!
//! Missing descriptor fields render as empty strings and undefined statistics
//! as `NA`; every row is always present.

use std::collections::HashSet;

use codebook_common::{NOT_AVAILABLE, Value, format_count, format_fixed};
use codebook_model::{ColumnDescriptor, SummaryTable, VariableKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::stats::Distribution;

/// Number of sampled examples for text columns.
pub const EXAMPLE_COUNT: usize = 4;

const PERCENTILES: [(&str, f64); 5] = [
    ("10th percentile", 0.10),
    ("25th percentile", 0.25),
    ("50th percentile", 0.50),
    ("75th percentile", 0.75),
    ("90th percentile", 0.90),
];

/// Total, valid and missing case counts of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseCounts {
    pub total: usize,
    pub valid: usize,
    pub missing: usize,
}

impl CaseCounts {
    /// Numeric columns count unreadable values as missing; other kinds count
    /// only empty cells.
    pub fn of(values: &[Value], kind: VariableKind) -> Self {
        let valid = match kind {
            VariableKind::Numeric(_) => values
                .iter()
                .filter(|value| value.as_f64().is_some_and(f64::is_finite))
                .count(),
            VariableKind::Text | VariableKind::Categorical(_) => {
                values.iter().filter(|value| !value.is_missing()).count()
            }
        };
        Self {
            total: values.len(),
            valid,
            missing: values.len() - valid,
        }
    }
}

/// Summarizes one column; `None` when the descriptor declares no data type.
pub fn summarize(values: &[Value], descriptor: &ColumnDescriptor, seed: u64) -> Option<SummaryTable> {
    let kind = descriptor.kind()?;
    let mut table = SummaryTable::new(&descriptor.name);
    table.push("variable type", kind.to_string());
    push_counts(&mut table, CaseCounts::of(values, kind));
    table.push("unit of measure", descriptor.measure_unit_text());
    table.push("unit of analysis", descriptor.analysis_unit_text());

    match kind {
        VariableKind::Numeric(_) => push_numeric(&mut table, values),
        VariableKind::Text => push_text(&mut table, values, seed),
        VariableKind::Categorical(_) => push_code_range(&mut table, values),
    }
    Some(table)
}

fn push_counts(table: &mut SummaryTable, counts: CaseCounts) {
    table.push("total cases", format_count(counts.total));
    table.push("valid cases", format_count(counts.valid));
    table.push("missing cases", format_count(counts.missing));
}

fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_fixed(v, 2))
}

fn range_text(min: &str, max: &str) -> String {
    format!("minimum value: {min} to  maximum value: {max}")
}

fn push_numeric(table: &mut SummaryTable, values: &[Value]) {
    let dist = Distribution::new(values.iter().filter_map(Value::as_f64));
    table.push(
        "range",
        range_text(&format_stat(dist.min()), &format_stat(dist.max())),
    );
    table.push("mean", format_stat(dist.mean()));
    table.push("median", format_stat(dist.median()));
    table.push("standard deviation", format_stat(dist.std_dev()));
    for (label, q) in PERCENTILES {
        table.push(label, format_stat(dist.quantile(q)));
    }
}

fn push_code_range(table: &mut SummaryTable, values: &[Value]) {
    let numbers: Option<Vec<f64>> = values
        .iter()
        .filter(|value| !value.is_missing())
        .map(Value::as_f64)
        .collect();
    let (min, max) = match numbers.map(Distribution::new) {
        Some(dist) => (dist.min(), dist.max()),
        None => (None, None),
    };
    let format_bound = |bound: Option<f64>| {
        bound.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format_fixed(v, 0))
    };
    table.push("range", range_text(&format_bound(min), &format_bound(max)));
}

fn push_text(table: &mut SummaryTable, values: &[Value], seed: u64) {
    let distinct = distinct_texts(values);
    table.push("unique values", format_count(distinct.len()));

    // Missing cells read as "0" for the length bounds.
    let texts = values.iter().map(|value| match value {
        Value::Missing => "0".to_string(),
        other => other.to_text(),
    });
    let (shortest, longest) = texts.fold((None::<String>, None::<String>), |(min, max), text| {
        let min = match min {
            Some(current) if current <= text => Some(current),
            _ => Some(text.clone()),
        };
        let max = match max {
            Some(current) if current >= text => Some(current),
            _ => Some(text),
        };
        (min, max)
    });
    let length = |text: Option<String>| {
        text.map_or_else(
            || NOT_AVAILABLE.to_string(),
            |text| format_count(text.chars().count()),
        )
    };
    table.push("minimum length", length(shortest));
    table.push("maximum length", length(longest));

    for (idx, example) in sample_examples(&distinct, seed).into_iter().enumerate() {
        table.push(format!("example {}", idx + 1), example);
    }
}

/// Distinct non-missing texts in first-appearance order.
pub fn distinct_texts(values: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| !value.is_missing())
        .map(Value::to_text)
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

/// Picks [`EXAMPLE_COUNT`] examples from the distinct values.
///
/// With enough distinct values the picks are drawn without replacement from a
/// generator seeded with `seed`; otherwise the available values repeat in order.
pub fn sample_examples(distinct: &[String], seed: u64) -> Vec<String> {
    if distinct.is_empty() {
        return vec![String::new(); EXAMPLE_COUNT];
    }
    if distinct.len() < EXAMPLE_COUNT {
        return distinct.iter().cycle().take(EXAMPLE_COUNT).cloned().collect();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    index::sample(&mut rng, distinct.len(), EXAMPLE_COUNT)
        .into_iter()
        .map(|idx| distinct[idx].clone())
        .collect()
}
