//! Category frequency tabulation.

use std::collections::BTreeMap;

use codebook_common::Value;
use codebook_model::{CategoryCode, ColumnDescriptor, FrequencyRow, FrequencyTable, PopulationShare};

/// A column aggregated per category, with the unit label used in headers.
#[derive(Debug, Clone, Copy)]
pub struct AggregateColumn<'a> {
    pub unit: &'a str,
    pub values: &'a [Value],
}

impl<'a> AggregateColumn<'a> {
    pub fn new(unit: &'a str, values: &'a [Value]) -> Self {
        Self { unit, values }
    }
}

/// Reads every cell as a category code; missing cells have none.
///
/// When every present value is a number the codes are integers, with
/// fractional values truncated toward zero. Otherwise each value is read from
/// its text, so integer-looking text still matches integer codes declared in
/// the schema.
pub fn coerce_codes(values: &[Value]) -> Vec<Option<CategoryCode>> {
    let numeric = values
        .iter()
        .filter(|value| !value.is_missing())
        .all(|value| value.as_f64().is_some_and(fits_code));

    values
        .iter()
        .map(|value| {
            if value.is_missing() {
                return None;
            }
            if numeric && let Some(number) = value.as_f64() {
                return Some(CategoryCode::Int(number.trunc() as i64));
            }
            Some(CategoryCode::parse(&value.to_text()))
        })
        .collect()
}

fn fits_code(number: f64) -> bool {
    number.is_finite() && number.abs() < i64::MAX as f64
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    count: usize,
    sum: f64,
}

/// Tabulates a categorical column.
///
/// `counted` supplies the values whose non-missing entries are counted per
/// code; `population`, when given, is summed per code. Rows are aligned by
/// position with `values`. Every declared code appears in the result, and
/// observed codes without a declared label use the code as label.
pub fn tabulate(
    values: &[Value],
    descriptor: &ColumnDescriptor,
    counted: AggregateColumn<'_>,
    population: Option<AggregateColumn<'_>>,
) -> FrequencyTable {
    let mut tallies: BTreeMap<CategoryCode, Tally> = BTreeMap::new();
    if let Some(categories) = &descriptor.categories {
        for code in categories.codes() {
            tallies.insert(code.clone(), Tally::default());
        }
    }

    for (idx, code) in coerce_codes(values).into_iter().enumerate() {
        let Some(code) = code else {
            continue;
        };
        let tally = tallies.entry(code).or_default();
        if counted.values.get(idx).is_some_and(|value| !value.is_missing()) {
            tally.count += 1;
        }
        if let Some(population) = &population {
            tally.sum += population
                .values
                .get(idx)
                .and_then(Value::as_f64)
                .filter(|number| number.is_finite())
                .unwrap_or(0.0);
        }
    }

    let total_count: usize = tallies.values().map(|tally| tally.count).sum();
    let total_sum: f64 = tallies.values().map(|tally| tally.sum).sum();

    let rows = tallies
        .into_iter()
        .map(|(code, tally)| {
            let label = descriptor
                .categories
                .as_ref()
                .and_then(|categories| categories.get(&code))
                .map_or_else(|| code.to_string(), str::to_string);
            FrequencyRow {
                label,
                count: tally.count,
                percent: share(tally.count as f64, total_count as f64),
                population: population.as_ref().map(|_| PopulationShare {
                    sum: tally.sum,
                    percent: share(tally.sum, total_sum),
                }),
                code,
            }
        })
        .collect();

    FrequencyTable {
        variable: descriptor.name.clone(),
        count_unit: counted.unit.to_string(),
        population_unit: population.map(|population| population.unit.to_string()),
        rows,
    }
}

fn share(part: f64, total: f64) -> f64 {
    if total == 0.0 { 0.0 } else { part / total }
}
