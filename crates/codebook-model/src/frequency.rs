//! Category frequency tables.

use codebook_common::{format_count, format_fixed, format_percent};
use serde::Serialize;

use crate::descriptor::CategoryCode;

/// Population sum and share attached to a frequency row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopulationShare {
    pub sum: f64,
    /// Fraction of the total population (0.0 - 1.0).
    pub percent: f64,
}

/// One category: code, label, count and share of the count total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub code: CategoryCode,
    pub label: String,
    pub count: usize,
    /// Fraction of the count total (0.0 - 1.0).
    pub percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<PopulationShare>,
}

/// Per-code counts for one categorical variable, ordered by code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrequencyTable {
    pub variable: String,
    /// Unit label of the counted column.
    pub count_unit: String,
    /// Unit label of the population column, when one is declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_unit: Option<String>,
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    pub fn has_population(&self) -> bool {
        self.population_unit.is_some()
    }

    pub fn header(&self) -> Vec<String> {
        let mut header = vec![
            "Code".to_string(),
            "Label".to_string(),
            format!("Count of {}", self.count_unit),
            format!("Percent {}", self.count_unit),
        ];
        if let Some(unit) = &self.population_unit {
            header.push(format!("Sum of {unit}"));
            header.push(format!("Percent {unit}"));
        }
        header
    }

    /// Body rows formatted for rendering.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let with_population = self.has_population();
        self.rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    row.code.to_string(),
                    row.label.clone(),
                    format_count(row.count),
                    format_percent(row.percent),
                ];
                if with_population {
                    let share = row.population.unwrap_or(PopulationShare {
                        sum: 0.0,
                        percent: 0.0,
                    });
                    cells.push(format_fixed(share.sum, 0));
                    cells.push(format_percent(share.percent));
                }
                cells
            })
            .collect()
    }

    pub fn row(&self, code: &CategoryCode) -> Option<&FrequencyRow> {
        self.rows.iter().find(|row| &row.code == code)
    }

    pub fn total_count(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(population: bool) -> FrequencyTable {
        FrequencyTable {
            variable: "ownershp".to_string(),
            count_unit: "Housing units".to_string(),
            population_unit: population.then(|| "Persons".to_string()),
            rows: vec![FrequencyRow {
                code: CategoryCode::Int(1),
                label: "Owned".to_string(),
                count: 1200,
                percent: 0.5,
                population: population.then_some(PopulationShare {
                    sum: 3456.0,
                    percent: 0.25,
                }),
            }],
        }
    }

    #[test]
    fn header_without_population() {
        assert_eq!(
            table(false).header(),
            vec!["Code", "Label", "Count of Housing units", "Percent Housing units"]
        );
    }

    #[test]
    fn rows_with_population() {
        let rows = table(true).to_rows();
        assert_eq!(
            rows,
            vec![vec!["1", "Owned", "1,200", "50.00%", "3,456", "25.00%"]]
        );
        assert_eq!(table(true).header().len(), 6);
    }
}
