//! Per-report context and single-variable reports.

use codebook_common::{Value, column_values};
use codebook_model::{
    CodebookConfig, CodebookError, ColumnDescriptor, FrequencyTable, Result, Schema,
    SummaryTable, VariableKind,
};
use polars::prelude::DataFrame;

use crate::summarize::{CaseCounts, summarize};
use crate::tabulate::{AggregateColumn, tabulate};

/// Everything one report reads: the dataset, its schema and the run settings.
#[derive(Debug, Clone, Copy)]
pub struct CodebookContext<'a> {
    pub dataset: &'a DataFrame,
    pub schema: &'a Schema,
    pub config: &'a CodebookConfig,
}

/// Summary and (for categorical variables) frequencies of one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableReport {
    pub name: String,
    pub kind: VariableKind,
    pub counts: CaseCounts,
    pub summary: SummaryTable,
    pub frequencies: Option<FrequencyTable>,
}

impl<'a> CodebookContext<'a> {
    pub fn new(dataset: &'a DataFrame, schema: &'a Schema, config: &'a CodebookConfig) -> Self {
        Self {
            dataset,
            schema,
            config,
        }
    }

    /// Reads `column` on behalf of `variable`.
    pub fn column_values(&self, variable: &str, column: &str) -> Result<Vec<Value>> {
        let column_ref = self
            .dataset
            .column(column)
            .map_err(|_| CodebookError::ColumnNotFound {
                variable: variable.to_string(),
                column: column.to_string(),
            })?;
        Ok(column_values(column_ref))
    }

    /// Header unit for a column: its declared measure unit, else its name.
    pub fn unit_label(&self, column: &str) -> String {
        self.schema
            .get(column)
            .and_then(|descriptor| descriptor.measure_unit.as_deref())
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .unwrap_or(column)
            .to_string()
    }

    pub fn summarize(&self, descriptor: &ColumnDescriptor) -> Result<Option<SummaryTable>> {
        let values = self.column_values(&descriptor.name, &descriptor.name)?;
        Ok(summarize(&values, descriptor, self.config.seed))
    }

    /// Frequencies of a categorical variable; `None` for other kinds.
    pub fn tabulate(&self, descriptor: &ColumnDescriptor) -> Result<Option<FrequencyTable>> {
        if !descriptor.kind().is_some_and(VariableKind::is_categorical) {
            return Ok(None);
        }
        let values = self.column_values(&descriptor.name, &descriptor.name)?;
        self.tabulate_values(descriptor, &values).map(Some)
    }

    fn tabulate_values(
        &self,
        descriptor: &ColumnDescriptor,
        values: &[Value],
    ) -> Result<FrequencyTable> {
        let counted_column = descriptor.primary_key_column().unwrap_or(&descriptor.name);
        let counted_values = if counted_column == descriptor.name {
            None
        } else {
            Some(self.column_values(&descriptor.name, counted_column)?)
        };
        let counted_unit = self.unit_label(counted_column);

        let population = descriptor
            .population_column()
            .map(|column| {
                self.column_values(&descriptor.name, column)
                    .map(|values| (self.unit_label(column), values))
            })
            .transpose()?;

        Ok(tabulate(
            values,
            descriptor,
            AggregateColumn::new(&counted_unit, counted_values.as_deref().unwrap_or(values)),
            population
                .as_ref()
                .map(|(unit, values)| AggregateColumn::new(unit, values)),
        ))
    }

    /// Builds the full report of one variable; `None` when it has no kind.
    pub fn report_variable(&self, descriptor: &ColumnDescriptor) -> Result<Option<VariableReport>> {
        let Some(kind) = descriptor.kind() else {
            return Ok(None);
        };
        let values = self.column_values(&descriptor.name, &descriptor.name)?;
        let frequencies = if kind.is_categorical() {
            Some(self.tabulate_values(descriptor, &values)?)
        } else {
            None
        };
        let Some(summary) = summarize(&values, descriptor, self.config.seed) else {
            return Ok(None);
        };
        Ok(Some(VariableReport {
            name: descriptor.name.clone(),
            kind,
            counts: CaseCounts::of(&values, kind),
            summary,
            frequencies,
        }))
    }
}
