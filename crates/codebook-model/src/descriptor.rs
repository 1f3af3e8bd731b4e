//! Column descriptors.
//!
//! A [`ColumnDescriptor`] is the schema entry for one dataset column: its
//! declared storage type, whether it is categorical, its display label, units,
//! notes and category labels. The (data type, categorical) pair resolves to a
//! [`VariableKind`] that drives which summary a column receives.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(alias = "string", alias = "str", alias = "Text", alias = "text")]
    String,
    #[serde(alias = "int", alias = "Integer", alias = "integer")]
    Int,
    #[serde(alias = "float", alias = "Double", alias = "double")]
    Float,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int => "Int",
            DataType::Float => "Float",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// Continuous numeric column.
    Numeric(DataType),
    /// Free text column.
    Text,
    /// Coded column of any storage type.
    Categorical(DataType),
}

impl VariableKind {
    pub fn is_categorical(self) -> bool {
        matches!(self, VariableKind::Categorical(_))
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Numeric(data_type) => write!(f, "numeric ({data_type})"),
            VariableKind::Text => f.write_str("string"),
            VariableKind::Categorical(data_type) => write!(f, "categorical ({data_type})"),
        }
    }
}

/// Stored value of a categorical column.
///
/// Integer codes sort before text codes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum CategoryCode {
    Int(i64),
    Text(String),
}

impl CategoryCode {
    /// Reads a code from text; integer-looking text becomes an integer code.
    ///
    /// ```
    /// use codebook_model::CategoryCode;
    ///
    /// assert_eq!(CategoryCode::parse(" 2 "), CategoryCode::Int(2));
    /// assert_eq!(CategoryCode::parse("B"), CategoryCode::Text("B".to_string()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(code) => CategoryCode::Int(code),
            Err(_) => CategoryCode::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryCode::Int(code) => write!(f, "{code}"),
            CategoryCode::Text(code) => f.write_str(code),
        }
    }
}

impl From<i64> for CategoryCode {
    fn from(code: i64) -> Self {
        CategoryCode::Int(code)
    }
}

impl From<&str> for CategoryCode {
    fn from(code: &str) -> Self {
        CategoryCode::parse(code)
    }
}

/// Declared code → label mapping of a categorical column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct CategoryMap {
    labels: BTreeMap<CategoryCode, String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<CategoryCode>, label: impl Into<String>) {
        self.labels.insert(code.into(), label.into());
    }

    pub fn get(&self, code: &CategoryCode) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    pub fn codes(&self) -> impl Iterator<Item = &CategoryCode> {
        self.labels.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryCode, &str)> {
        self.labels.iter().map(|(code, label)| (code, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<C: Into<CategoryCode>, L: Into<String>> FromIterator<(C, L)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (C, L)>>(iter: I) -> Self {
        let mut map = CategoryMap::new();
        for (code, label) in iter {
            map.insert(code, label);
        }
        map
    }
}

impl From<BTreeMap<String, String>> for CategoryMap {
    fn from(raw: BTreeMap<String, String>) -> Self {
        raw.into_iter()
            .map(|(code, label)| (CategoryCode::parse(&code), label))
            .collect()
    }
}

impl From<CategoryMap> for BTreeMap<String, String> {
    fn from(map: CategoryMap) -> Self {
        map.labels
            .into_iter()
            .map(|(code, label)| (code.to_string(), label))
            .collect()
    }
}

/// Schema entry for one dataset column.
///
/// Field aliases accept the capitalized keys (`DataType`, `MeasureUnit`,
/// `AnalysisUnit`, `categories_dict`) used by older data-structure files, where
/// `pyType: "category"` marks a categorical column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDescriptor {
    /// Column name; unique within a schema.
    pub name: String,
    /// Human-readable label.
    pub label: Option<String>,
    /// Declared storage type. Columns without one are not summarized.
    #[serde(alias = "DataType")]
    pub data_type: Option<DataType>,
    /// Whether the column holds category codes.
    pub categorical: bool,
    /// Legacy storage hint; `"category"` marks the column categorical.
    #[serde(rename = "pyType", alias = "py_type", skip_serializing_if = "Option::is_none")]
    pub py_type: Option<String>,
    /// Unit the values are measured in (e.g. "Housing units").
    #[serde(alias = "MeasureUnit")]
    pub measure_unit: Option<String>,
    /// Unit each row describes (e.g. "Household").
    #[serde(alias = "AnalysisUnit")]
    pub analysis_unit: Option<String>,
    /// Declared fixed length.
    pub length: Option<u32>,
    /// Free-form notes printed after the summary.
    pub notes: Option<String>,
    /// Declared category labels.
    #[serde(alias = "categories_dict")]
    pub categories: Option<CategoryMap>,
    /// Column whose non-missing values are counted per category.
    pub primary_key: Option<String>,
    /// Column summed per category for population totals.
    pub pop_var: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn categorical(mut self) -> Self {
        self.categorical = true;
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categorical = true;
        self.categories = Some(categories);
        self
    }

    #[must_use]
    pub fn with_measure_unit(mut self, unit: impl Into<String>) -> Self {
        self.measure_unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_analysis_unit(mut self, unit: impl Into<String>) -> Self {
        self.analysis_unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_pop_var(mut self, column: impl Into<String>) -> Self {
        self.pop_var = Some(column.into());
        self
    }

    /// Summary kind, or `None` when no data type is declared.
    pub fn kind(&self) -> Option<VariableKind> {
        let data_type = self.data_type?;
        Some(if self.is_categorical() {
            VariableKind::Categorical(data_type)
        } else if data_type == DataType::String {
            VariableKind::Text
        } else {
            VariableKind::Numeric(data_type)
        })
    }

    /// Declared categorical, directly or through a `category` storage hint.
    pub fn is_categorical(&self) -> bool {
        self.categorical
            || self
                .py_type
                .as_deref()
                .is_some_and(|hint| hint.trim().eq_ignore_ascii_case("category"))
    }

    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    pub fn measure_unit_text(&self) -> &str {
        self.measure_unit.as_deref().unwrap_or_default()
    }

    pub fn analysis_unit_text(&self) -> &str {
        self.analysis_unit.as_deref().unwrap_or_default()
    }

    /// Population column, ignoring blank declarations.
    pub fn population_column(&self) -> Option<&str> {
        self.pop_var
            .as_deref()
            .map(str::trim)
            .filter(|column| !column.is_empty())
    }

    /// Primary-key column, ignoring blank declarations.
    pub fn primary_key_column(&self) -> Option<&str> {
        self.primary_key
            .as_deref()
            .map(str::trim)
            .filter(|column| !column.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_dispatch() {
        let text = ColumnDescriptor::new("huid", DataType::String);
        assert_eq!(text.kind(), Some(VariableKind::Text));

        let numeric = ColumnDescriptor::new("numprec", DataType::Int);
        assert_eq!(numeric.kind(), Some(VariableKind::Numeric(DataType::Int)));

        let coded = ColumnDescriptor::new("ownershp", DataType::Int).categorical();
        assert_eq!(coded.kind(), Some(VariableKind::Categorical(DataType::Int)));

        let coded_text = ColumnDescriptor::new("tenure", DataType::String).categorical();
        assert_eq!(
            coded_text.kind(),
            Some(VariableKind::Categorical(DataType::String))
        );

        let undeclared = ColumnDescriptor {
            name: "x".to_string(),
            ..ColumnDescriptor::default()
        };
        assert_eq!(undeclared.kind(), None);
    }

    #[test]
    fn category_storage_hint_marks_categorical() {
        let hinted = ColumnDescriptor {
            name: "gender".to_string(),
            data_type: Some(DataType::String),
            py_type: Some("Category".to_string()),
            ..ColumnDescriptor::default()
        };
        assert!(hinted.is_categorical());
        assert_eq!(
            hinted.kind(),
            Some(VariableKind::Categorical(DataType::String))
        );

        let plain = ColumnDescriptor {
            py_type: Some("int".to_string()),
            ..ColumnDescriptor::new("age", DataType::Int)
        };
        assert!(!plain.is_categorical());
        assert_eq!(plain.kind(), Some(VariableKind::Numeric(DataType::Int)));
    }

    #[test]
    fn kind_display() {
        assert_eq!(VariableKind::Numeric(DataType::Float).to_string(), "numeric (Float)");
        assert_eq!(VariableKind::Text.to_string(), "string");
        assert_eq!(
            VariableKind::Categorical(DataType::Int).to_string(),
            "categorical (Int)"
        );
    }

    #[test]
    fn codes_order_integers_first() {
        let map: CategoryMap = [("10", "Ten"), ("2", "Two"), ("A", "Letter")]
            .into_iter()
            .collect();
        let codes: Vec<String> = map.codes().map(ToString::to_string).collect();
        assert_eq!(codes, vec!["2", "10", "A"]);
        assert_eq!(map.get(&CategoryCode::Int(10)), Some("Ten"));
    }

    #[test]
    fn blank_links_are_ignored() {
        let descriptor = ColumnDescriptor::new("x", DataType::Int)
            .with_pop_var("  ")
            .with_primary_key("huid");
        assert_eq!(descriptor.population_column(), None);
        assert_eq!(descriptor.primary_key_column(), Some("huid"));
    }
}
