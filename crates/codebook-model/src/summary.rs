use serde::Serialize;

/// Header row of every summary table.
pub const SUMMARY_HEADER: [&str; 2] = ["Variable characteristic", "Variable details"];

/// One (characteristic, value) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Characteristic {
    pub label: String,
    pub value: String,
}

/// Ordered characteristics describing one variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    pub variable: String,
    pub characteristics: Vec<Characteristic>,
}

impl SummaryTable {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            characteristics: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.characteristics.push(Characteristic {
            label: label.into(),
            value: value.into(),
        });
    }

    /// Value of the first characteristic with this label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.characteristics
            .iter()
            .find(|characteristic| characteristic.label == label)
            .map(|characteristic| characteristic.value.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.characteristics
            .iter()
            .map(|characteristic| characteristic.label.as_str())
    }

    pub fn header(&self) -> Vec<String> {
        SUMMARY_HEADER.iter().map(ToString::to_string).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.characteristics
            .iter()
            .map(|characteristic| vec![characteristic.label.clone(), characteristic.value.clone()])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.characteristics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characteristics.is_empty()
    }
}
