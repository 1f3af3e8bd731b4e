use std::path::PathBuf;

#[derive(Debug)]
pub struct GenerateResult {
    pub title: String,
    pub output: PathBuf,
    pub pages: usize,
    pub variables: Vec<VariableSummary>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct VariableSummary {
    pub name: String,
    /// `None` when the descriptor declares no data type.
    pub kind: Option<String>,
    pub valid: Option<usize>,
    pub missing: Option<usize>,
    pub categories: Option<usize>,
    pub status: VariableStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableStatus {
    Reported,
    Skipped,
    Failed(String),
}
