use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::descriptor::ColumnDescriptor;
use crate::error::{CodebookError, Result};

/// Ordered set of column descriptors keyed by column name.
///
/// Descriptor order is report order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    variables: Vec<ColumnDescriptor>,
}

impl Schema {
    pub fn new(variables: Vec<ColumnDescriptor>) -> Result<Self> {
        let schema = Self { variables };
        schema.validate()?;
        Ok(schema)
    }

    /// Rejects duplicate descriptor names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for descriptor in &self.variables {
            if !seen.insert(descriptor.name.as_str()) {
                return Err(CodebookError::DuplicateVariable {
                    variable: descriptor.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.variables.iter().find(|descriptor| descriptor.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&ColumnDescriptor> {
        self.get(name).ok_or_else(|| CodebookError::UnknownVariable {
            variable: name.to_string(),
        })
    }

    pub fn variables(&self) -> &[ColumnDescriptor] {
        &self.variables
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|descriptor| descriptor.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DataType;

    #[test]
    fn rejects_duplicates() {
        let result = Schema::new(vec![
            ColumnDescriptor::new("huid", DataType::String),
            ColumnDescriptor::new("huid", DataType::Int),
        ]);
        assert!(matches!(
            result,
            Err(CodebookError::DuplicateVariable { variable }) if variable == "huid"
        ));
    }

    #[test]
    fn lookup() {
        let schema = Schema::new(vec![
            ColumnDescriptor::new("huid", DataType::String),
            ColumnDescriptor::new("numprec", DataType::Int),
        ])
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.require("numprec").unwrap().name, "numprec");
        assert!(matches!(
            schema.require("missing"),
            Err(CodebookError::UnknownVariable { .. })
        ));
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["huid", "numprec"]);
    }
}
