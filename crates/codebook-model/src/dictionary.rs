use serde::Serialize;

pub const DICTIONARY_HEADER: [&str; 5] = [
    "Variable Name",
    "Data Type",
    "Length",
    "Categorical",
    "Variable Label",
];

/// One dataset column as listed in the data dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    pub name: String,
    pub data_type: String,
    pub length: String,
    pub categorical: bool,
    pub label: String,
}

impl DictionaryEntry {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.data_type.clone(),
            self.length.clone(),
            if self.categorical { "True" } else { "False" }.to_string(),
            self.label.clone(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataDictionary {
    pub entries: Vec<DictionaryEntry>,
}

impl DataDictionary {
    pub fn header(&self) -> Vec<String> {
        DICTIONARY_HEADER.iter().map(ToString::to_string).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.entries.iter().map(DictionaryEntry::to_row).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
