use codebook_model::{DataDictionary, DictionaryEntry, Schema};
use polars::prelude::DataFrame;

/// Lists every dataset column in dataset order with its schema details.
///
/// Columns the schema does not describe keep their name and leave the other
/// fields empty.
pub fn data_dictionary(dataset: &DataFrame, schema: &Schema) -> DataDictionary {
    let entries = dataset
        .get_column_names()
        .into_iter()
        .map(|name| match schema.get(name.as_str()) {
            Some(descriptor) => DictionaryEntry {
                name: descriptor.name.clone(),
                data_type: descriptor
                    .data_type
                    .map(|data_type| data_type.to_string())
                    .unwrap_or_default(),
                length: descriptor
                    .length
                    .map(|length| length.to_string())
                    .unwrap_or_default(),
                categorical: descriptor.is_categorical(),
                label: descriptor.label_text().to_string(),
            },
            None => {
                tracing::debug!(column = %name, "dataset column has no descriptor");
                DictionaryEntry {
                    name: name.to_string(),
                    data_type: String::new(),
                    length: String::new(),
                    categorical: false,
                    label: String::new(),
                }
            }
        })
        .collect();
    DataDictionary { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebook_model::{ColumnDescriptor, DataType};
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn rows_follow_dataset_order() {
        let df = DataFrame::new(vec![
            Series::new("huid".into(), &["H1", "H2"]).into_column(),
            Series::new("extra".into(), &[1i64, 2]).into_column(),
            Series::new("ownershp".into(), &[1i64, 2]).into_column(),
        ])
        .unwrap();
        let schema = Schema::new(vec![
            ColumnDescriptor::new("ownershp", DataType::Int)
                .categorical()
                .with_label("Ownership of dwelling"),
            ColumnDescriptor::new("huid", DataType::String).with_length(12),
        ])
        .unwrap();

        let dictionary = data_dictionary(&df, &schema);
        assert_eq!(
            dictionary.to_rows(),
            vec![
                vec!["huid", "String", "12", "False", ""],
                vec!["extra", "", "", "False", ""],
                vec!["ownershp", "Int", "", "True", "Ownership of dwelling"],
            ]
        );
    }
}
