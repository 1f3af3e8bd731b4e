use std::fs;

use codebook_ingest::{IngestError, load_config, load_schema, read_dataset, read_text_document};
use codebook_model::{CategoryCode, DataType, VariableKind};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn json_schema_as_list() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "schema.json",
        br#"[
            {"name": "huid", "data_type": "String", "label": "Household ID"},
            {"name": "ownershp", "DataType": "Int", "categorical": true,
             "categories": {"1": "Owned", "2": "Rented"}, "primary_key": "huid"}
        ]"#,
    );

    let schema = load_schema(&path).unwrap();
    assert_eq!(schema.len(), 2);
    let ownershp = schema.require("ownershp").unwrap();
    assert_eq!(
        ownershp.kind(),
        Some(VariableKind::Categorical(DataType::Int))
    );
    assert_eq!(
        ownershp
            .categories
            .as_ref()
            .unwrap()
            .get(&CategoryCode::Int(1)),
        Some("Owned")
    );
}

#[test]
fn toml_schema_as_table() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "schema.toml",
        br#"
[[variables]]
name = "numprec"
data_type = "Int"
measure_unit = "Persons"
"#,
    );

    let schema = load_schema(&path).unwrap();
    assert_eq!(schema.names().collect::<Vec<_>>(), vec!["numprec"]);
    assert_eq!(schema.variables()[0].measure_unit_text(), "Persons");
}

#[test]
fn duplicate_descriptors_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "schema.json",
        br#"[{"name": "a", "data_type": "Int"}, {"name": "a", "data_type": "Float"}]"#,
    );
    assert!(matches!(
        load_schema(&path),
        Err(IngestError::Schema { .. })
    ));
}

#[test]
fn malformed_schema_reports_format() {
    let dir = TempDir::new().unwrap();
    let json = write(&dir, "schema.json", b"[{\"name\": ");
    assert!(matches!(load_schema(&json), Err(IngestError::Json { .. })));

    let toml = write(&dir, "schema.toml", b"variables = [");
    assert!(matches!(load_schema(&toml), Err(IngestError::Toml { .. })));

    let yaml = write(&dir, "schema.yaml", b"variables: []");
    assert!(matches!(
        load_schema(&yaml),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn config_overrides_only_given_keys() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "codebook.toml", b"title = \"Housing Units\"\nseed = 7\n");
    let config = load_config(&path).unwrap();
    assert_eq!(config.title, "Housing Units");
    assert_eq!(config.seed, 7);
    assert_eq!(config.page_width, 120);
}

#[test]
fn dataset_and_text_round_out_inputs() {
    let dir = TempDir::new().unwrap();
    let data = write(&dir, "data.csv", b"huid,income\nH1,1000.5\nH2,\n");
    let df = read_dataset(&data).unwrap();
    assert_eq!(df.shape(), (2, 2));

    let overview = write(&dir, "overview.txt", b"Line one\r\nLine two\r\n");
    assert_eq!(
        read_text_document(&overview).unwrap(),
        "Line one\nLine two\n"
    );

    let missing = dir.path().join("absent.txt");
    assert!(matches!(
        read_text_document(&missing),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn json_schema_keyed_by_column_name() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "schema.json",
        br#"{
            "id": {"DataType": "Int", "label": "Identifier", "pyType": "int",
                   "AnalysisUnit": "Person", "MeasureUnit": "ID"},
            "age": {"DataType": "Int", "label": "Age in years", "pyType": "int",
                    "AnalysisUnit": "Person", "MeasureUnit": "Years"},
            "gender": {"DataType": "String", "label": "Gender", "pyType": "category",
                       "AnalysisUnit": "Person", "MeasureUnit": "Gender",
                       "primary_key": "id",
                       "categories_dict": {"M": "Male", "F": "Female"}},
            "score": {"DataType": "Float", "label": "Test Score", "pyType": "float",
                      "AnalysisUnit": "Person", "MeasureUnit": "Score"}
        }"#,
    );

    let schema = load_schema(&path).unwrap();
    assert_eq!(
        schema.names().collect::<Vec<_>>(),
        vec!["id", "age", "gender", "score"]
    );
    let gender = schema.require("gender").unwrap();
    assert_eq!(gender.name, "gender");
    assert_eq!(
        gender.kind(),
        Some(VariableKind::Categorical(DataType::String))
    );
    assert_eq!(
        gender
            .categories
            .as_ref()
            .unwrap()
            .get(&CategoryCode::Text("F".to_string())),
        Some("Female")
    );
    assert_eq!(
        schema.require("age").unwrap().kind(),
        Some(VariableKind::Numeric(DataType::Int))
    );
}

#[test]
fn toml_schema_keyed_by_column_name() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "schema.toml",
        br#"
[numprec]
data_type = "Int"
measure_unit = "Persons"
"#,
    );

    let schema = load_schema(&path).unwrap();
    assert_eq!(schema.len(), 1);
    assert_eq!(schema.require("numprec").unwrap().measure_unit_text(), "Persons");
}

#[test]
fn misspelled_variables_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "schema.json",
        br#"{"variable": [{"name": "huid", "data_type": "String"}]}"#,
    );
    assert!(matches!(load_schema(&path), Err(IngestError::Json { .. })));
}
