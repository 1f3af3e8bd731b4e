//! Loading run inputs from files on disk.

use std::fs;
use std::path::PathBuf;

use codebook_cli::inputs::{ConfigOverrides, load_inputs, load_narrative_text};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn fixture(dir: &TempDir) -> (PathBuf, PathBuf) {
    let data = write(dir, "housing.csv", "huid,ownershp\nH1,1\nH2,2\nH3,1\n");
    let schema = write(
        dir,
        "schema.json",
        r#"[
            {"name": "huid", "data_type": "String"},
            {"name": "ownershp", "data_type": "Int", "categorical": true,
             "categories": {"1": "Owned", "2": "Rented"}}
        ]"#,
    );
    (data, schema)
}

#[test]
fn command_line_values_override_the_config_file() {
    let dir = TempDir::new().unwrap();
    let (data, schema) = fixture(&dir);
    let config = write(
        &dir,
        "codebook.toml",
        "title = \"Housing\"\nseed = 1\npage_width = 80\n",
    );
    let overrides = ConfigOverrides {
        seed: Some(99),
        ..ConfigOverrides::default()
    };

    let inputs = load_inputs(&data, &schema, Some(&config), &overrides).unwrap();
    assert_eq!(inputs.dataset.height(), 3);
    assert_eq!(inputs.schema.len(), 2);
    assert_eq!(inputs.config.title, "Housing");
    assert_eq!(inputs.config.seed, 99);
    assert_eq!(inputs.config.page_width, 80);
}

#[test]
fn missing_dataset_names_the_file() {
    let dir = TempDir::new().unwrap();
    let (_, schema) = fixture(&dir);
    let missing = dir.path().join("absent.csv");

    let error = load_inputs(&missing, &schema, None, &ConfigOverrides::default()).unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn narrative_text_is_read() {
    let dir = TempDir::new().unwrap();
    let overview = write(&dir, "overview.txt", "First paragraph.\r\n\r\nSecond.\r\n");
    let text = load_narrative_text(Some(&overview)).unwrap().unwrap();
    assert_eq!(text, "First paragraph.\n\nSecond.\n");
}
