//! Schema and configuration file loading.
//!
//! Both accept JSON or TOML, chosen by file extension. A schema file is a
//! bare list of descriptors (JSON only), a table with a `variables` list, or a
//! mapping from column name to descriptor.

use std::fmt;
use std::path::Path;

use codebook_model::{CodebookConfig, ColumnDescriptor, Schema};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{IngestError, Result, io_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

fn detect_format(path: &Path, kind: &'static str) -> Result<FileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "json" => Ok(FileFormat::Json),
        "toml" => Ok(FileFormat::Toml),
        _ => Err(IngestError::UnsupportedFormat {
            kind,
            extension,
            path: path.to_path_buf(),
        }),
    }
}

fn parse_file<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<T> {
    let format = detect_format(path, kind)?;
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    match format {
        FileFormat::Json => serde_json::from_str(&text).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        }),
        FileFormat::Toml => toml::from_str(&text).map_err(|source| IngestError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    List(Vec<ColumnDescriptor>),
    Table(Schema),
    Mapping(NamedDescriptors),
}

/// Descriptors keyed by column name, in file order.
struct NamedDescriptors(Vec<ColumnDescriptor>);

impl<'de> Deserialize<'de> for NamedDescriptors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct NamedVisitor;

        impl<'de> Visitor<'de> for NamedVisitor {
            type Value = NamedDescriptors;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from column name to descriptor")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut descriptors = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, mut descriptor)) =
                    map.next_entry::<String, ColumnDescriptor>()?
                {
                    descriptor.name = name;
                    descriptors.push(descriptor);
                }
                Ok(NamedDescriptors(descriptors))
            }
        }

        deserializer.deserialize_map(NamedVisitor)
    }
}

/// Loads and validates a schema file.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let schema = match parse_file::<SchemaFile>(path, "schema")? {
        SchemaFile::List(variables) => Schema::new(variables),
        SchemaFile::Table(schema) => schema.validate().map(|()| schema),
        SchemaFile::Mapping(NamedDescriptors(variables)) => Schema::new(variables),
    }
    .map_err(|source| IngestError::Schema {
        path: path.to_path_buf(),
        source,
    })?;

    if schema.is_empty() {
        tracing::warn!(path = %path.display(), "schema describes no variables");
    }
    let untyped = schema
        .variables()
        .iter()
        .filter(|descriptor| descriptor.kind().is_none())
        .count();
    if untyped > 0 {
        tracing::warn!(
            path = %path.display(),
            untyped,
            "schema has descriptors without a data type; they will not be summarized"
        );
    }
    tracing::debug!(path = %path.display(), variables = schema.len(), "schema loaded");
    Ok(schema)
}

/// Loads a configuration file; absent keys keep their defaults.
pub fn load_config(path: &Path) -> Result<CodebookConfig> {
    let config = parse_file::<CodebookConfig>(path, "config")?;
    tracing::debug!(path = %path.display(), title = %config.title, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("schema.JSON"), "schema").unwrap(),
            FileFormat::Json
        );
        assert_eq!(
            detect_format(Path::new("schema.toml"), "schema").unwrap(),
            FileFormat::Toml
        );
        assert!(matches!(
            detect_format(Path::new("schema.yaml"), "schema"),
            Err(IngestError::UnsupportedFormat { kind: "schema", .. })
        ));
    }
}
