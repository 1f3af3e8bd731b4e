//! Loading the dataset, schema and configuration of one run.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info;

use codebook_ingest::{load_config, load_schema, read_dataset, read_text_document};
use codebook_model::{CodebookConfig, Schema};

/// Everything a command needs before computing anything.
#[derive(Debug)]
pub struct RunInputs {
    pub dataset: DataFrame,
    pub schema: Schema,
    pub config: CodebookConfig,
}

/// Values given on the command line that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub title: Option<String>,
    pub seed: Option<u64>,
    pub page_width: Option<usize>,
    pub page_length: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: CodebookConfig) -> CodebookConfig {
        if let Some(title) = &self.title {
            config.title.clone_from(title);
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.page_width {
            config.page_width = width;
        }
        if let Some(length) = self.page_length {
            config.page_length = length;
        }
        config
    }
}

/// Reads the dataset and schema, and the config file when one is given.
pub fn load_inputs(
    data: &Path,
    schema: &Path,
    config: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<RunInputs> {
    let start = Instant::now();
    let dataset =
        read_dataset(data).with_context(|| format!("read dataset {}", data.display()))?;
    let schema =
        load_schema(schema).with_context(|| format!("load schema {}", schema.display()))?;
    let config = match config {
        Some(path) => {
            load_config(path).with_context(|| format!("load config {}", path.display()))?
        }
        None => CodebookConfig::default(),
    };
    let config = overrides.apply(config);

    info!(
        rows = dataset.height(),
        columns = dataset.width(),
        variables = schema.len(),
        duration_ms = start.elapsed().as_millis(),
        "inputs loaded"
    );
    Ok(RunInputs {
        dataset,
        schema,
        config,
    })
}

/// Reads an optional narrative text file.
pub fn load_narrative_text(path: Option<&Path>) -> Result<Option<String>> {
    path.map(|path| {
        read_text_document(path).with_context(|| format!("read text {}", path.display()))
    })
    .transpose()
}
