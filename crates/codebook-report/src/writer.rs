use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use codebook_model::{Codebook, CodebookConfig};

use crate::page::{RenderOptions, RenderedCodebook, render_codebook};

/// Renders `codebook` and writes it to `path`, creating parent directories.
pub fn write_codebook(
    codebook: &Codebook,
    path: &Path,
    config: &CodebookConfig,
) -> Result<RenderedCodebook> {
    let output_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("codebook");
    let options = RenderOptions::from_config(config, output_name);
    let rendered = render_codebook(codebook, &options);

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    fs::write(path, &rendered.text).with_context(|| format!("write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        pages = rendered.pages,
        sections = rendered.toc.len(),
        "codebook written"
    );
    Ok(rendered)
}
