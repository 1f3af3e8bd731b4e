use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Codebook";
pub const DEFAULT_SEED: u64 = 15151;
pub const DEFAULT_PAGE_WIDTH: usize = 120;
pub const DEFAULT_PAGE_LENGTH: usize = 60;

/// Settings for one codebook run.
///
/// Every field has a default, so a partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodebookConfig {
    pub title: String,
    /// Seed for example sampling.
    pub seed: u64,
    /// Characters per rendered line.
    pub page_width: usize,
    /// Content lines per rendered page.
    pub page_length: usize,
    /// Footer text; the renderer supplies one naming the output file when unset.
    pub footer_text: Option<String>,
}

impl Default for CodebookConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            seed: DEFAULT_SEED,
            page_width: DEFAULT_PAGE_WIDTH,
            page_length: DEFAULT_PAGE_LENGTH,
            footer_text: None,
        }
    }
}

impl CodebookConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_page_width(mut self, width: usize) -> Self {
        self.page_width = width;
        self
    }

    #[must_use]
    pub fn with_page_length(mut self, length: usize) -> Self {
        self.page_length = length;
        self
    }

    #[must_use]
    pub fn with_footer_text(mut self, text: impl Into<String>) -> Self {
        self.footer_text = Some(text.into());
        self
    }
}
