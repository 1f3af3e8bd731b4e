//! Assembled codebook document.
//!
//! A [`Codebook`] is a title plus ordered [`Section`]s. Level 0 sections are
//! the top-level parts (overview, dictionary, variable details, key terms);
//! level 1 sections hold one variable each. Renderers walk this tree.

use serde::Serialize;

use crate::layout::{Alignment, WidthStrategy};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub widths: WidthStrategy,
    pub header_align: Alignment,
    pub body_align: Alignment,
}

impl TableBlock {
    pub fn new(title: impl Into<String>, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            header,
            rows,
            widths: WidthStrategy::Even,
            header_align: Alignment::Center,
            body_align: Alignment::Left,
        }
    }

    #[must_use]
    pub fn with_widths(mut self, widths: WidthStrategy) -> Self {
        self.widths = widths;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, header: Alignment, body: Alignment) -> Self {
        self.header_align = header;
        self.body_align = body;
        self
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Header followed by body rows.
    pub fn all_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Paragraph(String),
    Table(TableBlock),
    Notes { heading: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub level: u8,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }
}

/// A variable left out of the document because its data could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableFailure {
    pub variable: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Codebook {
    pub title: String,
    pub sections: Vec<Section>,
    pub failures: Vec<VariableFailure>,
}

impl Codebook {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
