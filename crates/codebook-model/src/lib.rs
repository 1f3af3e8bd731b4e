//! Data model shared by the codebook crates.
//!
//! Schema side: [`ColumnDescriptor`], [`Schema`], [`VariableKind`].
//! Result side: [`SummaryTable`], [`FrequencyTable`], [`DataDictionary`] and
//! the assembled [`Codebook`] document.

pub mod config;
pub mod descriptor;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod frequency;
pub mod layout;
pub mod schema;
pub mod summary;

pub use config::CodebookConfig;
pub use descriptor::{CategoryCode, CategoryMap, ColumnDescriptor, DataType, VariableKind};
pub use dictionary::{DICTIONARY_HEADER, DataDictionary, DictionaryEntry};
pub use document::{Block, Codebook, Section, TableBlock, VariableFailure};
pub use error::{CodebookError, Result};
pub use frequency::{FrequencyRow, FrequencyTable, PopulationShare};
pub use layout::{Alignment, ColumnWidths, WidthStrategy};
pub use schema::Schema;
pub use summary::{Characteristic, SUMMARY_HEADER, SummaryTable};
