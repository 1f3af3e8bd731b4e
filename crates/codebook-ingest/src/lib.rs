//! Input loading for the codebook generator.
//!
//! Reads the CSV dataset into a Polars `DataFrame`, the schema and optional
//! configuration from JSON or TOML, and the optional narrative text files.

pub mod csv;
pub mod error;
pub mod schema;
pub mod text;

pub use crate::csv::{read_dataset, validate_dataframe_shape};
pub use crate::error::{IngestError, Result};
pub use crate::schema::{load_config, load_schema};
pub use crate::text::read_text_document;
