//! Codebook computation.
//!
//! - [`summarize`](crate::summarize::summarize): per-variable summary tables
//! - [`tabulate`](crate::tabulate::tabulate): category frequencies
//! - [`plan_widths`](crate::layout::plan_widths): table column widths
//! - [`assemble_codebook`](crate::assemble::assemble_codebook): the full document

pub mod assemble;
pub mod context;
pub mod dictionary;
pub mod layout;
pub mod stats;
pub mod summarize;
pub mod tabulate;

pub use crate::assemble::{
    Assembly, DICTIONARY_TITLE, KEY_TERMS_TITLE, Narrative, OVERVIEW_TITLE, VARIABLES_TITLE,
    assemble_codebook,
};
pub use crate::context::{CodebookContext, VariableReport};
pub use crate::dictionary::data_dictionary;
pub use crate::layout::{CharCount, TextMeasure, plan_widths};
pub use crate::stats::Distribution;
pub use crate::summarize::{CaseCounts, sample_examples, summarize};
pub use crate::tabulate::{AggregateColumn, coerce_codes, tabulate};
