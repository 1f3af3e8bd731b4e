//! Codebook output.
//!
//! Renders an assembled [`Codebook`](codebook_model::Codebook) as paginated
//! fixed-width text: a table of contents, one page run per section, and tables
//! laid out by the width planner.

mod page;
mod table;
mod toc;
mod wrap;
mod writer;

pub use page::{
    PAGE_BREAK, RenderOptions, RenderedCodebook, default_footer, render_codebook, section_lines,
};
pub use table::render_table;
pub use toc::{TOC_HEADING, TocEntry, toc_line};
pub use wrap::{align, wrap_text};
pub use writer::write_codebook;
