//! Pagination of an assembled codebook.
//!
//! The table of contents opens the document, every section starts on a fresh
//! page, and each page is framed by the document title and a footer carrying
//! `Page X/N` and the footer text. Pages are separated by form feeds.

use codebook_model::{Alignment, Block, Codebook, CodebookConfig, Section};

use crate::table::render_table;
use crate::toc::{TOC_HEADING, TocEntry, toc_line};
use crate::wrap::{align, wrap_text};

/// Separator written between pages.
pub const PAGE_BREAK: &str = "\u{000C}";

const MIN_PAGE_WIDTH: usize = 20;
const MIN_PAGE_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Characters per line.
    pub page_width: usize,
    /// Content lines per page, excluding header and footer.
    pub page_length: usize,
    pub footer_text: String,
}

impl RenderOptions {
    /// Options from the run configuration.
    ///
    /// Without configured footer text the footer names `output_name` and the
    /// generation time.
    pub fn from_config(config: &CodebookConfig, output_name: &str) -> Self {
        Self {
            page_width: config.page_width,
            page_length: config.page_length,
            footer_text: config
                .footer_text
                .clone()
                .unwrap_or_else(|| default_footer(output_name)),
        }
    }
}

pub fn default_footer(output_name: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("{output_name} | Generated: {timestamp}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCodebook {
    pub text: String,
    pub pages: usize,
    pub toc: Vec<TocEntry>,
}

pub fn render_codebook(codebook: &Codebook, options: &RenderOptions) -> RenderedCodebook {
    let width = options.page_width.max(MIN_PAGE_WIDTH);
    let length = options.page_length.max(MIN_PAGE_LENGTH);

    let section_bodies: Vec<Vec<String>> = codebook
        .sections
        .iter()
        .map(|section| section_lines(section, width))
        .collect();

    // Heading, blank line, one line per section.
    let toc_line_count = 2 + codebook.sections.len();
    let toc_pages = toc_line_count.div_ceil(length);

    let mut next_page = toc_pages + 1;
    let mut toc = Vec::with_capacity(codebook.sections.len());
    for (section, body) in codebook.sections.iter().zip(&section_bodies) {
        toc.push(TocEntry {
            level: section.level,
            title: section.title.clone(),
            page: next_page,
        });
        next_page += body.len().div_ceil(length).max(1);
    }

    let mut toc_lines = vec![TOC_HEADING.to_string(), String::new()];
    toc_lines.extend(toc.iter().map(|entry| toc_line(entry, width)));

    let mut bodies: Vec<&[String]> = toc_lines.chunks(length).collect();
    for body in &section_bodies {
        if body.is_empty() {
            bodies.push(&[]);
        } else {
            bodies.extend(body.chunks(length));
        }
    }

    let total = bodies.len();
    let pages: Vec<String> = bodies
        .iter()
        .enumerate()
        .map(|(idx, body)| {
            frame_page(&codebook.title, body, idx + 1, total, width, length, options)
        })
        .collect();

    tracing::debug!(pages = total, sections = codebook.sections.len(), "codebook paginated");
    RenderedCodebook {
        text: pages.join(PAGE_BREAK),
        pages: total,
        toc,
    }
}

fn frame_page(
    title: &str,
    body: &[String],
    page: usize,
    total: usize,
    width: usize,
    length: usize,
    options: &RenderOptions,
) -> String {
    let mut lines = Vec::with_capacity(length + 6);
    lines.push(align(title, width, Alignment::Center).trim_end().to_string());
    lines.push("=".repeat(width));
    lines.push(String::new());
    lines.extend(body.iter().cloned());
    lines.resize(3 + length, String::new());
    lines.push(String::new());
    lines.push(
        align(&format!("Page {page}/{total}"), width, Alignment::Center)
            .trim_end()
            .to_string(),
    );
    lines.push(
        align(&options.footer_text, width, Alignment::Center)
            .trim_end()
            .to_string(),
    );

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Lines of one section, without trailing blank lines.
pub fn section_lines(section: &Section, width: usize) -> Vec<String> {
    let underline = if section.level == 0 { '=' } else { '-' };
    let mut lines = wrap_text(&section.title, width);
    let rule_len = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    lines.push(underline.to_string().repeat(rule_len));
    lines.push(String::new());

    for block in &section.blocks {
        match block {
            Block::Paragraph(text) => lines.extend(wrap_text(text, width)),
            Block::Table(table) => lines.extend(render_table(table, width)),
            Block::Notes { heading, text } => {
                lines.extend(wrap_text(heading, width));
                for paragraph in text.lines() {
                    lines.extend(wrap_text(paragraph, width));
                }
            }
        }
        lines.push(String::new());
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}
