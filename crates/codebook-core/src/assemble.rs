//! Codebook assembly.
//!
//! Sequences the document: project overview, data dictionary, the variable
//! details section with one subsection per described variable, and key terms.
//! A variable whose columns cannot be read is recorded as a failure and left
//! out; the rest of the document is unaffected.

use std::time::Instant;

use codebook_model::{
    Alignment, Block, Codebook, ColumnDescriptor, Section, TableBlock, VariableFailure,
    WidthStrategy,
};
use tracing::{debug, debug_span, info, info_span, warn};

use crate::context::{CodebookContext, VariableReport};
use crate::dictionary::data_dictionary;
use crate::layout::with_flexible_column;

pub const OVERVIEW_TITLE: &str = "Project Overview: Summary of Project Details";
pub const DICTIONARY_TITLE: &str = "Data Dictionary: Summary of Variables";
pub const VARIABLES_TITLE: &str = "Variable Details and Notes";
pub const KEY_TERMS_TITLE: &str = "Key Terms and Definitions";

pub const VARIABLES_INTRO: &str = "The following pages provide details on each variable. \
Where applicable, notes provide links to verify data. \
Categorical variables include details on category codes.";

const DICTIONARY_WIDTHS: [f64; 4] = [30.0, 20.0, 14.0, 25.0];
const MIN_FLEXIBLE_WIDTH: f64 = 10.0;

/// Optional narrative text supplied alongside the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    pub overview: Option<String>,
    pub key_terms: Option<String>,
}

/// The assembled document plus the per-variable reports it was built from.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub codebook: Codebook,
    pub reports: Vec<VariableReport>,
}

pub fn assemble_codebook(ctx: &CodebookContext<'_>, narrative: &Narrative) -> Assembly {
    let span = info_span!("codebook", title = %ctx.config.title);
    let _guard = span.enter();
    let start = Instant::now();

    let available = ctx.config.page_width as f64;
    let mut codebook = Codebook::new(&ctx.config.title);
    let mut reports = Vec::new();

    if let Some(overview) = &narrative.overview {
        codebook.sections.push(text_section(OVERVIEW_TITLE, overview));
    }

    let dictionary = data_dictionary(ctx.dataset, ctx.schema);
    let dictionary_widths = with_flexible_column(
        &DICTIONARY_WIDTHS,
        DICTIONARY_WIDTHS.len(),
        available,
        MIN_FLEXIBLE_WIDTH,
    );
    codebook.sections.push(
        Section::new(0, DICTIONARY_TITLE).with_block(Block::Table(
            TableBlock::new("Data Dictionary", dictionary.header(), dictionary.to_rows())
                .with_widths(dictionary_widths),
        )),
    );

    codebook.sections.push(
        Section::new(0, VARIABLES_TITLE).with_block(Block::Paragraph(VARIABLES_INTRO.to_string())),
    );
    for descriptor in ctx.schema.variables() {
        let variable_span = debug_span!("variable", name = %descriptor.name);
        let _variable_guard = variable_span.enter();

        match ctx.report_variable(descriptor) {
            Ok(Some(report)) => {
                debug!(
                    kind = %report.kind,
                    valid = report.counts.valid,
                    missing = report.counts.missing,
                    "variable summarized"
                );
                codebook
                    .sections
                    .push(variable_section(descriptor, &report, available));
                reports.push(report);
            }
            Ok(None) => {
                debug!("no data type declared; variable skipped");
            }
            Err(err) => {
                warn!(error = %err, "variable left out of codebook");
                codebook.failures.push(VariableFailure {
                    variable: descriptor.name.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    if let Some(key_terms) = &narrative.key_terms {
        codebook.sections.push(text_section(KEY_TERMS_TITLE, key_terms));
    }

    info!(
        sections = codebook.sections.len(),
        variables = reports.len(),
        failures = codebook.failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "codebook assembled"
    );
    Assembly { codebook, reports }
}

/// Splits text into paragraphs at blank lines, joining wrapped lines.
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }
    paragraphs
}

fn text_section(title: &str, text: &str) -> Section {
    let mut section = Section::new(0, title);
    for paragraph in paragraphs(text) {
        section.push(Block::Paragraph(paragraph));
    }
    section
}

fn variable_title(descriptor: &ColumnDescriptor) -> String {
    match descriptor.label_text().trim() {
        "" => descriptor.name.clone(),
        label => format!("{}: {label}", descriptor.name),
    }
}

/// Frequency table widths by column count; the label column takes the rest.
pub fn frequency_widths(columns: usize, available: f64) -> WidthStrategy {
    let fixed: &[f64] = match columns {
        6 => &[12.0, 24.0, 24.0, 18.0, 18.0],
        5 => &[12.0, 30.0, 24.0, 24.0],
        4 => &[12.0, 24.0, 24.0],
        _ => return WidthStrategy::Even,
    };
    with_flexible_column(fixed, 1, available, MIN_FLEXIBLE_WIDTH)
}

fn variable_section(
    descriptor: &ColumnDescriptor,
    report: &VariableReport,
    available: f64,
) -> Section {
    let title = variable_title(descriptor);
    let mut section = Section::new(1, &title);

    section.push(Block::Table(
        TableBlock::new(&title, report.summary.header(), report.summary.to_rows())
            .with_widths(WidthStrategy::Split2080)
            .with_alignment(Alignment::Center, Alignment::Left),
    ));

    if let Some(frequencies) = &report.frequencies {
        let header = frequencies.header();
        let widths = frequency_widths(header.len(), available);
        section.push(Block::Table(
            TableBlock::new(
                format!("{title} - Categorical codes, labels and frequencies"),
                header,
                frequencies.to_rows(),
            )
            .with_widths(widths)
            .with_alignment(Alignment::Center, Alignment::Left),
        ));
    }

    if let Some(notes) = descriptor.notes.as_deref().map(str::trim)
        && !notes.is_empty()
    {
        section.push(Block::Notes {
            heading: format!("Variable Notes: {}", descriptor.name),
            text: notes.to_string(),
        });
    }
    section
}
