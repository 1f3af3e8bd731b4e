use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use codebook_core::VariableReport;
use codebook_model::DataDictionary;

use crate::types::{GenerateResult, VariableStatus};

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Codebook: {}", result.title);
    println!("Output: {} ({} pages)", result.output.display(), result.pages);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Kind"),
        header_cell("Valid"),
        header_cell("Missing"),
        header_cell("Categories"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_valid = 0usize;
    let mut total_missing = 0usize;
    let mut reported = 0usize;
    for variable in &result.variables {
        total_valid += variable.valid.unwrap_or(0);
        total_missing += variable.missing.unwrap_or(0);
        if variable.status == VariableStatus::Reported {
            reported += 1;
        }
        table.add_row(vec![
            Cell::new(&variable.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            variable
                .kind
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            variable.valid.map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(variable.missing, Color::Yellow),
            variable.categories.map_or_else(|| dim_cell("-"), Cell::new),
            status_cell(&variable.status),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{reported}/{} reported", result.variables.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_valid).add_attribute(Attribute::Bold),
        count_cell(Some(total_missing), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let failures: Vec<_> = result
        .variables
        .iter()
        .filter_map(|variable| match &variable.status {
            VariableStatus::Failed(reason) => Some((&variable.name, reason)),
            _ => None,
        })
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (name, reason) in failures {
            eprintln!("- {name}: {reason}");
        }
    }
}

pub fn print_reports(reports: &[VariableReport]) {
    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{} ({})", report.name, report.kind);

        let mut summary = Table::new();
        summary.set_header(
            report
                .summary
                .header()
                .iter()
                .map(|label| header_cell(label))
                .collect::<Vec<_>>(),
        );
        apply_table_style(&mut summary);
        for row in report.summary.to_rows() {
            summary.add_row(row);
        }
        println!("{summary}");

        if let Some(frequencies) = &report.frequencies {
            let mut table = Table::new();
            table.set_header(
                frequencies
                    .header()
                    .iter()
                    .map(|label| header_cell(label))
                    .collect::<Vec<_>>(),
            );
            apply_table_style(&mut table);
            for idx in 2..frequencies.header().len() {
                align_column(&mut table, idx, CellAlignment::Right);
            }
            for row in frequencies.to_rows() {
                table.add_row(row);
            }
            println!("{table}");
        }
    }
}

pub fn print_dictionary(dictionary: &DataDictionary) {
    let mut table = Table::new();
    table.set_header(
        dictionary
            .header()
            .iter()
            .map(|label| header_cell(label))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for entry in &dictionary.entries {
        let row = entry.to_row();
        let mut cells: Vec<Cell> = row.into_iter().map(Cell::new).collect();
        if entry.data_type.is_empty()
            && let Some(first) = cells.first_mut()
        {
            *first = dim_cell(&entry.name);
        }
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &VariableStatus) -> Cell {
    match status {
        VariableStatus::Reported => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        VariableStatus::Skipped => dim_cell("skipped"),
        VariableStatus::Failed(_) => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
