//! Fixed-width rendering of table blocks.

use codebook_core::{CharCount, plan_widths};
use codebook_model::{Alignment, TableBlock};

use crate::wrap::{align, wrap_text};

const MIN_COLUMN_WIDTH: usize = 2;

/// Renders a table as text lines no wider than the planned column widths.
///
/// Each column keeps one trailing space as gutter; cells wrap within their
/// column. Rules separate the header from the body.
pub fn render_table(table: &TableBlock, page_width: usize) -> Vec<String> {
    let columns = table.column_count();
    let widths: Vec<usize> = plan_widths(&table.widths, &table.all_rows(), page_width as f64, &CharCount)
        .resolve(columns)
        .into_iter()
        .map(|width| (width.max(0.0).floor() as usize).max(MIN_COLUMN_WIDTH))
        .collect();
    let rule = "-".repeat(widths.iter().sum::<usize>().min(page_width.max(1)));

    let mut lines = Vec::new();
    if !table.title.trim().is_empty() {
        lines.extend(wrap_text(&table.title, page_width));
    }
    lines.push(rule.clone());
    lines.extend(render_row(&table.header, &widths, table.header_align));
    lines.push(rule.clone());
    for row in &table.rows {
        lines.extend(render_row(row, &widths, table.body_align));
    }
    lines.push(rule);
    lines
}

fn render_row(cells: &[String], widths: &[usize], alignment: Alignment) -> Vec<String> {
    let wrapped: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(idx, width)| {
            let cell = cells.get(idx).map(String::as_str).unwrap_or_default();
            wrap_text(cell, width - 1)
        })
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|line_idx| {
            let mut line = String::new();
            for (cell_lines, width) in wrapped.iter().zip(widths) {
                let text = cell_lines.get(line_idx).map(String::as_str).unwrap_or_default();
                line.push_str(&align(text, width - 1, alignment));
                line.push(' ');
            }
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebook_model::WidthStrategy;

    #[test]
    fn split_table() {
        let table = TableBlock::new(
            "age: Age of head",
            vec!["Variable characteristic".into(), "Variable details".into()],
            vec![
                vec!["variable type".into(), "numeric (Int)".into()],
                vec!["mean".into(), "42.50".into()],
            ],
        )
        .with_widths(WidthStrategy::Split2080);

        insta::assert_snapshot!(render_table(&table, 80).join("\n"), @r"
        age: Age of head
        --------------------------------------------------------------------------------
           Variable                            Variable details
        characteristic
        --------------------------------------------------------------------------------
        variable type   numeric (Int)
        mean            42.50
        --------------------------------------------------------------------------------
        ");
    }

    #[test]
    fn uneven_columns_fit_content() {
        let table = TableBlock::new(
            "",
            vec!["Code".into(), "Label".into()],
            vec![vec!["1".into(), "Owned".into()]],
        )
        .with_widths(WidthStrategy::Uneven)
        .with_alignment(Alignment::Left, Alignment::Right);

        let lines = render_table(&table, 80);
        assert_eq!(lines[0], "-".repeat(17));
        assert_eq!(lines[1], "Code    Label");
        assert_eq!(lines[3], "      1    Owned");
    }
}
