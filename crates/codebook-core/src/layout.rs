//! Column width planning.

use codebook_model::{ColumnWidths, WidthStrategy};

/// Padding added to the widest cell under [`WidthStrategy::Uneven`].
pub const UNEVEN_PADDING: f64 = 4.0;

/// Measures rendered text width.
pub trait TextMeasure {
    fn width(&self, text: &str) -> f64;
}

/// One unit per character, for fixed-width output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl TextMeasure for CharCount {
    fn width(&self, text: &str) -> f64 {
        text.chars().count() as f64
    }
}

/// Decides column widths for `rows` (header first) within `available` width.
///
/// A strategy that does not fit the table shape falls back to
/// [`WidthStrategy::Even`] with a warning. A table without columns gets an
/// empty per-column list.
pub fn plan_widths(
    strategy: &WidthStrategy,
    rows: &[Vec<String>],
    available: f64,
    measure: &dyn TextMeasure,
) -> ColumnWidths {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return ColumnWidths::PerColumn(Vec::new());
    }

    match strategy {
        WidthStrategy::Even => even(available, columns),
        WidthStrategy::Uneven => {
            let widths = (0..columns)
                .map(|idx| {
                    rows.iter()
                        .filter_map(|row| row.get(idx))
                        .map(|cell| measure.width(cell))
                        .fold(0.0, f64::max)
                        + UNEVEN_PADDING
                })
                .collect();
            ColumnWidths::PerColumn(widths)
        }
        WidthStrategy::Split2080 if columns == 2 => {
            let wide = (available * 0.8).trunc();
            let narrow = (available - wide).trunc();
            ColumnWidths::PerColumn(vec![narrow, wide])
        }
        WidthStrategy::Split2080 => {
            tracing::warn!(
                columns,
                "split-20-80 needs exactly two columns; using even widths"
            );
            even(available, columns)
        }
        WidthStrategy::Fixed(width) => ColumnWidths::Uniform(*width),
        WidthStrategy::PerColumn(widths) if widths.len() == columns => {
            ColumnWidths::PerColumn(widths.clone())
        }
        WidthStrategy::PerColumn(widths) => {
            tracing::warn!(
                columns,
                widths = widths.len(),
                "width list does not match column count; using even widths"
            );
            even(available, columns)
        }
    }
}

fn even(available: f64, columns: usize) -> ColumnWidths {
    ColumnWidths::Uniform(available / columns as f64 - 1.0)
}

/// Per-column widths with one flexible column taking what the others leave.
///
/// Falls back to [`WidthStrategy::Even`] when the fixed columns leave less
/// than `min_flexible` for the flexible one.
pub fn with_flexible_column(
    fixed: &[f64],
    flexible_idx: usize,
    available: f64,
    min_flexible: f64,
) -> WidthStrategy {
    let rest = available - fixed.iter().sum::<f64>();
    if rest < min_flexible {
        return WidthStrategy::Even;
    }
    let mut widths = fixed.to_vec();
    widths.insert(flexible_idx.min(widths.len()), rest);
    WidthStrategy::PerColumn(widths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: usize, body: &[&str]) -> Vec<Vec<String>> {
        let header: Vec<String> = (0..columns).map(|idx| format!("h{idx}")).collect();
        let mut rows = vec![header];
        rows.push(
            (0..columns)
                .map(|idx| body.get(idx).copied().unwrap_or_default().to_string())
                .collect(),
        );
        rows
    }

    #[test]
    fn split_20_80() {
        let widths = plan_widths(&WidthStrategy::Split2080, &table(2, &[]), 100.0, &CharCount);
        assert_eq!(widths, ColumnWidths::PerColumn(vec![20.0, 80.0]));

        let widths = plan_widths(&WidthStrategy::Split2080, &table(2, &[]), 187.0, &CharCount);
        assert_eq!(widths, ColumnWidths::PerColumn(vec![38.0, 149.0]));
    }

    #[test]
    fn split_20_80_degrades_to_even() {
        let widths = plan_widths(&WidthStrategy::Split2080, &table(4, &[]), 100.0, &CharCount);
        assert_eq!(widths, ColumnWidths::Uniform(24.0));
    }

    #[test]
    fn even_and_uneven() {
        let rows = table(3, &["a", "longest cell", ""]);
        assert_eq!(
            plan_widths(&WidthStrategy::Even, &rows, 90.0, &CharCount),
            ColumnWidths::Uniform(29.0)
        );
        assert_eq!(
            plan_widths(&WidthStrategy::Uneven, &rows, 90.0, &CharCount),
            ColumnWidths::PerColumn(vec![6.0, 16.0, 6.0])
        );
    }

    #[test]
    fn explicit_widths() {
        let rows = table(2, &[]);
        assert_eq!(
            plan_widths(&WidthStrategy::Fixed(15.0), &rows, 90.0, &CharCount),
            ColumnWidths::Uniform(15.0)
        );
        assert_eq!(
            plan_widths(&WidthStrategy::PerColumn(vec![10.0, 70.0]), &rows, 90.0, &CharCount),
            ColumnWidths::PerColumn(vec![10.0, 70.0])
        );
        assert_eq!(
            plan_widths(&WidthStrategy::PerColumn(vec![10.0]), &rows, 90.0, &CharCount),
            ColumnWidths::Uniform(44.0)
        );
    }

    #[test]
    fn empty_table() {
        assert_eq!(
            plan_widths(&WidthStrategy::Uneven, &[], 90.0, &CharCount),
            ColumnWidths::PerColumn(Vec::new())
        );
    }

    #[test]
    fn flexible_column() {
        assert_eq!(
            with_flexible_column(&[30.0, 20.0, 14.0, 25.0], 4, 120.0, 10.0),
            WidthStrategy::PerColumn(vec![30.0, 20.0, 14.0, 25.0, 31.0])
        );
        assert_eq!(
            with_flexible_column(&[12.0, 24.0, 24.0], 1, 120.0, 10.0),
            WidthStrategy::PerColumn(vec![12.0, 60.0, 24.0, 24.0])
        );
        assert_eq!(
            with_flexible_column(&[30.0, 20.0, 14.0, 25.0], 4, 80.0, 10.0),
            WidthStrategy::Even
        );
    }
}
