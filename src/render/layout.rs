//! Dashboard grid: a throughput row on top and one row per column below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width shares of the bar chart, share panel and recent log in a column row.
const PANEL_WIDTHS: [u16; 3] = [70, 20, 10];

/// Areas for one column row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAreas {
    /// Frequency bar chart.
    pub bars: Rect,
    /// Per-label share of the total.
    pub share: Rect,
    /// Recent-value log.
    pub log: Rect,
}

/// Row layout for a fixed number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardLayout {
    columns: usize,
}

impl DashboardLayout {
    /// Layout for `columns` column rows.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }

    /// Number of column rows.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Splits `area` into the throughput area and per-column areas.
    ///
    /// Every row, throughput included, gets an equal share of the height.
    #[must_use]
    pub fn calculate(&self, area: Rect) -> (Rect, Vec<ColumnAreas>) {
        let rows = self.columns as u32 + 1;
        let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Ratio(1, rows)).collect();

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        let columns = row_areas
            .iter()
            .skip(1)
            .map(|row| {
                let panels = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(PANEL_WIDTHS.map(Constraint::Percentage))
                    .split(*row);
                ColumnAreas { bars: panels[0], share: panels[1], log: panels[2] }
            })
            .collect();

        (row_areas[0], columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_split_equally() {
        let layout = DashboardLayout::new(3);
        let (throughput, columns) = layout.calculate(Rect::new(0, 0, 100, 40));

        assert_eq!(columns.len(), 3);
        assert_eq!(throughput.height, 10);
        for c in &columns {
            assert_eq!(c.bars.height, 10);
        }
    }

    #[test]
    fn test_column_row_widths() {
        let layout = DashboardLayout::new(1);
        let (_, columns) = layout.calculate(Rect::new(0, 0, 100, 20));

        assert_eq!(columns[0].bars.width, 70);
        assert_eq!(columns[0].share.width, 20);
        assert_eq!(columns[0].log.width, 10);
        assert_eq!(columns[0].share.x, 70);
    }

    #[test]
    fn test_zero_columns_is_throughput_only() {
        let (throughput, columns) = DashboardLayout::default().calculate(Rect::new(0, 0, 80, 24));
        assert!(columns.is_empty());
        assert_eq!(throughput, Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let (_, columns) = DashboardLayout::new(5).calculate(Rect::new(0, 0, 3, 2));
        assert_eq!(columns.len(), 5);
    }
}
