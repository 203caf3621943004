//! Plain-text rendering of a grid, for headless runs.

use crate::types::{Column, GridView};

/// Marker prefixed to highlighted rows in place of a background color.
pub const HIGHLIGHT_MARKER: &str = "*";

/// Render `grid` as a pipe-separated table followed by the status line.
///
/// The image column has no text form and is omitted.
pub fn render_text(grid: &GridView) -> String {
    let mut out = String::new();

    let headers: Vec<&str> = Column::ALL
        .iter()
        .filter(|c| **c != Column::Image)
        .map(|c| c.header())
        .collect();
    out.push_str("  | ");
    out.push_str(&headers.join(" | "));
    out.push('\n');

    for row in &grid.rows {
        let marker = if row.highlighted { HIGHLIGHT_MARKER } else { " " };
        let cells: Vec<&str> = row
            .cells
            .iter()
            .filter(|cell| cell.column != Column::Image)
            .map(|cell| cell.text.as_str())
            .collect();
        out.push_str(marker);
        out.push_str(" | ");
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }

    out.push_str(&grid.status);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::render_grid;
    use techstore_products::{DiscountBand, SortOrder, ViewQuery, apply_view, builtin_catalog};

    #[test]
    fn renders_header_rows_and_status() {
        let grid = render_grid(&apply_view(
            &builtin_catalog(),
            ViewQuery::new(DiscountBand::Over20, SortOrder::Unsorted),
        ));

        let text = render_text(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "  | Наименование | Описание | Цена | Скидка | Остаток | Производитель"
        );
        assert_eq!(
            lines[1],
            "* | Наушники Sony | Беспроводные | 12000.00 → 9000.00 руб. | 25% | 12 | Sony"
        );
        assert_eq!(lines[2], "Показано: 1 из 5 товаров");
        assert_eq!(lines.len(), 3);
    }
}
