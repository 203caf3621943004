//! Render a catalog view into the grid model.
//!
//! Every call produces a full render: all rows, all cells, the status line.

use techstore_products::{CatalogView, Product};

use crate::types::{
    CURRENCY_SUFFIX, Column, GridCell, GridRow, GridView, HIGHLIGHT_COLOR,
};

/// Price text: `"45000.00 → 40500.00 руб."` when discounted, else `"28000.00 руб."`.
pub fn format_price(product: &Product) -> String {
    if product.has_discount() {
        format!(
            "{:.2} → {:.2} {CURRENCY_SUFFIX}",
            product.price,
            product.final_price()
        )
    } else {
        format!("{:.2} {CURRENCY_SUFFIX}", product.price)
    }
}

/// Discount text with the number as written in the data: `10%`, `10.0%`, `12.5%`.
pub fn format_discount(product: &Product) -> String {
    format!("{}%", product.discount_text())
}

pub fn status_line(shown: usize, total: usize) -> String {
    format!("Показано: {shown} из {total} товаров")
}

fn cell_text(product: &Product, column: Column) -> String {
    match column {
        Column::Image => String::new(),
        Column::Name => product.name.clone(),
        Column::Description => product.description_or_empty().to_string(),
        Column::Price => format_price(product),
        Column::Discount => format_discount(product),
        Column::Stock => product.stock_text(),
        Column::Manufacturer => product.manufacturer_or_empty().to_string(),
    }
}

pub fn render_row(product: &Product) -> GridRow {
    let highlighted = product.is_highlighted();
    let background = highlighted.then(|| HIGHLIGHT_COLOR.to_string());

    let cells = Column::ALL
        .iter()
        .map(|&column| GridCell {
            column,
            text: cell_text(product, column),
            tooltip: (column == Column::Description)
                .then(|| product.description_or_empty().to_string()),
            background: background.clone(),
        })
        .collect();

    GridRow {
        product_id: product.id.clone(),
        image: product.image.clone(),
        highlighted,
        cells,
    }
}

pub fn render_grid(view: &CatalogView) -> GridView {
    GridView {
        columns: Column::ALL.iter().map(|c| c.header().to_string()).collect(),
        rows: view.items.iter().map(render_row).collect(),
        shown: view.shown(),
        total: view.total,
        status: status_line(view.shown(), view.total),
    }
}
