//! Shared types for both backend and frontend (WASM-compatible).
//!
//! This module contains the rendered grid model exchanged between the Tauri
//! backend and the Leptos frontend. These types must not depend on
//! backend-only dependencies.

use serde::{Deserialize, Serialize};
use techstore_core::ProductId;

/// Background applied to every cell of a highlighted row.
pub const HIGHLIGHT_COLOR: &str = "#7ffd00";

/// Row height in pixels.
pub const ROW_HEIGHT_PX: u32 = 100;

/// Edge length of the square image placeholder, in pixels.
pub const IMAGE_SIZE_PX: u32 = 80;

/// Currency suffix appended to every price.
pub const CURRENCY_SUFFIX: &str = "руб.";

/// The fixed grid columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Image,
    Name,
    Description,
    Price,
    Discount,
    Stock,
    Manufacturer,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Image,
        Column::Name,
        Column::Description,
        Column::Price,
        Column::Discount,
        Column::Stock,
        Column::Manufacturer,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Image => "Изображение",
            Column::Name => "Наименование",
            Column::Description => "Описание",
            Column::Price => "Цена",
            Column::Discount => "Скидка",
            Column::Stock => "Остаток",
            Column::Manufacturer => "Производитель",
        }
    }
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub column: Column,
    pub text: String,
    /// Hover text, if any.
    pub tooltip: Option<String>,
    /// CSS color, set on highlighted rows.
    pub background: Option<String>,
}

/// One rendered product row; `cells` follows [`Column::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub product_id: ProductId,
    /// Image reference from the record (placeholder only).
    pub image: Option<String>,
    pub highlighted: bool,
    pub cells: Vec<GridCell>,
}

impl GridRow {
    pub fn cell(&self, column: Column) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.column == column)
    }
}

/// A complete render of the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    pub columns: Vec<String>,
    pub rows: Vec<GridRow>,
    pub shown: usize,
    pub total: usize,
    /// Status line text, e.g. "Показано: 1 из 5 товаров".
    pub status: String,
}

/// One entry of a selector control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOption {
    pub index: usize,
    pub label: String,
}

/// Entries of both selector controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub discount_bands: Vec<SelectorOption>,
    pub sort_orders: Vec<SelectorOption>,
}
