//! The view pipeline: filter, then sort.
//!
//! The UI holds only the current [`ViewQuery`] and calls [`apply_view`] again on
//! every selection change; nothing here keeps state between calls.

use serde::{Deserialize, Serialize};

use crate::filter::{DiscountBand, apply_filter};
use crate::product::Product;
use crate::sort::{SortOrder, apply_sort};

/// Current selector values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub band: DiscountBand,
    pub order: SortOrder,
}

impl ViewQuery {
    pub fn new(band: DiscountBand, order: SortOrder) -> Self {
        Self { band, order }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Records to display, in display order.
    pub items: Vec<Product>,
    /// Number of records loaded, before filtering.
    pub total: usize,
}

impl CatalogView {
    pub fn shown(&self) -> usize {
        self.items.len()
    }
}

/// Produce the records to display for `query`.
pub fn apply_view(products: &[Product], query: ViewQuery) -> CatalogView {
    let items = apply_sort(apply_filter(products, query.band), query.order);

    tracing::debug!(
        band = ?query.band,
        order = ?query.order,
        shown = items.len(),
        total = products.len(),
        "catalog view computed"
    );

    CatalogView {
        items,
        total: products.len(),
    }
}
