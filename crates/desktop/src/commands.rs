//! Tauri commands for frontend integration.

use tauri::State;
use techstore_infra::LoadWarning;
use techstore_products::{DiscountBand, SortOrder, ViewQuery};

use crate::service::CatalogService;
use crate::types::{GridView, ViewOptions};

/// Entries of both selector controls.
#[tauri::command]
pub fn view_options() -> ViewOptions {
    CatalogService::options()
}

/// Render the catalog for the current selector values.
///
/// Called on every selection change; the frontend keeps the selection.
#[tauri::command]
pub fn catalog_view(
    band: DiscountBand,
    order: SortOrder,
    state: State<'_, CatalogService>,
) -> GridView {
    tracing::debug!(?band, ?order, "rendering catalog view");
    state.view(ViewQuery::new(band, order))
}

/// Same as [`catalog_view`], addressed by selector indices.
#[tauri::command]
pub fn catalog_view_by_index(
    band_index: usize,
    order_index: usize,
    state: State<'_, CatalogService>,
) -> Result<GridView, String> {
    state
        .view_by_index(band_index, order_index)
        .map_err(|e| format!("Invalid selection: {}", e))
}

/// Warning produced while loading the catalog at startup, if any.
#[tauri::command]
pub fn load_warning(state: State<'_, CatalogService>) -> Option<LoadWarning> {
    state.load_warning().cloned()
}
