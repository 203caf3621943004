//! Catalog service: the loaded catalog plus the render entry points.

use techstore_core::DomainResult;
use techstore_infra::{CatalogConfig, LoadWarning, LoadedCatalog, load_catalog};
use techstore_products::{DiscountBand, SortOrder, ViewOption, ViewQuery, apply_view};

use crate::grid::render_grid;
use crate::types::{GridView, SelectorOption, ViewOptions};

/// Holds the catalog loaded at startup. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: LoadedCatalog,
}

impl CatalogService {
    pub fn new(catalog: LoadedCatalog) -> Self {
        Self { catalog }
    }

    /// Load the catalog once using `config`, falling back to built-in records.
    pub fn load(config: &CatalogConfig) -> Self {
        let service = Self::new(load_catalog(&config.source()));
        tracing::info!(
            origin = ?service.catalog.origin,
            total = service.catalog.len(),
            "catalog service ready"
        );
        service
    }

    pub fn catalog(&self) -> &LoadedCatalog {
        &self.catalog
    }

    pub fn load_warning(&self) -> Option<&LoadWarning> {
        self.catalog.warning.as_ref()
    }

    /// Full render of the records selected by `query`.
    pub fn view(&self, query: ViewQuery) -> GridView {
        render_grid(&apply_view(&self.catalog.products, query))
    }

    /// Same as [`CatalogService::view`], addressed by selector indices.
    pub fn view_by_index(&self, band_index: usize, order_index: usize) -> DomainResult<GridView> {
        let query = ViewQuery::new(
            DiscountBand::from_index(band_index)?,
            SortOrder::from_index(order_index)?,
        );
        Ok(self.view(query))
    }

    /// Entries for both selector controls.
    pub fn options() -> ViewOptions {
        ViewOptions {
            discount_bands: selector_options::<DiscountBand>(),
            sort_orders: selector_options::<SortOrder>(),
        }
    }
}

fn selector_options<T: ViewOption>() -> Vec<SelectorOption> {
    T::ALL
        .iter()
        .map(|option| SelectorOption {
            index: option.index(),
            label: option.label().to_string(),
        })
        .collect()
}
