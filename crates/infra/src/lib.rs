//! Infrastructure layer: configuration and the product data loader.

pub mod config;
pub mod error;
pub mod loader;

pub use config::CatalogConfig;
pub use error::LoadError;
pub use loader::{
    CatalogOrigin, InMemorySource, JsonFileSource, LoadWarning, LoadedCatalog, ProductSource,
    load_catalog,
};
