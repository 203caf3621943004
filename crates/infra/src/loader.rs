//! Product data loader with built-in fallback.
//!
//! Policy:
//! - data present and readable → use it verbatim
//! - no data present (missing file) → built-in catalog, silently
//! - read or parse failure → built-in catalog plus a user-facing warning
//!
//! The load happens once; there are no retries.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use techstore_products::{Product, builtin_catalog};

use crate::error::LoadError;

/// Somewhere product records can be read from.
pub trait ProductSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Read all records. `Ok(None)` means the source holds no data at all.
    fn fetch(&self) -> Result<Option<Vec<Product>>, LoadError>;
}

/// JSON file containing an array of product records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Option<Vec<Product>>, LoadError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}

/// In-memory source for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    products: Option<Vec<Product>>,
}

impl InMemorySource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
        }
    }

    /// A source with no data, as if the file did not exist.
    pub fn empty() -> Self {
        Self { products: None }
    }
}

impl ProductSource for InMemorySource {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    fn fetch(&self) -> Result<Option<Vec<Product>>, LoadError> {
        Ok(self.products.clone())
    }
}

/// Where the loaded records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    Source,
    BuiltIn,
}

/// Non-fatal notice shown to the user when the data source could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadWarning {
    pub title: String,
    pub message: String,
}

impl LoadWarning {
    fn from_error(err: &LoadError) -> Self {
        Self {
            title: "Ошибка".to_string(),
            message: format!("Не удалось загрузить данные: {err}"),
        }
    }
}

impl core::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Outcome of the startup load. Immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub origin: CatalogOrigin,
    pub warning: Option<LoadWarning>,
}

impl LoadedCatalog {
    pub fn builtin() -> Self {
        Self {
            products: builtin_catalog(),
            origin: CatalogOrigin::BuiltIn,
            warning: None,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Load the catalog from `source`, falling back to the built-in records.
///
/// Never fails; the application always reaches a usable state.
pub fn load_catalog(source: &dyn ProductSource) -> LoadedCatalog {
    match source.fetch() {
        Ok(Some(products)) => {
            tracing::info!(
                source = %source.describe(),
                count = products.len(),
                "loaded product catalog"
            );
            LoadedCatalog {
                products,
                origin: CatalogOrigin::Source,
                warning: None,
            }
        }
        Ok(None) => {
            tracing::info!(
                source = %source.describe(),
                "no product data found; using built-in catalog"
            );
            LoadedCatalog::builtin()
        }
        Err(err) => {
            tracing::warn!(
                source = %source.describe(),
                error = %err,
                "failed to load product data; using built-in catalog"
            );
            LoadedCatalog {
                warning: Some(LoadWarning::from_error(&err)),
                ..LoadedCatalog::builtin()
            }
        }
    }
}
