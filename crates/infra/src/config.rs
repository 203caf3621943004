//! Configuration loading and representation.

use std::path::PathBuf;

use crate::loader::JsonFileSource;

/// Environment variable overriding the data file path.
pub const DATA_FILE_ENV: &str = "TECHSTORE_DATA_FILE";

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "products.json";

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_file: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_FILE_ENV).filter(|value| !value.trim().is_empty()) {
            Some(path) => Self {
                data_file: PathBuf::from(path),
            },
            None => Self::default(),
        }
    }

    pub fn source(&self) -> JsonFileSource {
        JsonFileSource::new(self.data_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_products_json() {
        let config = CatalogConfig::from_lookup(|_| None);
        assert_eq!(config.data_file, PathBuf::from("products.json"));
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn env_overrides_path() {
        let config = CatalogConfig::from_lookup(|key| {
            (key == DATA_FILE_ENV).then(|| "/srv/store/catalog.json".to_string())
        });
        assert_eq!(config.data_file, PathBuf::from("/srv/store/catalog.json"));
        assert_eq!(config.source().path(), config.data_file.as_path());
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = CatalogConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, CatalogConfig::default());
    }
}
