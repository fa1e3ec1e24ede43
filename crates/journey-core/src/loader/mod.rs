// crates/journey-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (file lookup, decompression) and delegates to
//! specific parsers (JSON vs CSV).
//!
//! Loading is an ordered list of candidate [`DatasetSource`]s: the first one
//! that yields a dataset wins. Sources only ever read their backing files.

use crate::error::{GeoError, Result};
use crate::model::Country;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod delimited;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "json")]
pub mod builder;

pub use delimited::CsvSource;
#[cfg(feature = "json")]
pub use json::JsonSource;

/// A single place the country dataset can be read from.
pub trait DatasetSource: Send + Sync + Debug {
    /// Short label used in logs and errors.
    fn name(&self) -> &str;
    fn path(&self) -> &Path;
    fn load(&self) -> Result<Vec<Country>>;
}

/// File layout under the data root.
///
/// ```text
/// <root>/api-data/countries.json   pre-processed dataset (primary)
/// <root>/data/countries.csv        source dataset (fallback)
/// <root>/globe-data/XX-globe.json  per-theme globe documents
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DataPaths { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn api_data_dir(&self) -> PathBuf {
        self.root.join("api-data")
    }

    pub fn countries_json(&self) -> PathBuf {
        self.api_data_dir().join("countries.json")
    }

    pub fn countries_csv(&self) -> PathBuf {
        self.root.join("data").join("countries.csv")
    }

    pub fn globe_dir(&self) -> PathBuf {
        self.root.join("globe-data")
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths::new("public")
    }
}

/// Tries each source in order until one succeeds.
#[derive(Debug)]
pub struct DatasetLoader {
    sources: Vec<Box<dyn DatasetSource>>,
}

impl DatasetLoader {
    pub fn new(sources: Vec<Box<dyn DatasetSource>>) -> Self {
        DatasetLoader { sources }
    }

    /// JSON first (when the `json` feature is on), then CSV.
    pub fn from_paths(paths: &DataPaths) -> Self {
        let mut sources: Vec<Box<dyn DatasetSource>> = Vec::new();
        #[cfg(feature = "json")]
        sources.push(Box::new(JsonSource::new(paths.countries_json())));
        sources.push(Box::new(CsvSource::new(paths.countries_csv())));
        Self::new(sources)
    }

    pub fn sources(&self) -> &[Box<dyn DatasetSource>] {
        &self.sources
    }

    /// Loads the full ordered country sequence.
    ///
    /// Fails with [`GeoError::DataUnavailable`] listing every source's reason
    /// when none of them can be read or parsed.
    pub fn load(&self) -> Result<Vec<Country>> {
        let mut failures = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            match source.load() {
                Ok(countries) => {
                    tracing::info!(
                        source = source.name(),
                        path = %source.path().display(),
                        "Loaded {} countries",
                        countries.len()
                    );
                    return Ok(countries);
                }
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        path = %source.path().display(),
                        "Dataset source failed: {e}"
                    );
                    failures.push(format!("{}: {}", source.name(), e));
                }
            }
        }

        if failures.is_empty() {
            failures.push("no dataset sources configured".to_owned());
        }
        Err(GeoError::DataUnavailable(failures.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(Option<Vec<Country>>);

    impl DatasetSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn path(&self) -> &Path {
            Path::new("memory")
        }

        fn load(&self) -> Result<Vec<Country>> {
            self.0
                .clone()
                .ok_or_else(|| GeoError::DataUnavailable("empty".into()))
        }
    }

    fn italy() -> Country {
        Country {
            code: "ITA".into(),
            name: "Italy".into(),
            macroarea_id: 12,
            continent_id: 3,
            center_lat: 42.0,
            center_lng: 13.0,
        }
    }

    #[test]
    fn first_successful_source_wins() {
        let loader = DatasetLoader::new(vec![
            Box::new(Fixed(None)),
            Box::new(Fixed(Some(vec![italy()]))),
            Box::new(Fixed(Some(Vec::new()))),
        ]);
        assert_eq!(loader.load().unwrap(), vec![italy()]);
    }

    #[test]
    fn all_failures_become_data_unavailable() {
        let loader = DatasetLoader::new(vec![Box::new(Fixed(None)), Box::new(Fixed(None))]);
        match loader.load() {
            Err(GeoError::DataUnavailable(msg)) => assert_eq!(msg, "fixed: Data unavailable: empty; fixed: Data unavailable: empty"),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }

        assert!(matches!(
            DatasetLoader::new(Vec::new()).load(),
            Err(GeoError::DataUnavailable(_))
        ));
    }

    #[test]
    fn default_layout() {
        let paths = DataPaths::new("/srv/public");
        assert_eq!(
            paths.countries_json(),
            PathBuf::from("/srv/public/api-data/countries.json")
        );
        assert_eq!(
            paths.countries_csv(),
            PathBuf::from("/srv/public/data/countries.csv")
        );
        assert_eq!(paths.globe_dir(), PathBuf::from("/srv/public/globe-data"));
    }
}
