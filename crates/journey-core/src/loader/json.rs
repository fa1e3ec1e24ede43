// crates/journey-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use super::DatasetSource;
use crate::error::Result;
use crate::model::{Country, CountryRaw};
use std::path::{Path, PathBuf};

/// **Primary source:** the pre-processed `countries.json` array.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSource { path: path.into() }
    }
}

impl DatasetSource for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Country>> {
        let reader = common_io::open_stream(&self.path)?;
        let raw: Vec<CountryRaw> = serde_json::from_reader(reader)?;
        Ok(raw.into_iter().map(Country::from).collect())
    }
}
