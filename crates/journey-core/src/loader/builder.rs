// crates/journey-core/src/loader/builder.rs
#![cfg(feature = "json")]

//! Turns a country set into the pre-processed API data files:
//! `countries.json`, `macroareas.json` and `stats.json`.

use crate::aggregate::aggregate_macroareas;
use crate::error::{GeoError, Result};
use crate::model::{Country, CountryView, MacroRegion};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Number of countries echoed in `stats.json`.
const SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleCountry {
    pub code: String,
    pub name: String,
    pub macroarea: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total_countries: usize,
    pub total_macroareas: usize,
    /// Sorted, distinct continent names.
    pub continents: Vec<String>,
    pub processed_at: DateTime<Utc>,
    pub sample_countries: Vec<SampleCountry>,
}

/// Everything the builder writes, kept in memory.
#[derive(Debug, Clone)]
pub struct ApiData {
    pub countries: Vec<CountryView>,
    pub macroareas: Vec<MacroRegion>,
    pub stats: DatasetStats,
}

impl ApiData {
    pub fn build(countries: &[Country]) -> Self {
        Self::build_at(countries, Utc::now())
    }

    pub fn build_at(countries: &[Country], processed_at: DateTime<Utc>) -> Self {
        let views: Vec<CountryView> = countries.iter().map(CountryView::from).collect();
        let macroareas = aggregate_macroareas(countries);

        let continents: BTreeSet<String> =
            macroareas.iter().map(|m| m.continent.clone()).collect();

        let stats = DatasetStats {
            total_countries: views.len(),
            total_macroareas: macroareas.len(),
            continents: continents.into_iter().collect(),
            processed_at,
            sample_countries: views
                .iter()
                .take(SAMPLE_SIZE)
                .map(|v| SampleCountry {
                    code: v.country.code.clone(),
                    name: v.country.name.clone(),
                    macroarea: v.macroarea_name.clone(),
                })
                .collect(),
        };

        ApiData {
            countries: views,
            macroareas,
            stats,
        }
    }

    /// Writes the three files into `out_dir`, creating it if needed.
    /// Returns the paths written.
    pub fn write_to(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir)?;

        let mut written = Vec::with_capacity(3);
        written.push(write_pretty(&out_dir.join("countries.json"), &self.countries)?);
        tracing::info!("Saved countries.json");
        written.push(write_pretty(&out_dir.join("macroareas.json"), &self.macroareas)?);
        tracing::info!("Saved macroareas.json");
        written.push(write_pretty(&out_dir.join("stats.json"), &self.stats)?);
        tracing::info!("Saved stats.json");
        Ok(written)
    }
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf> {
    let file = File::create(path).map_err(GeoError::Io)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(GeoError::Io)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{DataPaths, DatasetLoader};

    fn country(code: &str, name: &str, macroarea_id: u32) -> Country {
        Country {
            code: code.into(),
            name: name.into(),
            macroarea_id,
            continent_id: 3,
            center_lat: 0.0,
            center_lng: 0.0,
        }
    }

    #[test]
    fn stats_summarise_the_dataset() {
        let countries: Vec<Country> = vec![
            country("ITA", "Italy", 12),
            country("FRA", "France", 10),
            country("JPN", "Japan", 37),
            country("DEU", "Germany", 14),
            country("ESP", "Spain", 11),
            country("PRT", "Portugal", 11),
        ];
        let data = ApiData::build(&countries);

        assert_eq!(data.stats.total_countries, 6);
        assert_eq!(data.stats.total_macroareas, 5);
        assert_eq!(data.stats.continents, ["Asia", "Europe"]);
        assert_eq!(data.stats.sample_countries.len(), SAMPLE_SIZE);
        assert_eq!(data.stats.sample_countries[0].macroarea, "Italian Peninsula");
        assert_eq!(data.countries[2].macroarea_name, "East Asia");
    }

    #[test]
    fn written_countries_load_back_through_the_json_source() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        let countries = vec![country("ITA", "Italy", 12), country("XXX", "Nowhere", 999)];

        let written = ApiData::build(&countries)
            .write_to(&paths.api_data_dir())
            .unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.exists()));

        let loaded = DatasetLoader::from_paths(&paths).load().unwrap();
        assert_eq!(loaded, countries);
    }

    #[test]
    fn failed_countries_write_stops_before_the_other_files() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should go makes the first create fail.
        fs::create_dir_all(dir.path().join("countries.json")).unwrap();

        let result = ApiData::build(&[country("ITA", "Italy", 12)]).write_to(dir.path());

        assert!(result.is_err());
        assert!(!dir.path().join("macroareas.json").exists());
        assert!(!dir.path().join("stats.json").exists());
    }
}
