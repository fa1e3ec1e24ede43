// crates/journey-core/src/loader/delimited.rs
use super::common_io;
use super::DatasetSource;
use crate::error::Result;
use crate::model::{Country, CountryRaw};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// **Fallback source:** the hand-maintained `countries.csv`.
///
/// Every field is trimmed and the two ids are parsed as integers. Rows whose
/// ids do not parse are reported and skipped rather than failing the file.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSource { path: path.into() }
    }
}

/// One CSV row before coercion. Ids stay text so a bad row can be skipped.
#[derive(Debug, Deserialize)]
struct CsvRow {
    country_code: String,
    country_description: String,
    macroarea_id: String,
    continent_id: String,
    #[serde(rename = "centerLat", default)]
    center_lat: Option<String>,
    #[serde(rename = "centerLng", default)]
    center_lng: Option<String>,
}

impl CsvRow {
    fn coerce(self) -> std::result::Result<CountryRaw, String> {
        let macroarea_id = self
            .macroarea_id
            .parse::<u32>()
            .map_err(|e| format!("macroarea_id {:?}: {e}", self.macroarea_id))?;
        let continent_id = self
            .continent_id
            .parse::<u32>()
            .map_err(|e| format!("continent_id {:?}: {e}", self.continent_id))?;

        Ok(CountryRaw {
            country_code: self.country_code,
            country_description: self.country_description,
            macroarea_id,
            continent_id,
            center_lat: parse_opt_f64(self.center_lat.as_deref()),
            center_lng: parse_opt_f64(self.center_lng.as_deref()),
        })
    }
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
}

/// Parses CSV text from any reader. Split out from [`CsvSource`] so the
/// coercion rules can be tested without touching the filesystem.
pub fn parse_countries<R: std::io::Read>(reader: R) -> Result<Vec<Country>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut countries = Vec::new();
    let mut skipped = 0usize;

    for (line, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            // A failing reader would keep failing; give up on the file.
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                skipped += 1;
                tracing::warn!("Skipping CSV row {}: {}", line + 2, e);
                continue;
            }
        };

        match row.coerce() {
            Ok(raw) => countries.push(Country::from(raw)),
            Err(reason) => {
                skipped += 1;
                tracing::warn!("Skipping CSV row {}: {}", line + 2, reason);
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("CSV parsing skipped {} malformed rows", skipped);
    }
    Ok(countries)
}

impl DatasetSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Country>> {
        let reader = common_io::open_stream(&self.path)?;
        parse_countries(reader)
    }
}
