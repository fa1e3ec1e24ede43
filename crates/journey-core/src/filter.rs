// crates/journey-core/src/filter.rs

//! Composable query predicates: text search, bounding box, region and limit.
//!
//! None of these fail. Degenerate input yields an empty or unchanged result.

use crate::error::{GeoError, Result};
use crate::model::{Country, MacroRegion};
use crate::traits::{Located, SearchMatch};
use serde::{Deserialize, Serialize};

/// A rectangular latitude/longitude window, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Strict parse of a JSON object with numeric `north`, `south`, `east`,
    /// `west`.
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| GeoError::MalformedBounds(format!("{raw}: {e}")))
    }

    /// Permissive parse: malformed input behaves as if no bounds were given.
    pub fn parse_lenient(raw: Option<&str>) -> Option<Self> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        match Self::parse(raw) {
            Ok(bounds) => Some(bounds),
            Err(e) => {
                tracing::warn!("Ignoring bounds: {e}");
                None
            }
        }
    }

    /// Inclusive on every edge. Inverted boxes are taken literally and
    /// contain nothing.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    /// Stable textual form used in cache keys.
    pub fn cache_key(&self) -> String {
        format!("{},{},{},{}", self.north, self.south, self.east, self.west)
    }
}

/// Keeps records matching `term`; an absent or blank term keeps everything.
pub fn by_search<T: SearchMatch>(items: Vec<T>, term: Option<&str>) -> Vec<T> {
    match term.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => items.into_iter().filter(|i| i.matches_search(t)).collect(),
        None => items,
    }
}

/// Keeps points inside `bounds`; `None` keeps everything.
pub fn by_bounds<T: Located>(items: Vec<T>, bounds: Option<&GeoBounds>) -> Vec<T> {
    match bounds {
        Some(b) => items
            .into_iter()
            .filter(|p| b.contains(p.lat(), p.lng()))
            .collect(),
        None => items,
    }
}

/// Keeps countries of the given macro-region.
pub fn by_macroarea(countries: Vec<Country>, macroarea_id: Option<u32>) -> Vec<Country> {
    match macroarea_id {
        Some(id) => countries
            .into_iter()
            .filter(|c| c.macroarea_id == id)
            .collect(),
        None => countries,
    }
}

/// Keeps macro-regions whose continent id matches.
pub fn by_continent(regions: Vec<MacroRegion>, continent_id: Option<u32>) -> Vec<MacroRegion> {
    match continent_id {
        Some(id) => regions
            .into_iter()
            .filter(|r| r.continent_id == id)
            .collect(),
        None => regions,
    }
}

/// Truncates to at most `limit` entries. Non-positive or absent means no
/// truncation.
pub fn limit<T>(mut items: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(n) = limit.filter(|n| *n > 0) {
        items.truncate(usize::try_from(n).unwrap_or(usize::MAX));
    }
    items
}
