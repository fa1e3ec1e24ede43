// crates/journey-core/src/service.rs

//! # Geo Service
//!
//! The facade the HTTP layer talks to. It owns the dataset loader, the globe
//! directory and both caches, and is constructed once per process.

use crate::aggregate::aggregate_macroareas;
use crate::cache::{CacheKey, Clock, ResponseCache, SystemClock, DEFAULT_FRESHNESS};
use crate::error::Result;
use crate::filter::{self, GeoBounds};
use crate::globe::{self, GlobeData};
use crate::loader::{DataPaths, DatasetLoader};
use crate::model::{Country, CountryView, Level, MacroRegion, Theme};
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Macro-regions with the summary block of the `/api/macroareas` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroareaSummary {
    pub macroareas: Vec<MacroRegion>,
    pub total_count: usize,
    pub continents_represented: Vec<u32>,
    pub total_countries: usize,
}

/// A globe document shaped for the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobeResponse {
    #[serde(flatten)]
    pub globe: GlobeData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<CountryView>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub healthy: bool,
    pub data_root: PathBuf,
    pub dataset_sources: BTreeMap<String, bool>,
    pub globe_files: BTreeMap<String, bool>,
    pub cached_responses: usize,
}

#[derive(Debug)]
pub struct GeoService {
    paths: DataPaths,
    loader: DatasetLoader,
    dataset: ResponseCache<(), Arc<Vec<Country>>>,
    globes: ResponseCache<CacheKey, GlobeResponse>,
}

impl GeoService {
    pub fn new(paths: DataPaths) -> Self {
        Self::with_options(paths, DEFAULT_FRESHNESS, Arc::new(SystemClock))
    }

    pub fn with_options(paths: DataPaths, freshness: Duration, clock: Arc<dyn Clock>) -> Self {
        let loader = DatasetLoader::from_paths(&paths);
        GeoService {
            paths,
            loader,
            dataset: ResponseCache::with_clock(freshness, clock.clone()),
            globes: ResponseCache::with_clock(freshness, clock),
        }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// The current dataset, re-read from disk at most once per freshness
    /// window.
    pub fn countries(&self) -> Result<Arc<Vec<Country>>> {
        self.dataset
            .get_or_try_compute((), || self.loader.load().map(Arc::new))
    }

    /// Macro-region aggregates, optionally narrowed by a name search.
    pub fn list_macroareas(&self, search: Option<&str>) -> Result<Vec<MacroRegion>> {
        let countries = self.countries()?;
        let regions = aggregate_macroareas(&countries);
        Ok(filter::by_search(regions, search))
    }

    /// Macro-regions of one continent (or all), with summary counts.
    pub fn list_macroareas_by_continent(
        &self,
        continent_id: Option<u32>,
    ) -> Result<MacroareaSummary> {
        let countries = self.countries()?;
        let macroareas = filter::by_continent(aggregate_macroareas(&countries), continent_id);

        let continents: BTreeSet<u32> = macroareas.iter().map(|m| m.continent_id).collect();
        Ok(MacroareaSummary {
            total_count: macroareas.len(),
            continents_represented: continents.into_iter().collect(),
            total_countries: macroareas.iter().map(|m| m.country_count).sum(),
            macroareas,
        })
    }

    /// Countries in dataset order, filtered by macro-region then search, then
    /// truncated to `limit`.
    pub fn list_countries(
        &self,
        search: Option<&str>,
        macroarea_id: Option<u32>,
        limit: Option<i64>,
    ) -> Result<Vec<CountryView>> {
        let countries = self.countries()?;
        let selected = filter::by_macroarea(countries.as_ref().clone(), macroarea_id);
        let selected = filter::by_search(selected, search);
        let selected = filter::limit(selected, limit);
        Ok(selected.iter().map(CountryView::from).collect())
    }

    /// The globe document of `theme`, cached per (theme, level, bounds).
    ///
    /// Malformed `bounds` are ignored, so they share the unbounded entry.
    pub fn globe(&self, theme: Theme, level: Level, bounds: Option<&str>) -> Result<GlobeResponse> {
        let bounds = GeoBounds::parse_lenient(bounds);
        let key = CacheKey::new(theme, level, bounds.as_ref().map(GeoBounds::cache_key));
        let key_text = key.to_string();

        self.globes.get_or_try_compute(key, || {
            let mut globe = globe::load_globe(&self.paths.globe_dir(), theme)?;

            let countries = match level {
                Level::Countries => Some(self.countries()?.iter().map(CountryView::from).collect()),
                Level::Macroareas => None,
            };

            if let Some(b) = bounds.as_ref() {
                let before = globe.points.len();
                globe.points = filter::by_bounds(std::mem::take(&mut globe.points), Some(b));
                tracing::debug!(theme = %theme, "Bounds kept {}/{} points", globe.points.len(), before);
            }

            annotate(&mut globe.metadata, level, &key_text);
            Ok(GlobeResponse { globe, countries })
        })
    }

    /// Presence of every data file the service reads.
    pub fn health(&self) -> HealthReport {
        let dataset_sources: BTreeMap<String, bool> = self
            .loader
            .sources()
            .iter()
            .map(|s| (s.path().display().to_string(), s.path().exists()))
            .collect();

        let globe_dir = self.paths.globe_dir();
        let globe_files: BTreeMap<String, bool> = Theme::ALL
            .iter()
            .map(|t| {
                let name = t.globe_file_name();
                let exists = globe_dir.join(&name).exists();
                (name, exists)
            })
            .collect();

        let healthy = self.paths.root().is_dir()
            && globe_dir.is_dir()
            && dataset_sources.values().any(|present| *present);

        HealthReport {
            healthy,
            data_root: self.paths.root().to_path_buf(),
            dataset_sources,
            globe_files,
            cached_responses: self.globes.len(),
        }
    }
}

fn annotate(metadata: &mut Map<String, Value>, level: Level, cache_key: &str) {
    metadata.insert("level".into(), Value::from(level.as_str()));
    metadata.insert("requestTime".into(), Value::from(Utc::now().to_rfc3339()));
    metadata.insert("cacheKey".into(), Value::from(cache_key));
}
