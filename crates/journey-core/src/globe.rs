// crates/journey-core/src/globe.rs

//! Per-theme globe documents (`BS-globe.json` and friends).
//!
//! Only `points` (and their `lat` / `lng`) are interpreted; every other
//! attribute is carried through to the response untouched.

use crate::error::{GeoError, Result};
use crate::loader::common_io;
use crate::model::Theme;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A point of interest on a globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobePoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A theme's globe document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobeData {
    #[serde(default)]
    pub points: Vec<GlobePoint>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads the globe document of `theme` from `globe_dir`.
pub fn load_globe(globe_dir: &Path, theme: Theme) -> Result<GlobeData> {
    let path = globe_dir.join(theme.globe_file_name());
    let reader = common_io::open_stream(&path)?;
    serde_json::from_reader(reader).map_err(|e| {
        GeoError::DataUnavailable(format!(
            "Failed to load globe data for theme {theme}: {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_attributes_survive_a_round_trip() {
        let doc = json!({
            "theme": "borderscapes",
            "globeConfig": { "landColor": "#C49B92" },
            "points": [
                { "lat": 45.8, "lng": 6.9, "name": "Mont Blanc", "size": 0.4 }
            ],
            "metadata": { "version": 2 }
        });

        let globe: GlobeData = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(globe.points.len(), 1);
        assert_eq!(globe.points[0].extra["name"], "Mont Blanc");
        assert_eq!(globe.metadata["version"], 2);
        assert_eq!(serde_json::to_value(&globe).unwrap(), doc);
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_globe(dir.path(), Theme::Mindscapes).unwrap_err();
        assert!(matches!(err, GeoError::DataUnavailable(_)));
    }
}
