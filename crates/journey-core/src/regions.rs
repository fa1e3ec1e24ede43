// crates/journey-core/src/regions.rs

//! # Region Reference Table
//!
//! Static metadata for the hand-curated macro-regions: display name,
//! continent and an approximate center. The table is built once per process
//! and never mutated.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Static metadata for one macro-region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMeta {
    pub name: String,
    pub continent: String,
    pub center_lat: f64,
    pub center_lng: f64,
}

/// Continent name used for ids missing from the table.
pub const UNKNOWN_CONTINENT: &str = "Unknown";

// (id, name, continent, center_lat, center_lng)
const REGIONS: &[(u32, &str, &str, f64, f64)] = &[
    (1, "North America", "North America", 45.0, -100.0),
    (2, "Central America", "North America", 15.0, -90.0),
    (3, "Northern South America", "South America", 5.0, -60.0),
    (4, "Caribbean", "North America", 20.0, -75.0),
    (5, "Lesser Antilles", "North America", 15.0, -62.0),
    (6, "Andean South America", "South America", -15.0, -70.0),
    (7, "Brazil & Guianas", "South America", -10.0, -55.0),
    (8, "Southern Cone", "South America", -35.0, -65.0),
    (9, "South Atlantic Islands", "South America", -30.0, -10.0),
    (10, "Western Europe", "Europe", 50.0, 5.0),
    (11, "Southern Europe", "Europe", 40.0, 0.0),
    (12, "Italian Peninsula", "Europe", 42.0, 13.0),
    (13, "Alpine Europe", "Europe", 46.5, 8.0),
    (14, "Central Europe", "Europe", 50.0, 15.0),
    (15, "British Isles", "Europe", 54.0, -4.0),
    (16, "Northern Europe", "Europe", 62.0, 15.0),
    (17, "Baltic States", "Europe", 57.0, 25.0),
    (18, "Eastern Europe", "Europe", 52.0, 35.0),
    (19, "Balkans", "Europe", 43.0, 20.0),
    (20, "North Atlantic Islands", "Europe", 65.0, -18.0),
    (21, "North Africa", "Africa", 25.0, 0.0),
    (22, "Sahel", "Africa", 15.0, 0.0),
    (23, "West Africa", "Africa", 10.0, -10.0),
    (24, "Horn of Africa", "Africa", 10.0, 45.0),
    (25, "East Africa", "Africa", -5.0, 35.0),
    (26, "Central Africa", "Africa", 0.0, 20.0),
    (27, "Southern Africa", "Africa", -25.0, 25.0),
    (28, "Western Indian Ocean", "Africa", -15.0, 55.0),
    (29, "Arabian Peninsula", "Asia", 22.0, 45.0),
    (30, "Levant", "Asia", 33.0, 36.0),
    (31, "Anatolia & Caucasus", "Asia", 40.0, 40.0),
    (32, "South Caucasus", "Asia", 42.0, 45.0),
    (33, "Central Asia", "Asia", 45.0, 65.0),
    (34, "South Asia", "Asia", 20.0, 80.0),
    (35, "Southeast Asia", "Asia", 10.0, 110.0),
    (36, "Maritime Southeast Asia", "Asia", 0.0, 120.0),
    (37, "East Asia", "Asia", 35.0, 110.0),
    (38, "Tibetan Plateau", "Asia", 32.0, 85.0),
    (39, "Australia & New Zealand", "Oceania", -25.0, 135.0),
    (40, "Melanesia", "Oceania", -8.0, 155.0),
    (41, "Micronesia", "Oceania", 7.0, 150.0),
    (42, "Polynesia", "Oceania", -15.0, -150.0),
    (43, "Antarctica & Subantarctic", "Antarctica", -80.0, 0.0),
];

static REGION_TABLE: Lazy<BTreeMap<u32, RegionMeta>> = Lazy::new(|| {
    REGIONS
        .iter()
        .map(|&(id, name, continent, center_lat, center_lng)| {
            (
                id,
                RegionMeta {
                    name: name.to_owned(),
                    continent: continent.to_owned(),
                    center_lat,
                    center_lng,
                },
            )
        })
        .collect()
});

/// The full reference table, ordered by id.
pub fn table() -> &'static BTreeMap<u32, RegionMeta> {
    &REGION_TABLE
}

/// Metadata for a known region id.
pub fn get(id: u32) -> Option<&'static RegionMeta> {
    REGION_TABLE.get(&id)
}

/// Metadata for any region id; unknown ids get a `Macroarea {id}` placeholder.
pub fn lookup(id: u32) -> RegionMeta {
    get(id).cloned().unwrap_or_else(|| placeholder(id))
}

fn placeholder(id: u32) -> RegionMeta {
    RegionMeta {
        name: format!("Macroarea {id}"),
        continent: UNKNOWN_CONTINENT.to_owned(),
        center_lat: 0.0,
        center_lng: 0.0,
    }
}
