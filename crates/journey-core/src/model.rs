// crates/journey-core/src/model.rs
use crate::error::{GeoError, Result};
use crate::regions::{self, RegionMeta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw country row as it comes from `countries.json` or the CSV fallback.
///
/// Extra fields written by the builder (`macroarea_name`, `continent_name`)
/// are ignored on the way back in.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub country_code: String,
    pub country_description: String,
    pub macroarea_id: u32,
    pub continent_id: u32,
    #[serde(rename = "centerLat", default)]
    pub center_lat: Option<f64>,
    #[serde(rename = "centerLng", default)]
    pub center_lng: Option<f64>,
}

/// A country entry.
///
/// Never mutated after loading; aggregates and views derive fresh values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "country_code")]
    pub code: String,
    #[serde(rename = "country_description")]
    pub name: String,
    pub macroarea_id: u32,
    pub continent_id: u32,
    #[serde(rename = "centerLat")]
    pub center_lat: f64,
    #[serde(rename = "centerLng")]
    pub center_lng: f64,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Static metadata of the macro-region this country belongs to.
    pub fn region(&self) -> RegionMeta {
        regions::lookup(self.macroarea_id)
    }
}

impl From<CountryRaw> for Country {
    /// Missing centers fall back to the center of the country's macro-region.
    fn from(raw: CountryRaw) -> Self {
        let meta = regions::lookup(raw.macroarea_id);
        Country {
            code: raw.country_code,
            name: raw.country_description,
            macroarea_id: raw.macroarea_id,
            continent_id: raw.continent_id,
            center_lat: raw.center_lat.unwrap_or(meta.center_lat),
            center_lng: raw.center_lng.unwrap_or(meta.center_lng),
        }
    }
}

/// A country enriched with the names of its macro-region and continent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryView {
    #[serde(flatten)]
    pub country: Country,
    pub macroarea_name: String,
    pub continent_name: String,
}

impl From<&Country> for CountryView {
    fn from(country: &Country) -> Self {
        let meta = country.region();
        CountryView {
            country: country.clone(),
            macroarea_name: meta.name,
            continent_name: meta.continent,
        }
    }
}

/// A macro-region aggregate, rebuilt from the country set on every call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroRegion {
    pub id: u32,
    pub name: String,
    pub continent: String,
    /// Continent id of the first member seen.
    pub continent_id: u32,
    pub center_lat: f64,
    pub center_lng: f64,
    /// Member country codes in first-seen order.
    pub countries: Vec<String>,
    pub country_count: usize,
}

impl MacroRegion {
    pub fn name(&self) -> &str {
        &self.name
    }
}

// -----------------------------------------------------------------------------
// Query enumerations
// -----------------------------------------------------------------------------

/// Requested granularity of geographic data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Countries,
    Macroareas,
}

impl Level {
    pub const VALID: [&'static str; 2] = ["countries", "macroareas"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Countries => "countries",
            Level::Macroareas => "macroareas",
        }
    }
}

impl FromStr for Level {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "countries" => Ok(Level::Countries),
            "macroareas" => Ok(Level::Macroareas),
            _ => Err(GeoError::invalid_parameter("level", s, &Self::VALID)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four curated content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Borders.
    Borderscapes,
    /// Nature.
    Wildrealms,
    /// Culture.
    Livingtraditions,
    /// Geology.
    Mindscapes,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Borderscapes,
        Theme::Wildrealms,
        Theme::Livingtraditions,
        Theme::Mindscapes,
    ];

    pub const VALID: [&'static str; 4] =
        ["borderscapes", "wildrealms", "livingtraditions", "mindscapes"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Borderscapes => "borderscapes",
            Theme::Wildrealms => "wildrealms",
            Theme::Livingtraditions => "livingtraditions",
            Theme::Mindscapes => "mindscapes",
        }
    }

    /// Name of the globe document for this theme, e.g. `BS-globe.json`.
    pub fn globe_file_name(&self) -> String {
        let prefix = match self {
            Theme::Borderscapes => "BS",
            Theme::Wildrealms => "WR",
            Theme::Livingtraditions => "LT",
            Theme::Mindscapes => "MS",
        };
        format!("{prefix}-globe.json")
    }
}

impl FromStr for Theme {
    type Err = GeoError;

    /// Accepts the theme slug or its category name (`borders`, `nature`,
    /// `culture`, `geology`), case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "borderscapes" | "borders" => Ok(Theme::Borderscapes),
            "wildrealms" | "nature" => Ok(Theme::Wildrealms),
            "livingtraditions" | "culture" => Ok(Theme::Livingtraditions),
            "mindscapes" | "geology" => Ok(Theme::Mindscapes),
            _ => Err(GeoError::invalid_parameter("theme", s, &Self::VALID)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
