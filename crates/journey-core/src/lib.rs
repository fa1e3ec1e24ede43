// crates/journey-core/src/lib.rs

//! # journey-core
//!
//! Geographic data layer behind the journey globe API: loads the flat
//! country dataset, aggregates it into curated macro-regions, filters by
//! search term / bounding box / region, and memoises responses for a
//! freshness window.
//!
//! ```no_run
//! use journey_core::{DataPaths, GeoService};
//!
//! let service = GeoService::new(DataPaths::new("public"));
//! for region in service.list_macroareas(Some("europe")).unwrap() {
//!     println!("{} ({} countries)", region.name, region.country_count);
//! }
//! ```

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod filter;
pub mod globe;
pub mod loader;
pub mod model;
pub mod regions;
pub mod service;
pub mod traits;

pub mod prelude;

// Re-exports
pub use crate::aggregate::aggregate_macroareas;
pub use crate::cache::{CacheKey, ResponseCache};
pub use crate::error::{GeoError, Result};
pub use crate::filter::GeoBounds;
pub use crate::loader::{DataPaths, DatasetLoader};
pub use crate::model::{Country, CountryView, Level, MacroRegion, Theme};
pub use crate::service::GeoService;
