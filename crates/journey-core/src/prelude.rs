//! journey-core prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::aggregate::aggregate_macroareas;
pub use crate::cache::{CacheKey, Clock, ResponseCache, SystemClock};
pub use crate::error::{GeoError, Result};
pub use crate::filter::GeoBounds;
pub use crate::globe::{GlobeData, GlobePoint};
pub use crate::loader::{DataPaths, DatasetLoader, DatasetSource};
pub use crate::model::{Country, CountryView, Level, MacroRegion, Theme};
pub use crate::regions::RegionMeta;
pub use crate::service::{GeoService, GlobeResponse, MacroareaSummary};
pub use crate::traits::{Located, SearchMatch};
