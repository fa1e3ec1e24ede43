// crates/journey-core/src/traits.rs
use crate::globe::GlobePoint;
use crate::model::{Country, CountryView, MacroRegion};

/// Search-term matching for records that expose a display name.
///
/// Implementors provide the canonical name via [`SearchMatch::name_str`] and,
/// optionally, extra keys (a country code) via [`SearchMatch::search_keys`].
/// Matching is a case-insensitive substring test on any of them.
///
/// # Examples
/// ```rust
/// use journey_core::traits::SearchMatch;
///
/// struct Place(&'static str);
/// impl SearchMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Italian Peninsula").matches_search("PENIN"));
/// assert!(!Place("Balkans").matches_search("alps"));
/// ```
pub trait SearchMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Additional keys matched alongside the name.
    fn search_keys(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Case-insensitive substring match on the name or any extra key.
    ///
    /// The term is expected to be non-empty; callers treat an empty term as
    /// "no filter" before reaching this.
    fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name_str().to_lowercase().contains(&needle)
            || self
                .search_keys()
                .iter()
                .any(|k| k.to_lowercase().contains(&needle))
    }
}

/// Anything with a latitude/longitude position.
pub trait Located {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl SearchMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn search_keys(&self) -> Vec<&str> {
        vec![&self.code]
    }
}

impl SearchMatch for CountryView {
    fn name_str(&self) -> &str {
        self.country.name_str()
    }

    fn search_keys(&self) -> Vec<&str> {
        self.country.search_keys()
    }
}

impl SearchMatch for MacroRegion {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl Located for Country {
    fn lat(&self) -> f64 {
        self.center_lat
    }

    fn lng(&self) -> f64 {
        self.center_lng
    }
}

impl Located for MacroRegion {
    fn lat(&self) -> f64 {
        self.center_lat
    }

    fn lng(&self) -> f64 {
        self.center_lng
    }
}

impl Located for GlobePoint {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}
