//! Advanced filtering example for journey-core
//!
//! Works on an in-memory dataset: aggregation, search, bounds and the
//! response cache, without touching the filesystem.

use journey_core::filter;
use journey_core::model::CountryRaw;
use journey_core::prelude::*;
use std::time::Duration;

fn country(code: &str, name: &str, macroarea_id: u32, continent_id: u32) -> Country {
    Country::from(CountryRaw {
        country_code: code.into(),
        country_description: name.into(),
        macroarea_id,
        continent_id,
        center_lat: None,
        center_lng: None,
    })
}

fn main() -> Result<()> {
    println!("=== journey-core Advanced Filtering Example ===\n");

    let countries = vec![
        country("ITA", "Italy", 12, 3),
        country("FRA", "France", 10, 3),
        country("DEU", "Germany", 10, 3),
        country("JPN", "Japan", 37, 4),
        country("KOR", "South Korea", 37, 4),
    ];

    // Example 1: Aggregate
    println!("--- Example 1: Macro-regions ---");
    let regions = aggregate_macroareas(&countries);
    for r in &regions {
        println!("- [{}] {}: {}", r.id, r.name(), r.countries.join(", "));
    }
    println!();

    // Example 2: Continent filter
    println!("--- Example 2: Macro-regions of continent 4 ---");
    for r in filter::by_continent(regions.clone(), Some(4)) {
        println!("- {} ({} countries)", r.name(), r.country_count);
    }
    println!();

    // Example 3: Search then limit
    println!("--- Example 3: Search 'a', limit 2 ---");
    let found = filter::limit(filter::by_search(countries.clone(), Some("a")), Some(2));
    for c in &found {
        println!("- {} ({})", c.name(), c.code());
    }
    println!();

    // Example 4: Bounding box over country centers
    println!("--- Example 4: Countries centered in Europe ---");
    let europe = GeoBounds::parse(r#"{"north":72,"south":34,"east":45,"west":-25}"#)?;
    for c in filter::by_bounds(countries.clone(), Some(&europe)) {
        println!("- {} at ({}, {})", c.name(), c.center_lat, c.center_lng);
    }
    println!();

    // Example 5: Response cache
    println!("--- Example 5: Response cache ---");
    let cache: ResponseCache<CacheKey, usize> = ResponseCache::new(Duration::from_secs(300));
    let key = CacheKey::new(Theme::Borderscapes, Level::Macroareas, None);
    let first = cache.get_or_compute(key.clone(), || regions.len());
    let second = cache.get_or_compute(key.clone(), || unreachable!("served from cache"));
    println!("  {key}: {first} then {second} ({} entries)", cache.len());

    Ok(())
}
