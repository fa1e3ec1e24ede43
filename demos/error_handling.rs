//! Error handling example for journey-core
//!
//! This example demonstrates the error cases callers are expected to handle

use journey_core::prelude::*;

fn main() -> Result<()> {
    println!("=== journey-core Error Handling Example ===\n");

    // Example 1: No dataset source available
    println!("--- Example 1: Loading from an empty data root ---");
    let empty = std::env::temp_dir().join("journey-demo-empty");
    let service = GeoService::new(DataPaths::new(&empty));
    match service.countries() {
        Ok(countries) => println!("  Loaded {} countries", countries.len()),
        Err(e) => println!("  Dataset unavailable: {e}"),
    }
    println!();

    // Example 2: Invalid level and theme values
    println!("--- Example 2: Parsing request parameters ---");
    for raw in ["countries", "MACROAREAS", "cities"] {
        match raw.parse::<Level>() {
            Ok(level) => println!("  level {raw:?} -> {level}"),
            Err(e) => println!("  level {raw:?} rejected: {e}"),
        }
    }
    for raw in ["borderscapes", "nature", "volcanoes"] {
        match raw.parse::<Theme>() {
            Ok(theme) => println!("  theme {raw:?} -> {}", theme.as_str()),
            Err(e) => println!("  theme {raw:?} rejected (client error: {})", e.is_client_error()),
        }
    }
    println!();

    // Example 3: Bounds are strict on their own, lenient inside a request
    println!("--- Example 3: Geographic bounds ---");
    let raw = r#"{"north":60,"south":35,"east":30,"west":-10}"#;
    let bounds = GeoBounds::parse(raw)?;
    println!("  parsed: {}", bounds.cache_key());
    if let Err(e) = GeoBounds::parse("not json") {
        println!("  strict parse failed: {e}");
    }
    println!(
        "  lenient parse of garbage: {:?}",
        GeoBounds::parse_lenient(Some("not json"))
    );
    println!();

    // Example 4: Unknown macro-region ids still resolve
    println!("--- Example 4: Unknown macro-region ---");
    let country = Country::from(journey_core::model::CountryRaw {
        country_code: "XXX".into(),
        country_description: "Nowhere".into(),
        macroarea_id: 999,
        continent_id: 0,
        center_lat: None,
        center_lng: None,
    });
    let view = CountryView::from(&country);
    println!(
        "  {} -> {} / {} at ({}, {})",
        country.code(),
        view.macroarea_name,
        view.continent_name,
        country.center_lat,
        country.center_lng
    );

    Ok(())
}
