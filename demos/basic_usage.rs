//! Basic usage example for journey-core
//!
//! This example demonstrates how to:
//! - Load the country dataset through the service
//! - Aggregate countries into macro-regions
//! - Filter countries by search term, macro-region and limit
//!
//! Run with a data root containing `api-data/countries.json` or
//! `data/countries.csv`:
//!
//! ```text
//! cargo run --example basic_usage -- ./public
//! ```

use journey_core::prelude::*;

fn main() -> Result<()> {
    println!("=== journey-core Basic Usage Example ===\n");

    let root = std::env::args().nth(1).unwrap_or_else(|| "public".to_string());
    let service = GeoService::new(DataPaths::new(&root));

    // Example 1: Load the dataset
    println!("--- Example 1: Load countries from {root} ---");
    let countries = service.countries()?;
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.code());
    }
    println!();

    // Example 2: Macro-regions, sorted by name
    println!("--- Example 2: Macro-regions ---");
    let regions = service.list_macroareas(None)?;
    for region in regions.iter().take(10) {
        println!(
            "- {} ({}): {} countries",
            region.name(),
            region.continent,
            region.country_count
        );
    }
    println!();

    // Example 3: Search countries
    println!("--- Example 3: Countries matching 'land' ---");
    for view in service.list_countries(Some("land"), None, Some(10))? {
        println!("- {} in {}", view.country.name(), view.macroarea_name);
    }
    println!();

    // Example 4: Countries of one macro-region
    println!("--- Example 4: Countries of macro-region 12 ---");
    for view in service.list_countries(None, Some(12), None)? {
        println!("- {} ({})", view.country.name(), view.country.code());
    }

    Ok(())
}
