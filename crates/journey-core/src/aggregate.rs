// crates/journey-core/src/aggregate.rs
use crate::model::{Country, MacroRegion};
use crate::regions;
use std::collections::HashMap;

/// Groups countries into macro-region aggregates.
///
/// Output is ordered by display name (case-insensitive), ties broken by id.
/// Region ids missing from the reference table get a `Macroarea {id}`
/// placeholder. Pure: the same input always yields the same output.
pub fn aggregate_macroareas(countries: &[Country]) -> Vec<MacroRegion> {
    let mut index: HashMap<u32, usize> = HashMap::new();
    let mut out: Vec<MacroRegion> = Vec::new();

    for country in countries {
        let slot = *index.entry(country.macroarea_id).or_insert_with(|| {
            let meta = regions::lookup(country.macroarea_id);
            out.push(MacroRegion {
                id: country.macroarea_id,
                name: meta.name,
                continent: meta.continent,
                continent_id: country.continent_id,
                center_lat: meta.center_lat,
                center_lng: meta.center_lng,
                countries: Vec::new(),
                country_count: 0,
            });
            out.len() - 1
        });

        let region = &mut out[slot];
        region.countries.push(country.code.clone());
        region.country_count += 1;
    }

    out.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.id.cmp(&b.id))
    });
    out
}
