//! journey-cli: inspect and rebuild the journey dataset from a terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ journey-cli stats
//!
//! - List countries, optionally filtered
//!   $ journey-cli countries --search ita
//!   $ journey-cli countries --macroarea 12 --limit 0
//!
//! - List macro-regions
//!   $ journey-cli macroareas --search asia
//!
//! - Regenerate the API data files from the CSV
//!   $ journey-cli build
//!   $ journey-cli build --csv raw.csv --out /tmp/api-data
//!
//! Data source
//! -----------
//!
//! Every command reads from `--data-dir` (default `public`). Queries go
//! through the same loader as the server: `api-data/countries.json` first,
//! `data/countries.csv` when that is missing or unreadable.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use journey_core::loader::builder::ApiData;
use journey_core::loader::CsvSource;
use journey_core::{DataPaths, DatasetLoader, GeoService};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let paths = DataPaths::new(&args.data_dir);

    match args.command {
        Commands::Stats => {
            let service = GeoService::new(paths);
            let countries = service.countries()?;
            let stats = ApiData::build(&countries).stats;
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.total_countries);
            println!("  Macro-regions: {}", stats.total_macroareas);
            println!("  Continents: {}", stats.continents.join(", "));
        }

        Commands::Countries {
            search,
            macroarea,
            limit,
        } => {
            let service = GeoService::new(paths);
            let views = service.list_countries(search.as_deref(), macroarea, Some(limit))?;
            if views.is_empty() {
                println!("No countries found");
            }
            for v in views {
                println!(
                    "{} ({}) - {}, {}",
                    v.country.name(),
                    v.country.code(),
                    v.macroarea_name,
                    v.continent_name
                );
            }
        }

        Commands::Macroareas { search } => {
            let service = GeoService::new(paths);
            let regions = service.list_macroareas(search.as_deref())?;
            if regions.is_empty() {
                println!("No macro-regions found");
            }
            for r in regions {
                println!(
                    "[{}] {} ({}): {} countries",
                    r.id,
                    r.name(),
                    r.continent,
                    r.country_count
                );
            }
        }

        Commands::Build { csv, out } => {
            let csv = csv.unwrap_or_else(|| paths.countries_csv());
            let out = out.unwrap_or_else(|| paths.api_data_dir());

            let loader = DatasetLoader::new(vec![Box::new(CsvSource::new(&csv))]);
            let countries = loader
                .load()
                .with_context(|| format!("reading {}", csv.display()))?;

            let data = ApiData::build(&countries);
            let written = data
                .write_to(&out)
                .with_context(|| format!("writing into {}", out.display()))?;

            println!(
                "Processed {} countries into {} macro-regions",
                data.stats.total_countries, data.stats.total_macroareas
            );
            for path in written {
                println!("  wrote {}", path.display());
            }
        }
    }

    Ok(())
}
