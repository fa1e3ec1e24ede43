use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for journey-cli
#[derive(Debug, Parser)]
#[command(
    name = "journey",
    version,
    about = "CLI for querying and rebuilding the journey country/macro-region dataset"
)]
pub struct CliArgs {
    /// Data root holding api-data/, data/ and globe-data/ (default: public)
    #[arg(short = 'd', long = "data-dir", global = true, default_value = "public")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List countries, in dataset order
    Countries {
        /// Case-insensitive substring of the name or code
        #[arg(short, long)]
        search: Option<String>,

        /// Only countries of this macro-region id
        #[arg(short, long)]
        macroarea: Option<u32>,

        /// Maximum rows to print; 0 or less prints everything
        #[arg(short, long, default_value_t = 50, allow_negative_numbers = true)]
        limit: i64,
    },

    /// List macro-regions, sorted by name
    Macroareas {
        /// Case-insensitive substring of the region name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Rebuild countries.json, macroareas.json and stats.json from the CSV
    Build {
        /// Source CSV (default: <data-dir>/data/countries.csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output directory (default: <data-dir>/api-data)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
