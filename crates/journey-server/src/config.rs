use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use journey_core::DataPaths;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub cache_ttl: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: try_load("PORT", "5000")?,
            data_dir: try_load("JOURNEY_DATA_DIR", "public")?,
            cache_ttl: Duration::from_secs(try_load("JOURNEY_CACHE_TTL_SECS", "300")?),
        })
    }

    pub fn data_paths(&self) -> DataPaths {
        DataPaths::new(&self.data_dir)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow::anyhow!("{e}")
        })
        .with_context(|| format!("Environment variable {key} misconfigured: {raw:?}"))
}
