use anyhow::{Context, Result};
use std::env;
use tracing::{info, warn};

/// Runtime knobs for the ingestion pipeline, loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub max_file_size_mb: usize,
    pub max_batch_files: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Config {
            max_file_size_mb: Self::parse_env_var("MAX_FILE_SIZE_MB", 10)
                .context("Failed to parse MAX_FILE_SIZE_MB")?,
            max_batch_files: Self::parse_env_var("MAX_BATCH_FILES", 50)
                .context("Failed to parse MAX_BATCH_FILES")?,
        };

        config.validate()?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr + Copy + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => match val.parse() {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!(
                        "Failed to parse {}: {} (using default: {:?})",
                        var_name, e, default
                    );
                    Ok(default)
                }
            },
            Err(_) => {
                info!("{} not set, using default: {:?}", var_name, default);
                Ok(default)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_file_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }
        if self.max_batch_files == 0 {
            return Err(anyhow::anyhow!("MAX_BATCH_FILES must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_file_size_mb: 10,
            max_batch_files: 50,
        }
    }
}
