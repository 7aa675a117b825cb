use std::path::PathBuf;

use crate::error::{config::ConfigError, FactoryError};

const DEFAULT_SEED_COUNT: u64 = 3;

pub struct Config {
    pub database_url: String,

    /// Root directory for file and image fields.
    pub media_root: PathBuf,

    /// Number of sequence-driven rows the seed binary creates per factory.
    pub seed_count: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, FactoryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `var` - Returns the value of a variable, or `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(FactoryError::ConfigErr)` - A required variable is missing or `SEED_COUNT`
    ///   is not an unsigned integer
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, FactoryError> {
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            media_root: PathBuf::from(required("MEDIA_ROOT")?),
            seed_count: match var("SEED_COUNT") {
                Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "SEED_COUNT".to_string(),
                    value,
                })?,
                None => DEFAULT_SEED_COUNT,
            },
        })
    }
}
