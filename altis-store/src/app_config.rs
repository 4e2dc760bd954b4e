use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub seating: SeatingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one `flight_{id}_seats.json` per generated seat map
    pub data_dir: String,
    pub flights_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatingConfig {
    #[serde(default = "default_occupancy_ratio")]
    pub occupancy_ratio: f64,
    /// Fixes the occupancy draw; entropy-seeded when absent
    pub occupancy_seed: Option<u64>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            occupancy_ratio: default_occupancy_ratio(),
            occupancy_seed: None,
        }
    }
}

fn default_occupancy_ratio() -> f64 { altis_seating::generator::DEFAULT_OCCUPANCY_RATIO }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `ALTIS__SEATING__OCCUPANCY_SEED=7`
            .add_source(environment())
            .build()?;

        s.try_deserialize()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("ALTIS")
        .separator("__")
        .try_parsing(true)
}
