use serde::{Deserialize, Serialize};
use std::fs;

/// Initial roster configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub size: usize,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

/// Breeding engine tuning.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BreedingConfig {
    pub mutation_amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub population: PopulationConfig,
    pub breeding: BreedingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            population: PopulationConfig {
                size: 10,
                seed: None,
                deterministic: false,
            },
            breeding: BreedingConfig {
                mutation_amount: crate::genetics::DEFAULT_MUTATION_AMOUNT,
            },
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, falling back to defaults. A
    /// missing file is created with the default contents.
    pub fn load(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        let default = Self::default();
        if let Ok(serialized) = toml::to_string(&default) {
            let _ = fs::write(path, serialized);
        }
        default
    }
}
