use crate::style::{DEFAULT_SIZES, OUTPUT_DIR_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "shield-icons.toml";

/// Generator configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory the icons are written into. Must already exist.
    pub output_dir: PathBuf,
    /// Pixel sizes to generate, in order
    pub sizes: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: crate_root().join(OUTPUT_DIR_NAME),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        crate_root().join(CONFIG_FILE_NAME)
    }

    /// Load configuration from the crate root, or return defaults if the file doesn't exist
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
        }
        log::warn!("Using default configuration");
        Config::default()
    }
}
