// src/config/dungeon_config.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use super::{DEFAULT_MOONS, DEFAULT_RARITY, GUARANTEED_WEIGHT, RARITY_MAX, RARITY_MIN};
use crate::level::MoonPreset;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config file {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The `General` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeneralSection {
    /// How rare it is for the dungeon to be chosen. Higher values increase
    /// the chance of the dungeon being picked.
    pub rarity: i32,
    /// The moon(s) the dungeon can spawn on, from the given presets.
    pub moons: String,
    /// If enabled, the dungeon is effectively guaranteed to spawn. Only
    /// meant for debugging and sightseeing.
    pub guaranteed: bool,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            rarity: DEFAULT_RARITY,
            moons: DEFAULT_MOONS.to_string(),
            guaranteed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    #[serde(rename = "General", default)]
    pub general: GeneralSection,
}

impl DungeonConfig {
    /// Loads the config at `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            info!("Created default config at {}", path.display());
            return Ok(config);
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a config from JSON and brings its values into range.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut config: DungeonConfig = serde_json::from_str(text)?;
        config.sanitize();
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(io_err)
    }

    /// Clamps `Rarity` into its accepted range. An unknown `Moons` value is
    /// only reported here; it is rejected when the moons are resolved.
    pub fn sanitize(&mut self) {
        let rarity = self.general.rarity.clamp(RARITY_MIN, RARITY_MAX);
        if rarity != self.general.rarity {
            warn!(
                "Rarity {} is outside {}..={}, using {}",
                self.general.rarity, RARITY_MIN, RARITY_MAX, rarity
            );
            self.general.rarity = rarity;
        }

        if !Self::is_known_moon_key(&self.general.moons) {
            warn!(
                "Moons \"{}\" is not one of the presets: {}",
                self.general.moons,
                Self::acceptable_moons().join(", ")
            );
        }
    }

    pub fn acceptable_moons() -> Vec<&'static str> {
        MoonPreset::iter().map(<&'static str>::from).collect()
    }

    fn is_known_moon_key(key: &str) -> bool {
        key.to_lowercase().parse::<MoonPreset>().is_ok()
    }

    pub fn rarity(&self) -> i32 {
        self.general.rarity
    }

    pub fn moons(&self) -> &str {
        &self.general.moons
    }

    pub fn guaranteed(&self) -> bool {
        self.general.guaranteed
    }

    /// The weight handed to the selection pool.
    pub fn selection_weight(&self) -> u32 {
        if self.general.guaranteed {
            GUARANTEED_WEIGHT
        } else {
            u32::try_from(self.general.rarity).unwrap_or(0)
        }
    }
}
