// src/config/mod.rs
mod dungeon_config;

pub use dungeon_config::{ConfigError, DungeonConfig, GeneralSection};

/// Lowest accepted `Rarity`.
pub const RARITY_MIN: i32 = 0;
/// Highest accepted `Rarity`.
pub const RARITY_MAX: i32 = 300;
pub const DEFAULT_RARITY: i32 = 100;
pub const DEFAULT_MOONS: &str = "all";

/// Selection weight used when `Guaranteed` is set. Far above anything a
/// competing dungeon can be configured with.
pub const GUARANTEED_WEIGHT: u32 = 99999;

/// Name of the config file written next to the binary.
pub const CONFIG_FILE_NAME: &str = "LethalDungeon.cfg.json";
