// src/plugin/mod.rs
mod startup;

pub use startup::{LethalDungeon, Registration, StartupError};

pub const PLUGIN_GUID: &str = "LethalDungeon";
pub const PLUGIN_NAME: &str = "LethalDungeon";
pub const PLUGIN_VERSION: &str = "1.0.0";
