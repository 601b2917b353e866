// src/level/mod.rs
mod level_types;
mod resolver;

pub use level_types::LevelTypes;
pub use resolver::{resolve, MoonPreset};
