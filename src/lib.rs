// src/lib.rs

pub mod config;
pub mod dungeon;
pub mod level;
pub mod pipeline;
pub mod plugin;
pub mod registry;
