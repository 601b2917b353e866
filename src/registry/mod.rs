// src/registry/mod.rs
mod prefab;

pub use prefab::{NetworkPrefabList, Prefab, PrefabRegistry};
