// src/registry/prefab.rs

use std::fmt;
use std::sync::Arc;

/// A handle to a spawnable object. Placeholders emitted by the generator and
/// the real, network-registered prefabs are both `Prefab`s; only the name and
/// id tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefab {
    name: Arc<str>,
    network_id: u32,
}

impl Prefab {
    pub fn new(name: impl Into<Arc<str>>, network_id: u32) -> Self {
        Self {
            name: name.into(),
            network_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn network_id(&self) -> u32 {
        self.network_id
    }
}

impl fmt::Display for Prefab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.network_id)
    }
}

/// Lookup over the host's catalog of canonical prefabs.
///
/// A miss is not an error at this level. Each pipeline stage decides what a
/// missing prefab means for its own work.
pub trait PrefabRegistry {
    fn find_canonical(&self, stable_name: &str) -> Option<Prefab>;
}

/// The fixed list of network prefabs the host registers before any level is
/// generated.
#[derive(Debug, Clone, Default)]
pub struct NetworkPrefabList {
    prefabs: Vec<Prefab>,
}

impl NetworkPrefabList {
    pub fn new(prefabs: Vec<Prefab>) -> Self {
        Self { prefabs }
    }
}

impl FromIterator<Prefab> for NetworkPrefabList {
    fn from_iter<I: IntoIterator<Item = Prefab>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PrefabRegistry for NetworkPrefabList {
    fn find_canonical(&self, stable_name: &str) -> Option<Prefab> {
        self.prefabs.iter().find(|p| p.name() == stable_name).cloned()
    }
}

impl<R: PrefabRegistry + ?Sized> PrefabRegistry for Arc<R> {
    fn find_canonical(&self, stable_name: &str) -> Option<Prefab> {
        (**self).find_canonical(stable_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> NetworkPrefabList {
        vec![
            Prefab::new("VentEntrance", 11),
            Prefab::new("EntranceTeleportA", 12),
            Prefab::new("EntranceTeleportB", 13),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_find_exact_match() {
        let found = catalog().find_canonical("EntranceTeleportB").unwrap();
        assert_eq!(found.network_id(), 13);
        assert_eq!(found.name(), "EntranceTeleportB");
    }

    #[test]
    fn test_find_requires_exact_name() {
        let registry = catalog();
        assert!(registry.find_canonical("ventEntrance").is_none());
        assert!(registry.find_canonical("Vent").is_none());
        assert!(registry.find_canonical("").is_none());
    }

    #[test]
    fn test_find_first_of_duplicates() {
        let registry: NetworkPrefabList =
            vec![Prefab::new("Landmine", 1), Prefab::new("Landmine", 2)]
                .into_iter()
                .collect();
        assert_eq!(registry.find_canonical("Landmine").unwrap().network_id(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let registry = NetworkPrefabList::default();
        assert!(registry.find_canonical("VentEntrance").is_none());
    }

    #[test]
    fn test_arc_registry_delegates() {
        let registry: Arc<dyn PrefabRegistry + Send + Sync> = Arc::new(catalog());
        assert!(registry.find_canonical("VentEntrance").is_some());
    }
}
