// src/dungeon/descriptor.rs

use crate::level::LevelTypes;

/// Reference to a generated layout template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonFlow {
    pub name: String,
    pub asset_path: String,
}

/// What the selection pool needs to know about a dungeon. Built once at
/// startup and never mutated after it is handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonDescriptor {
    flow: DungeonFlow,
    rarity: u32,
    level_types: LevelTypes,
}

impl DungeonDescriptor {
    /// Returns `None` for an empty moon set: a dungeon that can spawn nowhere
    /// must not be registered.
    pub fn new(flow: DungeonFlow, rarity: u32, level_types: LevelTypes) -> Option<Self> {
        if level_types.is_none() {
            return None;
        }
        Some(Self {
            flow,
            rarity,
            level_types,
        })
    }

    pub fn flow(&self) -> &DungeonFlow {
        &self.flow
    }

    pub fn rarity(&self) -> u32 {
        self.rarity
    }

    pub fn level_types(&self) -> LevelTypes {
        self.level_types
    }
}

/// The host-side pool of dungeons a level may be generated from.
pub trait SelectionPool {
    /// Adds a dungeon to the pool. Returns false, leaving the pool as it was,
    /// if a dungeon with the same flow is already registered.
    fn register(&mut self, descriptor: DungeonDescriptor) -> bool;
}

/// A plain in-memory selection pool.
#[derive(Debug, Default)]
pub struct DungeonPool {
    dungeons: Vec<DungeonDescriptor>,
}

impl DungeonPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dungeons(&self) -> &[DungeonDescriptor] {
        &self.dungeons
    }

    /// Dungeons eligible on any of the given moons.
    pub fn candidates_for(&self, moon: LevelTypes) -> impl Iterator<Item = &DungeonDescriptor> {
        self.dungeons
            .iter()
            .filter(move |d| d.level_types().intersects(moon))
    }

    /// Sum of the weights competing on a moon.
    pub fn total_weight_for(&self, moon: LevelTypes) -> u64 {
        self.candidates_for(moon).map(|d| u64::from(d.rarity())).sum()
    }
}

impl SelectionPool for DungeonPool {
    fn register(&mut self, descriptor: DungeonDescriptor) -> bool {
        if self
            .dungeons
            .iter()
            .any(|d| d.flow().name == descriptor.flow().name)
        {
            return false;
        }
        self.dungeons.push(descriptor);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> DungeonFlow {
        DungeonFlow {
            name: "ExampleFlow".to_string(),
            asset_path: "assets/Example/Flow/ExampleFlow.asset".to_string(),
        }
    }

    #[test]
    fn test_empty_level_types_are_rejected() {
        assert!(DungeonDescriptor::new(flow(), 100, LevelTypes::empty()).is_none());
    }

    #[test]
    fn test_descriptor_keeps_values() {
        let d = DungeonDescriptor::new(flow(), 42, LevelTypes::PAID).unwrap();
        assert_eq!(d.rarity(), 42);
        assert_eq!(d.level_types(), LevelTypes::PAID);
        assert_eq!(d.flow().name, "ExampleFlow");
    }

    fn other_flow() -> DungeonFlow {
        DungeonFlow {
            name: "Level2Flow".to_string(),
            asset_path: "assets/Level2/Flow/Level2Flow.asset".to_string(),
        }
    }

    #[test]
    fn test_pool_rejects_same_flow_twice() {
        let mut pool = DungeonPool::new();
        assert!(pool.register(DungeonDescriptor::new(flow(), 100, LevelTypes::PAID).unwrap()));
        assert!(!pool.register(DungeonDescriptor::new(flow(), 300, LevelTypes::all()).unwrap()));

        assert_eq!(pool.dungeons().len(), 1);
        assert_eq!(pool.dungeons()[0].rarity(), 100);
    }

    #[test]
    fn test_pool_candidates() {
        let mut pool = DungeonPool::new();
        pool.register(DungeonDescriptor::new(flow(), 100, LevelTypes::PAID).unwrap());
        pool.register(DungeonDescriptor::new(other_flow(), 50, LevelTypes::all()).unwrap());

        assert_eq!(pool.candidates_for(LevelTypes::TITAN).count(), 2);
        assert_eq!(pool.candidates_for(LevelTypes::VOW).count(), 1);
        assert_eq!(pool.total_weight_for(LevelTypes::TITAN), 150);
        assert_eq!(pool.total_weight_for(LevelTypes::VOW), 50);
    }
}
