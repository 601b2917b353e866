// src/pipeline/graph.rs
//
// The per-session object graph handed over by the dungeon generator. Nodes are
// never added or removed here; stages only swap the reference a node holds.

use std::fmt;
use std::sync::Arc;

use crate::registry::Prefab;

/// Identifies one generated level. A new id means a fresh graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session {}", self.0)
    }
}

/// Handle to a named bucket of spawnable items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemGroup {
    name: Arc<str>,
    id: u32,
}

impl ItemGroup {
    pub fn new(name: impl Into<Arc<str>>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

/// An object spawned on every peer through the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSyncedObject {
    pub spawn_prefab: Prefab,
}

/// A prop spot that picks one of several prefabs at spawn time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomMapObject {
    pub spawnable_prefabs: Vec<Prefab>,
}

/// A spot scrap can appear on, restricted to one item group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomScrapSpawn {
    pub spawnable_items: ItemGroup,
}

/// The generated structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedDungeon {
    /// Name of the flow template the structure was generated from.
    pub flow_name: String,
    pub synced_objects: Vec<SpawnSyncedObject>,
    pub map_objects: Vec<RandomMapObject>,
    pub scrap_spawns: Vec<RandomScrapSpawn>,
}

impl GeneratedDungeon {
    pub fn new(flow_name: impl Into<String>) -> Self {
        Self {
            flow_name: flow_name.into(),
            ..Self::default()
        }
    }
}

/// A scrap item as listed in the level's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name, used to pick donors.
    pub item_name: String,
    /// Asset name.
    pub name: String,
    pub spawn_position_types: Vec<ItemGroup>,
}

impl Item {
    pub fn spawn_position_type(&self, group_name: &str) -> Option<&ItemGroup> {
        self.spawn_position_types
            .iter()
            .find(|g| g.name() == group_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnableItemWithRarity {
    pub spawnable_item: Item,
    pub rarity: i32,
}

/// The moon being played. Its scrap list is final by the time scrap spawns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectableLevel {
    pub planet_name: String,
    pub spawnable_scrap: Vec<SpawnableItemWithRarity>,
}

impl SelectableLevel {
    pub fn find_scrap(&self, item_name: &str) -> Option<&Item> {
        self.spawnable_scrap
            .iter()
            .map(|s| &s.spawnable_item)
            .find(|i| i.item_name == item_name)
    }
}

/// Everything a lifecycle hook receives for one generated level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSession {
    pub id: SessionId,
    pub level: SelectableLevel,
    pub dungeon: GeneratedDungeon,
}

impl LevelSession {
    pub fn new(id: SessionId, level: SelectableLevel, dungeon: GeneratedDungeon) -> Self {
        Self { id, level, dungeon }
    }

    pub fn flow_name(&self) -> &str {
        &self.dungeon.flow_name
    }
}
