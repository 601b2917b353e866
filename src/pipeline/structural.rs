// src/pipeline/structural.rs

use std::collections::HashMap;

use log::{error, info, warn};

use super::graph::GeneratedDungeon;
use super::placeholder::{classify, PlaceholderCategory, PlaceholderKind};
use crate::registry::{Prefab, PrefabRegistry};

/// Outcome of the structural fix-up for one floor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralReport {
    pub entrance_a: usize,
    pub entrance_b: usize,
    pub vents: usize,
    pub storage_shelves: usize,
    /// Synced objects that already held a canonical structural prefab.
    pub already_resolved: usize,
    /// Entrances among `already_resolved`.
    pub entrances_already_resolved: usize,
    /// Categories whose canonical prefab was missing from the registry.
    pub missing_canonical: Vec<PlaceholderCategory>,
    /// Placeholders left in place because their canonical prefab was missing.
    pub unresolved: usize,
}

impl StructuralReport {
    pub fn replaced(&self, category: PlaceholderCategory) -> usize {
        match category {
            PlaceholderCategory::EntranceTeleportA => self.entrance_a,
            PlaceholderCategory::EntranceTeleportB => self.entrance_b,
            PlaceholderCategory::VentEntrance => self.vents,
            PlaceholderCategory::StorageShelf => self.storage_shelves,
            _ => 0,
        }
    }

    pub fn total_replaced(&self) -> usize {
        self.entrance_a + self.entrance_b + self.vents + self.storage_shelves
    }

    /// False when the floor ended up with no entrance at all.
    pub fn playable(&self) -> bool {
        self.entrance_a + self.entrance_b + self.entrances_already_resolved > 0
    }

    fn record(&mut self, category: PlaceholderCategory) {
        match category {
            PlaceholderCategory::EntranceTeleportA => self.entrance_a += 1,
            PlaceholderCategory::EntranceTeleportB => self.entrance_b += 1,
            PlaceholderCategory::VentEntrance => self.vents += 1,
            PlaceholderCategory::StorageShelf => self.storage_shelves += 1,
            _ => {}
        }
    }
}

fn is_entrance(category: PlaceholderCategory) -> bool {
    matches!(
        category,
        PlaceholderCategory::EntranceTeleportA | PlaceholderCategory::EntranceTeleportB
    )
}

/// Swaps entrance, vent and storage shelf dummies for their registered
/// prefabs.
///
/// Each category is resolved on its own: a prefab missing from the registry
/// leaves only that category's dummies in place. A floor without any entrance
/// is reported as unplayable but whatever could be fixed stays fixed.
pub fn fix_structural_objects<R>(registry: &R, dungeon: &mut GeneratedDungeon) -> StructuralReport
where
    R: PrefabRegistry + ?Sized,
{
    let mut report = StructuralReport::default();

    let mut canonical: HashMap<PlaceholderCategory, Prefab> = HashMap::new();
    for category in PlaceholderCategory::of_kind(PlaceholderKind::Structural) {
        match registry.find_canonical(category.canonical_name()) {
            Some(prefab) => {
                canonical.insert(category, prefab);
            }
            None => {
                error!(
                    "Failed to find {} prefab, {} placeholders will not be replaced.",
                    category.canonical_name(),
                    category
                );
                report.missing_canonical.push(category);
            }
        }
    }

    for object in dungeon.synced_objects.iter_mut() {
        let Some(category) = classify(object.spawn_prefab.name()) else {
            if let Some(resolved) = canonical
                .iter()
                .find(|(_, prefab)| **prefab == object.spawn_prefab)
                .map(|(category, _)| *category)
            {
                report.already_resolved += 1;
                if is_entrance(resolved) {
                    report.entrances_already_resolved += 1;
                }
            }
            continue;
        };
        if category.kind() != PlaceholderKind::Structural {
            continue;
        }
        match canonical.get(&category) {
            Some(prefab) => {
                info!("Found and replaced {} prefab.", category.canonical_name());
                object.spawn_prefab = prefab.clone();
                report.record(category);
            }
            None => report.unresolved += 1,
        }
    }

    if !report.playable() {
        error!("Failed to find entrance teleporters to replace. Map will not be playable!");
    }
    if report.vents == 0 {
        warn!("No vents found to replace.");
    } else {
        info!("{} vents found and replaced with network prefab.", report.vents);
    }
    if report.storage_shelves > 0 {
        info!("{} storage shelves replaced with network prefab.", report.storage_shelves);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::graph::{ItemGroup, RandomScrapSpawn, SpawnSyncedObject};
    use crate::registry::NetworkPrefabList;

    fn registry() -> NetworkPrefabList {
        vec![
            Prefab::new("VentEntrance", 1),
            Prefab::new("EntranceTeleportA", 2),
            Prefab::new("EntranceTeleportB", 3),
            Prefab::new("StorageShelfContainer", 4),
            Prefab::new("Landmine", 5),
        ]
        .into_iter()
        .collect()
    }

    fn synced(name: &str) -> SpawnSyncedObject {
        SpawnSyncedObject {
            spawn_prefab: Prefab::new(name, 0),
        }
    }

    fn dummy(category: PlaceholderCategory) -> SpawnSyncedObject {
        synced(&category.placeholder_name())
    }

    fn full_floor() -> GeneratedDungeon {
        let mut dungeon = GeneratedDungeon::new("ExampleFlow");
        dungeon.synced_objects = vec![
            synced("Lamp"),
            dummy(PlaceholderCategory::EntranceTeleportA),
            dummy(PlaceholderCategory::EntranceTeleportB),
            dummy(PlaceholderCategory::VentEntrance),
            dummy(PlaceholderCategory::StorageShelf),
            synced("Doorway"),
        ];
        dungeon
    }

    #[test]
    fn test_replaces_each_structural_category() {
        let registry = registry();
        let mut dungeon = full_floor();
        let report = fix_structural_objects(&registry, &mut dungeon);

        let names: Vec<_> = dungeon
            .synced_objects
            .iter()
            .map(|o| o.spawn_prefab.clone())
            .collect();
        assert_eq!(
            names,
            vec![
                Prefab::new("Lamp", 0),
                registry.find_canonical("EntranceTeleportA").unwrap(),
                registry.find_canonical("EntranceTeleportB").unwrap(),
                registry.find_canonical("VentEntrance").unwrap(),
                registry.find_canonical("StorageShelfContainer").unwrap(),
                Prefab::new("Doorway", 0),
            ]
        );
        assert_eq!(report.total_replaced(), 4);
        assert_eq!(report.replaced(PlaceholderCategory::EntranceTeleportA), 1);
        assert_eq!(report.replaced(PlaceholderCategory::Turret), 0);
        assert_eq!(report.vents, 1);
        assert_eq!(report.storage_shelves, 1);
        assert!(report.playable());
        assert!(report.missing_canonical.is_empty());
    }

    #[test]
    fn test_scrap_spawns_are_left_alone() {
        let mut dungeon = full_floor();
        dungeon.scrap_spawns.push(RandomScrapSpawn {
            spawnable_items: ItemGroup::new(
                PlaceholderCategory::ItemGroupGeneral.placeholder_name(),
                0,
            ),
        });
        let before = dungeon.scrap_spawns.clone();
        fix_structural_objects(&registry(), &mut dungeon);
        assert_eq!(dungeon.scrap_spawns, before);
    }

    #[test]
    fn test_no_entrances_still_fixes_other_categories() {
        let mut dungeon = GeneratedDungeon::new("ExampleFlow");
        dungeon.synced_objects = vec![
            dummy(PlaceholderCategory::VentEntrance),
            dummy(PlaceholderCategory::VentEntrance),
            dummy(PlaceholderCategory::StorageShelf),
        ];
        let report = fix_structural_objects(&registry(), &mut dungeon);

        assert!(!report.playable());
        assert_eq!(report.vents, 2);
        assert_eq!(report.storage_shelves, 1);
        assert!(dungeon
            .synced_objects
            .iter()
            .all(|o| classify(o.spawn_prefab.name()).is_none()));
    }

    #[test]
    fn test_one_entrance_is_enough() {
        let mut dungeon = GeneratedDungeon::new("ExampleFlow");
        dungeon.synced_objects = vec![dummy(PlaceholderCategory::EntranceTeleportB)];
        let report = fix_structural_objects(&registry(), &mut dungeon);
        assert!(report.playable());
        assert_eq!(report.entrance_a, 0);
        assert_eq!(report.entrance_b, 1);
    }

    #[test]
    fn test_missing_canonical_only_skips_its_category() {
        let registry: NetworkPrefabList = vec![
            Prefab::new("EntranceTeleportA", 2),
            Prefab::new("EntranceTeleportB", 3),
            Prefab::new("StorageShelfContainer", 4),
        ]
        .into_iter()
        .collect();
        let mut dungeon = full_floor();
        let report = fix_structural_objects(&registry, &mut dungeon);

        assert_eq!(report.missing_canonical, vec![PlaceholderCategory::VentEntrance]);
        assert_eq!(report.unresolved, 1);
        assert_eq!(report.vents, 0);
        assert_eq!(report.entrance_a + report.entrance_b + report.storage_shelves, 3);
        assert_eq!(
            dungeon.synced_objects[3].spawn_prefab.name(),
            "ExampleDungeon_Vent_DUMMY"
        );
    }

    #[test]
    fn test_missing_entrance_prefabs_make_floor_unplayable() {
        let registry: NetworkPrefabList =
            vec![Prefab::new("VentEntrance", 1)].into_iter().collect();
        let mut dungeon = full_floor();
        let report = fix_structural_objects(&registry, &mut dungeon);
        assert!(!report.playable());
        assert_eq!(report.vents, 1);
        assert_eq!(report.unresolved, 3);
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let registry = registry();
        let mut dungeon = full_floor();
        fix_structural_objects(&registry, &mut dungeon);
        let resolved = dungeon.clone();

        let report = fix_structural_objects(&registry, &mut dungeon);
        assert_eq!(dungeon, resolved);
        assert_eq!(report.total_replaced(), 0);
        assert_eq!(report.already_resolved, 4);
        assert!(report.playable());
    }
}
