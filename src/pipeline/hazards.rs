// src/pipeline/hazards.rs

use log::debug;

use super::graph::GeneratedDungeon;
use super::placeholder::{classify, PlaceholderCategory};

/// Hazard placeholders seen before map objects spawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HazardReport {
    pub turrets: usize,
    pub landmines: usize,
}

impl HazardReport {
    pub fn deferred(&self) -> usize {
        self.turrets + self.landmines
    }
}

/// Hook point for random map objects.
///
/// Turret and landmine dummies are rewritten by the external hazard spawner,
/// and rewriting them here as well breaks its own lookup. This pass only
/// counts them and never mutates the dungeon.
pub fn fix_map_objects(dungeon: &GeneratedDungeon) -> HazardReport {
    let mut report = HazardReport::default();
    for prefab in dungeon
        .map_objects
        .iter()
        .flat_map(|o| o.spawnable_prefabs.iter())
    {
        match classify(prefab.name()) {
            Some(PlaceholderCategory::Turret) => report.turrets += 1,
            Some(PlaceholderCategory::Landmine) => report.landmines += 1,
            _ => {}
        }
    }
    if report.deferred() > 0 {
        debug!(
            "Leaving {} turret and {} landmine placeholders to the hazard spawner.",
            report.turrets, report.landmines
        );
    }
    report
}
