// src/pipeline/scrap.rs

use log::{error, info, warn};

use super::graph::{GeneratedDungeon, Item, ItemGroup, SelectableLevel};
use super::placeholder::{classify, PlaceholderCategory};

/// Scrap items that carry both the general and tabletop item groups, in the
/// order they are tried. Any one of them may be missing from a moon's list.
pub const SCRAP_DONORS: [&str; 5] = [
    "Bottles",
    "Cash register",
    "Chemical jug",
    "Gift",
    "Tea kettle",
];

/// The only scrap item known to use the small items group.
pub const SMALL_ITEMS_DONOR: &str = "Golden cup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapOutcome {
    Applied,
    /// None of the donors is in the level's scrap list.
    NoDonor,
    /// The donor was found but lacks one of its item groups.
    DonorIncomplete { donor: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapReport {
    pub outcome: ScrapOutcome,
    pub donor: Option<String>,
    pub small_items_donor: Option<String>,
    /// Small item spawns were given the tabletop group.
    pub small_items_fallback: bool,
    pub general: usize,
    pub tabletop: usize,
    pub small: usize,
}

impl ScrapReport {
    fn skipped(outcome: ScrapOutcome, donor: Option<String>) -> Self {
        Self {
            outcome,
            donor,
            small_items_donor: None,
            small_items_fallback: false,
            general: 0,
            tabletop: 0,
            small: 0,
        }
    }

    pub fn total_replaced(&self) -> usize {
        self.general + self.tabletop + self.small
    }
}

/// The item groups scrap spawners are pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroups {
    pub general: ItemGroup,
    pub tabletop: ItemGroup,
    pub small: ItemGroup,
}

impl ItemGroups {
    fn for_category(&self, category: PlaceholderCategory) -> Option<&ItemGroup> {
        match category {
            PlaceholderCategory::ItemGroupGeneral => Some(&self.general),
            PlaceholderCategory::ItemGroupTabletop => Some(&self.tabletop),
            PlaceholderCategory::ItemGroupSmall => Some(&self.small),
            _ => None,
        }
    }
}

/// Returns the first candidate present in the level's scrap list.
pub fn find_donor<'a>(level: &'a SelectableLevel, candidates: &[&str]) -> Option<&'a Item> {
    candidates.iter().find_map(|name| level.find_scrap(name))
}

/// Points scrap spawner dummies at the level's real item groups, borrowed from
/// donor scrap items.
pub fn fix_scrap_spawns(level: &SelectableLevel, dungeon: &mut GeneratedDungeon) -> ScrapReport {
    let Some(donor) = find_donor(level, &SCRAP_DONORS) else {
        error!(
            "Unable to find an item with spawn positions to pull from ({}). No junk will spawn in this dungeon!",
            SCRAP_DONORS.join(", ")
        );
        return ScrapReport::skipped(ScrapOutcome::NoDonor, None);
    };

    let general =
        donor.spawn_position_type(PlaceholderCategory::ItemGroupGeneral.canonical_name());
    let tabletop =
        donor.spawn_position_type(PlaceholderCategory::ItemGroupTabletop.canonical_name());
    let (Some(general), Some(tabletop)) = (general, tabletop) else {
        error!(
            "Found an item '{}' ({}) that is supposed to have both general and tabletop items but no longer does.",
            donor.item_name, donor.name
        );
        return ScrapReport::skipped(
            ScrapOutcome::DonorIncomplete {
                donor: donor.item_name.clone(),
            },
            Some(donor.item_name.clone()),
        );
    };

    let small_donor = level.find_scrap(SMALL_ITEMS_DONOR);
    let small = small_donor.and_then(|item| {
        item.spawn_position_type(PlaceholderCategory::ItemGroupSmall.canonical_name())
    });
    if let (Some(item), None) = (small_donor, small) {
        warn!(
            "'{}' has no {} group, using {} instead.",
            item.item_name,
            PlaceholderCategory::ItemGroupSmall.canonical_name(),
            PlaceholderCategory::ItemGroupTabletop.canonical_name()
        );
    }
    let groups = ItemGroups {
        general: general.clone(),
        tabletop: tabletop.clone(),
        small: small.unwrap_or(tabletop).clone(),
    };

    let mut report = ScrapReport {
        outcome: ScrapOutcome::Applied,
        donor: Some(donor.item_name.clone()),
        small_items_donor: small.and(small_donor).map(|i| i.item_name.clone()),
        small_items_fallback: small.is_none(),
        general: 0,
        tabletop: 0,
        small: 0,
    };

    for spawn in dungeon.scrap_spawns.iter_mut() {
        let Some(category) = classify(spawn.spawnable_items.name()) else {
            continue;
        };
        let Some(group) = groups.for_category(category) else {
            continue;
        };
        spawn.spawnable_items = group.clone();
        match category {
            PlaceholderCategory::ItemGroupGeneral => report.general += 1,
            PlaceholderCategory::ItemGroupTabletop => report.tabletop += 1,
            _ => report.small += 1,
        }
    }

    info!(
        "Fixed {} scrap spawns using item groups from '{}'.",
        report.total_replaced(),
        donor.item_name
    );
    report
}
