// src/pipeline/placeholder.rs

use strum::{Display, EnumIter, IntoEnumIterator};

use super::{PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX};

/// Which part of the pipeline a placeholder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// Synced objects fixed right after the floor is generated.
    Structural,
    /// Random map object entries. Rewritten by the hazard collaborator.
    Hazard,
    /// Scrap spawner item groups.
    ItemGroup,
}

/// Every kind of dummy object the generated dungeon may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum PlaceholderCategory {
    VentEntrance,
    EntranceTeleportA,
    EntranceTeleportB,
    StorageShelf,
    Turret,
    Landmine,
    ItemGroupGeneral,
    ItemGroupTabletop,
    ItemGroupSmall,
}

impl PlaceholderCategory {
    /// Name of the real object in the prefab registry, or of the item group
    /// inside a donor item.
    pub fn canonical_name(self) -> &'static str {
        match self {
            PlaceholderCategory::VentEntrance => "VentEntrance",
            PlaceholderCategory::EntranceTeleportA => "EntranceTeleportA",
            PlaceholderCategory::EntranceTeleportB => "EntranceTeleportB",
            PlaceholderCategory::StorageShelf => "StorageShelfContainer",
            PlaceholderCategory::Turret => "TurretContainer",
            PlaceholderCategory::Landmine => "Landmine",
            PlaceholderCategory::ItemGroupGeneral => "GeneralItemClass",
            PlaceholderCategory::ItemGroupTabletop => "TabletopItems",
            PlaceholderCategory::ItemGroupSmall => "SmallItems",
        }
    }

    /// The middle part of the dummy's name, between prefix and suffix.
    pub fn placeholder_stem(self) -> &'static str {
        match self {
            PlaceholderCategory::VentEntrance => "Vent",
            PlaceholderCategory::EntranceTeleportA => "EntranceTeleportA",
            PlaceholderCategory::EntranceTeleportB => "EntranceTeleportB",
            PlaceholderCategory::StorageShelf => "StorageShelf",
            PlaceholderCategory::Turret => "Turret",
            PlaceholderCategory::Landmine => "Landmine",
            PlaceholderCategory::ItemGroupGeneral => "GeneralItemClass",
            PlaceholderCategory::ItemGroupTabletop => "TabletopItems",
            PlaceholderCategory::ItemGroupSmall => "SmallItems",
        }
    }

    /// Full name of the dummy object, e.g. `ExampleDungeon_Vent_DUMMY`.
    pub fn placeholder_name(self) -> String {
        format!(
            "{}{}{}",
            PLACEHOLDER_PREFIX,
            self.placeholder_stem(),
            PLACEHOLDER_SUFFIX
        )
    }

    pub fn kind(self) -> PlaceholderKind {
        match self {
            PlaceholderCategory::VentEntrance
            | PlaceholderCategory::EntranceTeleportA
            | PlaceholderCategory::EntranceTeleportB
            | PlaceholderCategory::StorageShelf => PlaceholderKind::Structural,
            PlaceholderCategory::Turret | PlaceholderCategory::Landmine => PlaceholderKind::Hazard,
            PlaceholderCategory::ItemGroupGeneral
            | PlaceholderCategory::ItemGroupTabletop
            | PlaceholderCategory::ItemGroupSmall => PlaceholderKind::ItemGroup,
        }
    }

    pub fn of_kind(kind: PlaceholderKind) -> impl Iterator<Item = PlaceholderCategory> {
        PlaceholderCategory::iter().filter(move |c| c.kind() == kind)
    }
}

/// Identifies the placeholder category of an object by its exact name.
pub fn classify(node_name: &str) -> Option<PlaceholderCategory> {
    let stem = node_name
        .strip_prefix(PLACEHOLDER_PREFIX)?
        .strip_suffix(PLACEHOLDER_SUFFIX)?;
    PlaceholderCategory::iter().find(|c| c.placeholder_stem() == stem)
}
