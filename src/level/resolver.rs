// src/level/resolver.rs

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::LevelTypes;

/// The moon presets accepted by the `Moons` config entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MoonPreset {
    // Composites
    All,
    Paid,
    Easy,

    // Single moons
    Titan,
    Rend,
    Dine,
    Experimentation,
    Assurance,
    Vow,
    Offense,
    March,
}

impl MoonPreset {
    pub fn level_types(self) -> LevelTypes {
        match self {
            MoonPreset::All => LevelTypes::all(),
            MoonPreset::Paid => LevelTypes::PAID,
            MoonPreset::Easy => LevelTypes::EASY,
            MoonPreset::Titan => LevelTypes::TITAN,
            MoonPreset::Rend => LevelTypes::REND,
            MoonPreset::Dine => LevelTypes::DINE,
            MoonPreset::Experimentation => LevelTypes::EXPERIMENTATION,
            MoonPreset::Assurance => LevelTypes::ASSURANCE,
            MoonPreset::Vow => LevelTypes::VOW,
            MoonPreset::Offense => LevelTypes::OFFENSE,
            MoonPreset::March => LevelTypes::MARCH,
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self, MoonPreset::All | MoonPreset::Paid | MoonPreset::Easy)
    }
}

/// Maps a moon config key to the set of moons it names.
///
/// The key is lower-cased before matching, so `"TITAN"` and `"titan"` are the
/// same preset. Anything that is not an exact preset name yields the empty set,
/// which callers must treat as a configuration error.
pub fn resolve(config_key: &str) -> LevelTypes {
    config_key
        .to_lowercase()
        .parse::<MoonPreset>()
        .map(MoonPreset::level_types)
        .unwrap_or_else(|_| LevelTypes::empty())
}
