// src/level/level_types.rs

use bitflags::bitflags;

bitflags! {
    /// The moons a dungeon may be selected on.
    ///
    /// An empty set is the "none" sentinel returned for an unrecognized moon
    /// key. It is never a valid registration target.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LevelTypes: u32 {
        const EXPERIMENTATION = 1 << 0;
        const ASSURANCE = 1 << 1;
        const VOW = 1 << 2;
        const OFFENSE = 1 << 3;
        const MARCH = 1 << 4;
        const REND = 1 << 5;
        const DINE = 1 << 6;
        const TITAN = 1 << 7;
    }
}

impl LevelTypes {
    /// The free moons.
    pub const EASY: LevelTypes = LevelTypes::EXPERIMENTATION
        .union(LevelTypes::ASSURANCE)
        .union(LevelTypes::VOW)
        .union(LevelTypes::OFFENSE)
        .union(LevelTypes::MARCH);

    /// The moons that cost credits to route to.
    pub const PAID: LevelTypes = LevelTypes::TITAN
        .union(LevelTypes::DINE)
        .union(LevelTypes::REND);

    /// Returns true if this set is the "none" sentinel.
    pub fn is_none(&self) -> bool {
        self.is_empty()
    }
}
