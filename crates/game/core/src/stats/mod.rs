//! Unit attributes consumed by the effect modifier pipeline.
//!
//! Stats are plain floating-point values. Attacks never read them directly;
//! they go through [`crate::state::Unit::stat`], which layers active stat
//! buffs on top of the base block.

/// Attribute identifiers that modifiers and buffs refer to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    /// Physical power; the usual scaling stat for melee damage.
    Strength,
    /// Precision; scales ranged and piercing attacks.
    Dexterity,
    /// Arcane aptitude; scales burns and heals.
    Intelligence,
    Constitution,
    Speed,
}

/// Base attribute values of a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlock {
    pub strength: f32,
    pub dexterity: f32,
    pub intelligence: f32,
    pub constitution: f32,
    pub speed: f32,
}

impl StatBlock {
    /// A block with every stat at zero.
    pub const ZERO: Self = Self {
        strength: 0.0,
        dexterity: 0.0,
        intelligence: 0.0,
        constitution: 0.0,
        speed: 0.0,
    };

    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Constitution => self.constitution,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: f32) {
        match stat {
            Stat::Strength => self.strength = value,
            Stat::Dexterity => self.dexterity = value,
            Stat::Intelligence => self.intelligence = value,
            Stat::Constitution => self.constitution = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Builder: set a single stat.
    pub fn with(mut self, stat: Stat, value: f32) -> Self {
        self.set(stat, value);
        self
    }
}

impl Default for StatBlock {
    /// Default stats: all 1.0
    fn default() -> Self {
        Self {
            strength: 1.0,
            dexterity: 1.0,
            intelligence: 1.0,
            constitution: 1.0,
            speed: 1.0,
        }
    }
}
