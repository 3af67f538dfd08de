//! Actor data model.
//!
//! Actors are owned by the caller's encounter or game-state container. The
//! engine only ever borrows them mutably for the duration of one call.

use std::collections::BTreeMap;

use super::acquisition::AcquisitionRecord;
use super::common::{AbilityId, ActorId};
use super::element::Element;
use super::equipment::Equipment;
use super::modifiers::TimedModifiers;
use super::status::StatusKind;

/// Character class, used for the scaling tables.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActorClass {
    Wizard,
    Mage,
    Cleric,
    Druid,
    Paladin,
    Rogue,
    Warrior,
    /// Wild or captured monsters without a character class.
    #[default]
    Monster,
}

impl ActorClass {
    /// Base maximum mana before level scaling.
    pub const fn base_mp(self) -> u32 {
        match self {
            Self::Wizard => 50,
            Self::Mage => 45,
            Self::Cleric => 40,
            Self::Druid => 40,
            Self::Paladin => 30,
            Self::Monster => 30,
            Self::Rogue => 25,
            Self::Warrior => 20,
        }
    }

    /// Mana regeneration multiplier.
    pub const fn regen_multiplier(self) -> f64 {
        match self {
            Self::Wizard => 1.5,
            Self::Mage => 1.4,
            Self::Cleric | Self::Druid => 1.3,
            Self::Paladin => 1.1,
            Self::Rogue | Self::Monster => 1.0,
            Self::Warrior => 0.8,
        }
    }

    /// Outgoing healing multiplier.
    pub const fn healing_multiplier(self) -> f64 {
        match self {
            Self::Cleric => 1.3,
            Self::Druid => 1.25,
            Self::Paladin => 1.2,
            Self::Mage => 1.1,
            Self::Warrior => 0.9,
            Self::Rogue => 0.8,
            Self::Wizard | Self::Monster => 1.0,
        }
    }
}

/// Stat names that effects can scale from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatName {
    Strength,
    Intelligence,
    Wisdom,
    Luck,
    Armor,
    MagicResistance,
    Level,
    MaxHp,
    MaxMp,
}

/// Resource pools and secondary stats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActorStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    /// Unset until the resource ledger initializes the actor.
    pub max_mp: Option<u32>,

    pub strength: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub luck: i32,
    pub armor: i32,
    pub magic_resistance: i32,
}

impl ActorStats {
    /// Full health, uninitialized mana.
    pub fn with_hp(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            ..Self::default()
        }
    }
}

/// A player character or monster.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub level: u32,
    pub class: ActorClass,
    pub stats: ActorStats,

    /// Statuses, wards, stat changes and transformations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: TimedModifiers,

    #[cfg_attr(feature = "serde", serde(default))]
    pub learned: Vec<AcquisitionRecord>,

    /// Successful casts per ability; drives mastery.
    #[cfg_attr(feature = "serde", serde(default))]
    pub usage: BTreeMap<AbilityId, u32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,

    /// Fraction of incoming damage of an element that is resisted (0.1 = 10%).
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: BTreeMap<Element, f64>,

    /// Fraction of extra damage taken from an element.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weaknesses: BTreeMap<Element, f64>,
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<String>, class: ActorClass, level: u32) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            class,
            ..Self::default()
        }
    }

    /// Builder: replace the stat block.
    pub fn with_stats(mut self, stats: ActorStats) -> Self {
        self.stats = stats;
        self
    }

    /// Effective value of a stat, including active stat modifiers.
    pub fn stat(&self, stat: StatName) -> i32 {
        let base = match stat {
            StatName::Strength => self.stats.strength,
            StatName::Intelligence => self.stats.intelligence,
            StatName::Wisdom => self.stats.wisdom,
            StatName::Luck => self.stats.luck,
            StatName::Armor => self.stats.armor,
            StatName::MagicResistance => self.stats.magic_resistance,
            StatName::Level => self.level as i32,
            StatName::MaxHp => self.stats.max_hp as i32,
            StatName::MaxMp => self.stats.max_mp.unwrap_or(0) as i32,
        };
        base + self.modifiers.stat_delta(stat)
    }

    pub fn knows(&self, ability: &AbilityId) -> bool {
        self.learned.iter().any(|r| &r.ability == ability)
    }

    pub fn has_status(&self, kind: &StatusKind) -> bool {
        self.modifiers.has_status(kind)
    }

    /// Prior successful casts of `ability`.
    pub fn uses_of(&self, ability: &AbilityId) -> u32 {
        self.usage.get(ability).copied().unwrap_or(0)
    }

    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0 && !self.has_status(&StatusKind::Dead)
    }

    pub fn resistance(&self, element: Element) -> f64 {
        self.resistances.get(&element).copied().unwrap_or(0.0)
    }

    pub fn weakness(&self, element: Element) -> f64 {
        self.weaknesses.get(&element).copied().unwrap_or(0.0)
    }
}
