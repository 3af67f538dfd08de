//! Status conditions carried by actors.
//!
//! Statuses are stored as [`TimedModifier`](super::TimedModifier) records so
//! they share one duration sweep with shields, absorptions and the rest.

use std::fmt;

/// Types of status conditions.
///
/// Catalog data may name statuses this enum does not know; those parse into
/// [`StatusKind::Other`] and behave as plain tagged records.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumString, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    // ========================================================================
    // Regeneration modifiers
    // ========================================================================
    Poisoned,
    Blessed,
    Cursed,
    Focused,
    Exhausted,
    Resting,
    Meditating,

    // ========================================================================
    // Elemental conditions
    // ========================================================================
    Burn,
    IntenseBurn,
    Slow,
    Frozen,

    // ========================================================================
    // Crowd control (blocks casting)
    // ========================================================================
    Silence,
    Stun,
    Sleep,
    Paralysis,

    // ========================================================================
    // Buffs
    // ========================================================================
    Haste,
    Enchanted,
    Regenerating,

    // ========================================================================
    // Life state
    // ========================================================================
    Dead,
    Unconscious,

    /// Any status name not listed above.
    #[strum(default)]
    Other(String),
}

impl StatusKind {
    /// Statuses that prevent the bearer from casting.
    pub const CASTING_BLOCKERS: [StatusKind; 4] = [
        StatusKind::Silence,
        StatusKind::Stun,
        StatusKind::Sleep,
        StatusKind::Paralysis,
    ];

    /// Canonical snake_case name.
    pub fn name(&self) -> &str {
        match self {
            Self::Other(name) => name,
            known => known.as_ref(),
        }
    }

    /// Returns true if this status prevents casting.
    pub fn blocks_casting(&self) -> bool {
        Self::CASTING_BLOCKERS.contains(self)
    }

    /// Multiplier this status applies to mana regeneration, if any.
    pub fn regen_multiplier(&self) -> Option<f64> {
        match self {
            Self::Poisoned => Some(0.5),
            Self::Blessed => Some(1.5),
            Self::Cursed => Some(0.3),
            Self::Focused => Some(2.0),
            Self::Exhausted => Some(0.1),
            _ => None,
        }
    }

    /// Tags a freshly applied status receives when the effect does not say otherwise.
    pub fn default_tags(&self) -> StatusTags {
        match self {
            Self::Blessed | Self::Haste | Self::Enchanted | Self::Regenerating => {
                StatusTags::MAGICAL | StatusTags::ENCHANT | StatusTags::BUFF
            }
            Self::Cursed | Self::Silence | Self::Sleep => StatusTags::MAGICAL | StatusTags::DEBUFF,
            Self::Focused | Self::Resting | Self::Meditating => StatusTags::BUFF,
            Self::Dead | Self::Unconscious => StatusTags::empty(),
            _ => StatusTags::DEBUFF,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Classification tags on a status record.
    ///
    /// Dispel strips records tagged `MAGICAL` or `ENCHANT`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusTags: u8 {
        const MAGICAL = 1 << 0;
        const ENCHANT = 1 << 1;
        const BUFF    = 1 << 2;
        const DEBUFF  = 1 << 3;
    }
}

impl StatusTags {
    /// Returns true if dispel removes a status carrying these tags.
    pub fn is_dispellable(self) -> bool {
        self.intersects(Self::MAGICAL | Self::ENCHANT)
    }
}
