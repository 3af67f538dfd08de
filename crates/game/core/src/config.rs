//! Engine configuration constants and tunable parameters.
//!
//! Every balance number the rules use lives here so content teams can tune a
//! build from a TOML file (see `spellcraft-content::ConfigLoader`) without
//! touching code. Class- and status-keyed tables live on their enums
//! ([`ActorClass`](crate::state::ActorClass), [`StatusKind`](crate::state::StatusKind)).

/// Critical-hit parameters for damage and healing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CritConfig {
    /// Base critical chance for damage effects.
    pub damage_base_chance: f64,
    /// Additional damage crit chance per point of luck.
    pub chance_per_luck: f64,
    /// Damage multiplier when no effect override is present.
    pub damage_multiplier: f64,
    /// Base critical chance for healing effects.
    pub heal_base_chance: f64,
    /// Additional heal crit chance per point of wisdom.
    pub chance_per_wisdom: f64,
    /// Heal multiplier when no effect override is present.
    pub heal_multiplier: f64,
}

impl Default for CritConfig {
    fn default() -> Self {
        Self {
            damage_base_chance: 0.05,
            chance_per_luck: 0.001,
            damage_multiplier: 2.0,
            heal_base_chance: 0.08,
            chance_per_wisdom: 0.001,
            heal_multiplier: 1.5,
        }
    }
}

/// Mana regeneration rates, as fractions of maximum mana per second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegenConfig {
    pub combat: f64,
    pub exploration: f64,
    pub rest: f64,
    pub meditation: f64,
    /// Added to the rate for every caster level.
    pub per_level: f64,
    /// Lower bound for the combined status multiplier.
    pub status_floor: f64,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            combat: 0.01,
            exploration: 0.02,
            rest: 0.05,
            meditation: 0.08,
            per_level: 0.001,
            status_floor: 0.01,
        }
    }
}

/// Thresholds for the combo/chain post-processor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComboConfig {
    /// Fire damage must exceed this to ignite a burning target.
    pub fire_threshold: u32,
    /// Ice damage must exceed this to freeze a slowed target.
    pub ice_threshold: u32,
    /// Number of status applications that triggers an overwhelming debuff.
    pub debuff_count: usize,
    /// Bonus-damage hint per status in an overwhelming debuff.
    pub bonus_per_status: u32,
    /// Duration of synthesized statuses, in ticks.
    pub synthesized_duration: u32,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            fire_threshold: 20,
            ice_threshold: 15,
            debuff_count: 3,
            bonus_per_status: 10,
            synthesized_duration: 3,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub crit: CritConfig,
    pub regen: RegenConfig,
    pub combo: ComboConfig,

    /// Half-width of the uniform damage variance band (0.10 = ±10%).
    pub damage_variance: f64,
    /// Half-width of the uniform healing variance band.
    pub heal_variance: f64,

    /// Mastery bonus gained per prior use of an ability.
    pub mastery_per_use: f64,
    /// Upper bound of the mastery bonus.
    pub mastery_cap: f64,

    /// Constant in the diminishing-returns defense formula `d / (d + k)`.
    pub defense_constant: f64,

    /// Maximum mana gained per level on initialization.
    pub mp_per_level: u32,

    /// Fraction of drained mana transferred to the caster.
    pub drain_transfer: f64,

    /// Power multiplier applied per chain hop.
    pub chain_decay: f64,

    /// Status duration used when an effect does not specify one.
    pub default_status_duration: u32,

    /// Level relief for learning from scrolls.
    pub scroll_level_relief: u32,
    /// Level relief for learning from loot drops.
    pub loot_level_relief: u32,
}

impl EngineConfig {
    // ===== compile-time constants =====
    /// Milliseconds in one regeneration / modifier tick.
    pub const TICK_MS: u64 = 1_000;

    pub fn new() -> Self {
        Self {
            crit: CritConfig::default(),
            regen: RegenConfig::default(),
            combo: ComboConfig::default(),
            damage_variance: 0.10,
            heal_variance: 0.05,
            mastery_per_use: 0.01,
            mastery_cap: 0.50,
            defense_constant: 100.0,
            mp_per_level: 5,
            drain_transfer: 0.5,
            chain_decay: 0.8,
            default_status_duration: 3,
            scroll_level_relief: 2,
            loot_level_relief: 1,
        }
    }

    /// Mastery multiplier for an ability used `uses` times before.
    pub fn mastery_factor(&self, uses: u32) -> f64 {
        1.0 + (uses as f64 * self.mastery_per_use).min(self.mastery_cap)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mastery_caps_at_fifty_percent() {
        let config = EngineConfig::default();
        assert_eq!(config.mastery_factor(0), 1.0);
        assert!((config.mastery_factor(10) - 1.10).abs() < 1e-9);
        assert!((config.mastery_factor(50) - 1.50).abs() < 1e-9);
        assert!((config.mastery_factor(500) - 1.50).abs() < 1e-9);
    }
}
