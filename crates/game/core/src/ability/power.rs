use crate::state::StatName;

/// Caster stat that adds to an effect's base power.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatScaling {
    pub stat: StatName,
    pub multiplier: f64,
}

/// Declarative power of an effect before any runtime scaling.
///
/// Pre-scaled power is
/// `base + stat × multiplier + caster_level × level_coefficient
///  + learn_level × spell_level_coefficient`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Power {
    pub base: f64,
    pub scaling: Option<StatScaling>,
    pub level_coefficient: f64,
    pub spell_level_coefficient: f64,
}

impl Power {
    pub fn flat(base: f64) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Builder: add `multiplier × stat`.
    pub fn scaled(mut self, stat: StatName, multiplier: f64) -> Self {
        self.scaling = Some(StatScaling { stat, multiplier });
        self
    }

    /// Builder: add `coefficient × caster level`.
    pub fn per_level(mut self, coefficient: f64) -> Self {
        self.level_coefficient = coefficient;
        self
    }

    /// Builder: add `coefficient × ability learn level`.
    pub fn per_spell_level(mut self, coefficient: f64) -> Self {
        self.spell_level_coefficient = coefficient;
        self
    }
}

/// Per-effect critical overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CritOverride {
    /// Added to the base critical chance.
    pub chance: Option<f64>,
    /// Replaces the default critical multiplier.
    pub multiplier: Option<f64>,
}
