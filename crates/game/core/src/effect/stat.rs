//! Timed stat boosts and debuffs.

use crate::ability::Power;
use crate::cast::scaling::{points, scaled_power};
use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::{BonusTag, ModifierKind, StatName, TimedModifier};

/// Timed change to one of the target's stats.
///
/// The same payload serves `stat_boost` and `stat_debuff`; the variant
/// decides the sign.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatChangeEffect {
    pub stat: StatName,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power: Power,
    /// Ticks; engine default when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

impl StatChangeEffect {
    pub fn new(stat: StatName, power: Power) -> Self {
        Self {
            stat,
            power,
            duration: None,
        }
    }

    /// Builder: duration in ticks.
    pub fn lasting(mut self, ticks: u32) -> Self {
        self.duration = Some(ticks);
        self
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>, sign: i32) -> Option<EffectResult> {
        let element = ctx.ability.element;
        let magnitude = points(scaled_power(ctx, &self.power, &[BonusTag::StatChange], element));
        let delta = i32::try_from(magnitude).unwrap_or(i32::MAX) * sign;
        let duration = self.duration.unwrap_or(ctx.config.default_status_duration);

        let record = TimedModifier::new(
            ModifierKind::StatChange {
                stat: self.stat,
                delta,
            },
            Some(duration),
        )
        .applied(&ctx.ability.id, ctx.caster.id, ctx.now);
        ctx.target().modifiers.push(record);

        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::StatChange {
                stat: self.stat,
                delta,
                duration,
            },
        ))
    }
}
