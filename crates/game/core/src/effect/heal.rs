//! Healing.

use crate::ability::{CritOverride, Power};
use crate::cast::scaling::{points, scaled_power};
use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::{BonusTag, Damageable, StatName};

/// Restore HP to the target, clamped at max HP.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealEffect {
    pub power: Power,
    pub crit: CritOverride,
}

impl HealEffect {
    pub fn new(power: Power) -> Self {
        Self {
            power,
            crit: CritOverride::default(),
        }
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let element = ctx.ability.element;
        let mut value = scaled_power(ctx, &self.power, &[BonusTag::Healing], element)
            * ctx.caster.class.healing_multiplier();

        let crit = &ctx.config.crit;
        let chance = crit.heal_base_chance
            + ctx.caster.stat(StatName::Wisdom) as f64 * crit.chance_per_wisdom
            + self.crit.chance.unwrap_or(0.0);
        let multiplier = self.crit.multiplier.unwrap_or(crit.heal_multiplier);
        let critical = ctx.roller.chance(chance);
        if critical {
            value *= multiplier;
        }

        let variance = ctx.roller.variance(ctx.config.heal_variance);
        let requested = points(value.floor() * variance).max(1);
        let gained = ctx.target().gain_hp(requested);

        tracing::debug!(target = %ctx.target_id(), requested, gained, critical, "healed");
        Some(
            EffectResult::new(
                ctx.target_id(),
                EffectOutcome::Heal {
                    amount: gained,
                    overheal: requested - gained,
                },
            )
            .critical(critical),
        )
    }
}
