//! Shared power scaling: stat scaling, mastery, equipment, environment.
//!
//! Every effect with a [`Power`] goes through [`scaled_power`] before its own
//! terminal computation. Chain hops multiply the result by `decay^hop`.

use crate::ability::Power;
use crate::state::{BonusTag, Element, StatName};

use super::context::EffectContext;

/// Pre-scaled power, floored to an integer of at least 1.
pub(crate) fn base_power(ctx: &EffectContext<'_, '_>, power: &Power) -> f64 {
    let caster = &*ctx.caster;
    let mut value = power.base;
    if let Some(scaling) = &power.scaling {
        value += caster.stat(scaling.stat) as f64 * scaling.multiplier;
    }
    value += caster.stat(StatName::Level) as f64 * power.level_coefficient;
    value += ctx.ability.learn_level as f64 * power.spell_level_coefficient;
    value.floor().max(1.0)
}

/// Power after mastery, equipment bonuses, area affinity and chain decay.
pub(crate) fn scaled_power(
    ctx: &EffectContext<'_, '_>,
    power: &Power,
    bonuses: &[BonusTag],
    element: Element,
) -> f64 {
    let mastered = base_power(ctx, power) * ctx.config.mastery_factor(ctx.prior_uses);
    let equipped = mastered + ctx.caster.equipment.bonus(bonuses) as f64;
    let value = equipped * ctx.env.world().element_affinity(element) * ctx.hop_factor();
    tracing::trace!(
        ability = %ctx.ability.id,
        mastered,
        equipped,
        value,
        "scaled power"
    );
    value.max(0.0)
}

/// Rounds a non-negative power to whole points.
pub(crate) fn points(value: f64) -> u32 {
    value.round().clamp(0.0, u32::MAX as f64) as u32
}
