//! Wards: shields, absorptions and reflections.
//!
//! All three are timed modifiers on the target. Incoming damage consumes
//! absorptions first, then shields; reflections roll per hit.

use crate::ability::Power;
use crate::cast::scaling::{points, scaled_power};
use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::{BonusTag, ModifierKind, TimedModifier};

fn ward_capacity(ctx: &EffectContext<'_, '_>, power: &Power) -> u32 {
    points(scaled_power(ctx, power, &[BonusTag::Ward], ctx.ability.element))
}

fn place(ctx: &mut EffectContext<'_, '_>, kind: ModifierKind, duration: u32) {
    let record = TimedModifier::new(kind, Some(duration)).applied(
        &ctx.ability.id,
        ctx.caster.id,
        ctx.now,
    );
    ctx.target().modifiers.push(record);
}

/// Damage-soaking barrier; cleared by dispel.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShieldEffect {
    pub power: Power,
    pub duration: Option<u32>,
}

impl ShieldEffect {
    pub fn new(power: Power, duration: u32) -> Self {
        Self {
            power,
            duration: Some(duration),
        }
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let capacity = ward_capacity(ctx, &self.power);
        let duration = self.duration.unwrap_or(ctx.config.default_status_duration);
        place(ctx, ModifierKind::Shield { capacity }, duration);
        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::Shield { capacity, duration },
        ))
    }
}

/// Absorbs damage before shields do.
///
/// With `heal_source`, absorbed damage heals whoever placed the ward.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbsorbEffect {
    pub power: Power,
    pub duration: Option<u32>,
    pub heal_source: bool,
}

impl AbsorbEffect {
    pub fn new(power: Power, duration: u32) -> Self {
        Self {
            power,
            duration: Some(duration),
            heal_source: false,
        }
    }

    /// Builder: heal the applier by the amount absorbed.
    pub fn healing_source(mut self) -> Self {
        self.heal_source = true;
        self
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let capacity = ward_capacity(ctx, &self.power);
        let duration = self.duration.unwrap_or(ctx.config.default_status_duration);
        place(
            ctx,
            ModifierKind::Absorption {
                capacity,
                heal_source: self.heal_source,
            },
            duration,
        );
        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::Absorption { capacity, duration },
        ))
    }
}

/// Chance to send part of each incoming hit back to the attacker.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReflectEffect {
    pub chance: f64,
    pub fraction: f64,
    pub duration: Option<u32>,
}

impl ReflectEffect {
    pub fn new(chance: f64, fraction: f64, duration: u32) -> Self {
        Self {
            chance: chance.clamp(0.0, 1.0),
            fraction: fraction.clamp(0.0, 1.0),
            duration: Some(duration),
        }
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let duration = self.duration.unwrap_or(ctx.config.default_status_duration);
        let (chance, fraction) = (self.chance.clamp(0.0, 1.0), self.fraction.clamp(0.0, 1.0));
        place(ctx, ModifierKind::Reflection { chance, fraction }, duration);
        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::Reflection {
                chance,
                fraction,
                duration,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::bench::{Bench, caster};
    use crate::env::ConstantRng;
    use crate::state::{EquipmentSlot, Item, ModifierCategory};

    #[test]
    fn shield_capacity_includes_ward_gear() {
        let bench = Bench::default();
        let mut knight = caster();
        knight.equipment.equip(
            EquipmentSlot::Accessory,
            Item::new("aegis_pin").with_modifier(BonusTag::Ward, 5),
        );

        let result = bench
            .run(&ConstantRng::MID, &mut knight, None, |ctx| {
                ShieldEffect::new(Power::flat(25.0), 4).apply(ctx)
            })
            .unwrap();
        assert_eq!(
            result.outcome,
            EffectOutcome::Shield {
                capacity: 30,
                duration: 4
            }
        );
        assert_eq!(knight.modifiers.of(ModifierCategory::Shield).count(), 1);
    }

    #[test]
    fn reflect_clamps_inputs() {
        let bench = Bench::default();
        let mut mirror = caster();
        let effect = ReflectEffect {
            chance: 1.7,
            fraction: 0.4,
            duration: None,
        };
        let result = bench
            .run(&ConstantRng::MID, &mut mirror, None, |ctx| effect.apply(ctx))
            .unwrap();
        assert_eq!(
            result.outcome,
            EffectOutcome::Reflection {
                chance: 1.0,
                fraction: 0.4,
                duration: 3
            }
        );
    }
}
