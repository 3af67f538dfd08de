//! Direct, area and chain damage.

use crate::ability::{CritOverride, Power};
use crate::cast::incoming::receive;
use crate::cast::scaling::{points, scaled_power};
use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::{BonusTag, DamageCategory, Element, StatName};

/// Deal damage to the target.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageEffect {
    pub power: Power,
    /// Overrides the ability's element.
    pub element: Option<Element>,
    /// Overrides the mitigation category implied by the element.
    pub category: Option<DamageCategory>,
    pub crit: CritOverride,
}

impl DamageEffect {
    pub fn new(power: Power) -> Self {
        Self {
            power,
            ..Self::default()
        }
    }

    /// Builder: element override.
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Builder: mitigation category override.
    pub fn with_category(mut self, category: DamageCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Builder: critical overrides.
    pub fn with_crit(mut self, crit: CritOverride) -> Self {
        self.crit = crit;
        self
    }

    /// Damage after resistances, crit and defense, before variance.
    ///
    /// Returns the floored planned damage and whether the hit was critical.
    pub(crate) fn planned(&self, ctx: &mut EffectContext<'_, '_>, element: Element) -> (f64, bool) {
        let bonuses = [BonusTag::Damage, BonusTag::ElementalDamage(element)];
        let mut value = scaled_power(ctx, &self.power, &bonuses, element);

        let target = ctx.target_ref();
        value *= (1.0 - target.resistance(element)) * (1.0 + target.weakness(element));

        let crit = &ctx.config.crit;
        let chance = crit.damage_base_chance
            + ctx.caster.stat(StatName::Luck) as f64 * crit.chance_per_luck
            + self.crit.chance.unwrap_or(0.0);
        let multiplier = self.crit.multiplier.unwrap_or(crit.damage_multiplier);
        let critical = ctx.roller.chance(chance);
        if critical {
            value *= multiplier;
        }

        let category = self
            .category
            .unwrap_or(DamageCategory::for_element(element));
        let defense = match category {
            DamageCategory::Physical => Some(StatName::Armor),
            DamageCategory::Magical => Some(StatName::MagicResistance),
            DamageCategory::True => None,
        };
        if let Some(stat) = defense {
            let d = ctx.target_ref().stat(stat).max(0) as f64;
            value *= 1.0 - d / (d + ctx.config.defense_constant);
        }

        (value.max(0.0).floor(), critical)
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let element = self.element.unwrap_or(ctx.ability.element);
        let (planned, critical) = self.planned(ctx, element);
        let variance = ctx.roller.variance(ctx.config.damage_variance);
        let amount = points(planned * variance).max(1);

        let hit = receive(ctx, amount, element);
        Some(EffectResult::new(ctx.target_id(), EffectOutcome::Damage(hit)).critical(critical))
    }
}

/// Damage that hops across secondary targets with decaying power.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainDamageEffect {
    pub damage: DamageEffect,
    /// Secondary targets reached after the primary.
    pub chains: u32,
}

impl ChainDamageEffect {
    pub fn new(damage: DamageEffect, chains: u32) -> Self {
        Self { damage, chains }
    }
}
