//! Status application and removal.

use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::{ModifierKind, StatusEffect, StatusKind, StatusTags, TimedModifier};

/// Inflict a timed status, optionally with a damage- or heal-over-time payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InflictStatusEffect {
    pub status: StatusKind,
    /// Landing probability; always lands when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chance: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick_damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick_heal: u32,
    /// Replaces the status kind's default tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Option<StatusTags>,
}

impl InflictStatusEffect {
    pub fn new(status: StatusKind) -> Self {
        Self {
            status,
            chance: None,
            duration: None,
            tick_damage: 0,
            tick_heal: 0,
            tags: None,
        }
    }

    /// Builder: landing probability.
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = Some(chance);
        self
    }

    /// Builder: duration in ticks.
    pub fn lasting(mut self, ticks: u32) -> Self {
        self.duration = Some(ticks);
        self
    }

    /// Builder: damage per tick.
    pub fn dealing(mut self, per_tick: u32) -> Self {
        self.tick_damage = per_tick;
        self
    }

    /// Builder: healing per tick.
    pub fn mending(mut self, per_tick: u32) -> Self {
        self.tick_heal = per_tick;
        self
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let chance = self.chance.unwrap_or(1.0);
        if !ctx.roller.chance(chance) {
            tracing::debug!(
                status = %self.status,
                target = %ctx.target_id(),
                chance,
                "status resisted"
            );
            return None;
        }

        let duration = self.duration.unwrap_or(ctx.config.default_status_duration);
        let payload = StatusEffect {
            kind: self.status.clone(),
            tags: self.tags.unwrap_or_else(|| self.status.default_tags()),
            tick_damage: self.tick_damage,
            tick_heal: self.tick_heal,
        };
        let record = TimedModifier::new(ModifierKind::Status(payload), Some(duration))
            .applied(&ctx.ability.id, ctx.caster.id, ctx.now);
        ctx.target().modifiers.push(record);

        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::StatusApplied {
                status: self.status.clone(),
                duration,
                synthesized: false,
            },
        ))
    }
}

/// Strip every status whose kind is listed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveStatusEffect {
    pub conditions: Vec<StatusKind>,
}

impl RemoveStatusEffect {
    pub fn new(conditions: impl IntoIterator<Item = StatusKind>) -> Self {
        Self {
            conditions: conditions.into_iter().collect(),
        }
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let removed = ctx
            .target()
            .modifiers
            .remove_statuses(|status| self.conditions.contains(&status.kind));
        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::StatusRemoved { removed },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::bench::{Bench, caster, dummy};
    use crate::env::ConstantRng;

    #[test]
    fn inflict_records_applier_and_payload() {
        let bench = Bench::default();
        let mut hexer = caster();
        let mut target = dummy(50);

        let effect = InflictStatusEffect::new(StatusKind::Burn).lasting(4).dealing(3);
        let result = bench
            .run(&ConstantRng::MID, &mut hexer, Some(&mut target), |ctx| effect.apply(ctx))
            .unwrap();
        assert!(result.is_primary_status());

        let record = target.modifiers.iter().next().unwrap();
        assert_eq!(record.ticks_left, Some(4));
        assert_eq!(record.applied_by, Some(hexer.id));
        assert_eq!(record.source.as_ref().map(|s| s.as_str()), Some("probe"));
        assert_eq!(target.modifiers.over_time(), (3, 0));
    }

    #[test]
    fn failed_chance_roll_applies_nothing() {
        let bench = Bench::default();
        let mut hexer = caster();
        let mut target = dummy(50);

        let effect = InflictStatusEffect::new(StatusKind::Sleep).with_chance(0.25);
        let result = bench.run(&ConstantRng::MID, &mut hexer, Some(&mut target), |ctx| {
            effect.apply(ctx)
        });
        assert!(result.is_none());
        assert!(target.modifiers.is_empty());
    }

    #[test]
    fn remove_counts_only_listed_statuses() {
        let bench = Bench::default();
        let mut cleric = caster();
        let mut target = dummy(50);
        for kind in [StatusKind::Poisoned, StatusKind::Burn, StatusKind::Haste] {
            target
                .modifiers
                .push(TimedModifier::new(ModifierKind::Status(StatusEffect::new(kind)), Some(3)));
        }

        let effect = RemoveStatusEffect::new([StatusKind::Poisoned, StatusKind::Burn]);
        let result = bench
            .run(&ConstantRng::MID, &mut cleric, Some(&mut target), |ctx| effect.apply(ctx))
            .unwrap();
        assert_eq!(result.outcome, EffectOutcome::StatusRemoved { removed: 2 });
        assert!(target.has_status(&StatusKind::Haste));
    }
}
