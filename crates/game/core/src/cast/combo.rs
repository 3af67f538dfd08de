//! Combo post-processing over a finished cast's results.
//!
//! Runs once per cast after every effect has resolved. Synthesized entries
//! are appended; primary results are never rewritten. Synthesized statuses do
//! not count toward an overwhelming debuff.

use crate::config::ComboConfig;
use crate::state::{
    AbilityId, ActorId, Element, ModifierKind, StatusEffect, StatusKind, TimedModifier, Timestamp,
};

use super::result::{ComboMarker, EffectOutcome, EffectResult};
use super::targets::Participants;

/// Elemental follow-ups: `(element, status the target must carry, synthesized status)`.
const ELEMENTAL_COMBOS: [(Element, StatusKind, StatusKind); 2] = [
    (Element::Fire, StatusKind::Burn, StatusKind::IntenseBurn),
    (Element::Ice, StatusKind::Slow, StatusKind::Frozen),
];

pub(crate) struct ComboProcessor<'c> {
    pub config: &'c ComboConfig,
    pub ability: &'c AbilityId,
    pub caster: ActorId,
    pub now: Timestamp,
}

impl ComboProcessor<'_> {
    fn threshold(&self, element: Element) -> u32 {
        match element {
            Element::Ice => self.config.ice_threshold,
            _ => self.config.fire_threshold,
        }
    }

    pub fn process(&self, results: &mut Vec<EffectResult>, participants: &mut Participants<'_>) {
        let mut synthesized = Vec::new();

        for result in results.iter() {
            let Some(hit) = result.damage() else { continue };
            for (element, requires, produces) in &ELEMENTAL_COMBOS {
                if hit.element != *element || hit.amount <= self.threshold(*element) {
                    continue;
                }
                let Some(target) = participants.find_mut(result.target) else {
                    continue;
                };
                if !target.has_status(requires) || target.has_status(produces) {
                    continue;
                }
                let duration = self.config.synthesized_duration;
                target.modifiers.push(
                    TimedModifier::new(
                        ModifierKind::Status(StatusEffect::new(produces.clone())),
                        Some(duration),
                    )
                    .applied(self.ability, self.caster, self.now),
                );
                tracing::debug!(target = %result.target, status = %produces, "elemental combo");
                synthesized.push(EffectResult::new(
                    result.target,
                    EffectOutcome::StatusApplied {
                        status: produces.clone(),
                        duration,
                        synthesized: true,
                    },
                ));
            }
        }

        let healed = results.iter().any(EffectResult::is_heal);
        let damaged = results.iter().any(|r| r.damage().is_some());
        if healed && damaged {
            synthesized.push(EffectResult::new(
                self.caster,
                EffectOutcome::Combo(ComboMarker::LifeSteal),
            ));
        }

        let mut statuses = results.iter().filter(|r| r.is_primary_status());
        if let Some(first) = statuses.next() {
            let count = 1 + statuses.count();
            if count >= self.config.debuff_count {
                synthesized.push(EffectResult::new(
                    first.target,
                    EffectOutcome::Combo(ComboMarker::OverwhelmingDebuff {
                        statuses: count,
                        bonus_damage: count as u32 * self.config.bonus_per_status,
                    }),
                ));
            }
        }

        results.extend(synthesized);
    }
}
