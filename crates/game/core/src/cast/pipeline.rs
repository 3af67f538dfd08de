//! Effect pipeline: resolves an ability's effect specs in order.
//!
//! Runs after validation, resource consumption and cooldown start. Per-effect
//! misses are silent (no result); only the combo pass sees what landed.

use crate::ability::AbilityDefinition;
use crate::config::EngineConfig;
use crate::effect::EffectSpec;
use crate::env::SpellEnv;
use crate::state::{Damageable, Timestamp};

use super::combo::ComboProcessor;
use super::context::{EffectContext, Roller};
use super::result::{EffectOutcome, EffectResult};
use super::targets::{Participants, Resolved};

pub(crate) struct EffectPipeline<'p, 'e> {
    pub ability: &'e AbilityDefinition,
    pub config: &'p EngineConfig,
    pub env: SpellEnv<'e>,
    pub now: Timestamp,
    /// Caster's uses of the ability before this cast.
    pub prior_uses: u32,
}

impl<'e> EffectPipeline<'_, 'e> {
    pub fn run(
        &self,
        participants: &mut Participants<'_>,
        roller: &mut Roller<'e>,
    ) -> Vec<EffectResult> {
        let mut results = Vec::new();

        for (index, effect) in self.ability.effects.iter().enumerate() {
            if let EffectSpec::Unsupported { kind } = effect {
                tracing::warn!(
                    ability = %self.ability.id,
                    index,
                    kind = kind.as_str(),
                    "unsupported effect type skipped"
                );
                continue;
            }

            let resolved = participants.resolve(self.ability.target, effect);
            if resolved.is_empty() {
                tracing::debug!(
                    ability = %self.ability.id,
                    effect = effect.tag(),
                    "no target for effect"
                );
                continue;
            }

            for Resolved { slot, hop } in resolved {
                let Some((caster, target)) = participants.split(slot) else {
                    continue;
                };
                let mut ctx = EffectContext {
                    caster,
                    target,
                    ability: self.ability,
                    config: self.config,
                    env: self.env,
                    roller: &mut *roller,
                    now: self.now,
                    prior_uses: self.prior_uses,
                    hop,
                };
                match effect.apply(&mut ctx) {
                    Some(mut result) => {
                        settle_source_heals(&mut result, participants);
                        tracing::debug!(
                            ability = %self.ability.id,
                            effect = effect.tag(),
                            target = %result.target,
                            magnitude = result.magnitude(),
                            critical = result.critical,
                            "effect applied"
                        );
                        results.push(result);
                    }
                    None => tracing::debug!(
                        ability = %self.ability.id,
                        effect = effect.tag(),
                        "effect did not apply"
                    ),
                }
            }
        }

        let caster = participants.caster().id;
        ComboProcessor {
            config: &self.config.combo,
            ability: &self.ability.id,
            caster,
            now: self.now,
        }
        .process(&mut results, participants);

        results
    }
}

/// Heals ward appliers that are cast participants; the rest stay on the result.
fn settle_source_heals(result: &mut EffectResult, participants: &mut Participants<'_>) {
    let EffectOutcome::Damage(hit) = &mut result.outcome else {
        return;
    };
    hit.source_heals.retain(|&(by, amount)| match participants.find_mut(by) {
        Some(warder) => {
            warder.gain_hp(amount);
            false
        }
        None => {
            tracing::debug!(warder = %by, amount, "absorption heal left to the caller");
            true
        }
    });
}
