//! Per-second upkeep: over-time effects, regeneration and the modifier sweep.

use std::collections::BTreeMap;

use crate::env::WorldContext;
use crate::ledger::ResourceLedger;
use crate::state::{Actor, ActorId, Damageable, ModifierCategory};

/// What one actor went through during a `tick` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorUpkeep {
    /// HP lost to damage-over-time statuses.
    pub damage: u32,
    /// HP restored by heal-over-time statuses.
    pub healed: u32,
    /// Mana regenerated.
    pub mana: u32,
    /// Categories of the records that expired, in expiry order.
    pub expired: Vec<ModifierCategory>,
}

/// Summary of a `tick` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Whole seconds processed by this call.
    pub seconds: u64,
    pub actors: BTreeMap<ActorId, ActorUpkeep>,
}

impl TickReport {
    pub fn of(&self, actor: ActorId) -> Option<&ActorUpkeep> {
        self.actors.get(&actor)
    }
}

/// Runs one second of upkeep for `actor`.
pub(super) fn upkeep(
    actor: &mut Actor,
    ledger: &ResourceLedger<'_>,
    world: &dyn WorldContext,
    report: &mut ActorUpkeep,
) {
    if actor.hp() > 0 {
        let (damage, heal) = actor.modifiers.over_time();
        report.damage += actor.lose_hp(damage);
        if actor.hp() > 0 {
            report.healed += actor.gain_hp(heal);
        }
    }

    report.mana += ledger.regenerate(actor, world);

    for expired in actor.modifiers.sweep() {
        tracing::debug!(actor = %actor.id, kind = %expired.kind.category(), "modifier expired");
        report.expired.push(expired.kind.category());
    }
}
