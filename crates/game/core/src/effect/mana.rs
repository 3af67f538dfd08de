//! Mana restore and drain.

use crate::ability::Power;
use crate::cast::scaling::{points, scaled_power};
use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::ledger::ResourceLedger;
use crate::state::{BonusTag, ManaPool};

/// Restore mana to the target.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManaRestoreEffect {
    pub power: Power,
}

impl ManaRestoreEffect {
    pub fn new(power: Power) -> Self {
        Self { power }
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let element = ctx.ability.element;
        let amount = points(scaled_power(ctx, &self.power, &[BonusTag::Mana], element));
        let ledger = ResourceLedger::new(ctx.config);
        let restored = ledger.restore(ctx.target(), amount);
        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::ManaRestored { amount: restored },
        ))
    }
}

/// Drain mana from the target, optionally feeding part of it to the caster.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManaDrainEffect {
    pub power: Power,
    pub transfer: bool,
}

impl ManaDrainEffect {
    pub fn new(power: Power, transfer: bool) -> Self {
        Self { power, transfer }
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let element = ctx.ability.element;
        let amount = points(scaled_power(ctx, &self.power, &[BonusTag::Mana], element));

        let target = ctx.target();
        let drained = amount.min(target.mp());
        let left = target.mp() - drained;
        target.set_mp(left);

        let mut transferred = 0;
        if self.transfer && !ctx.targets_caster() {
            let share = (drained as f64 * ctx.config.drain_transfer).floor() as u32;
            transferred = ResourceLedger::new(ctx.config).restore(&mut *ctx.caster, share);
        }

        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::ManaDrained {
                amount: drained,
                transferred,
            },
        ))
    }
}
