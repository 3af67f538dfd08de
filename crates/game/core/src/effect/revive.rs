//! Revival of downed allies.

use crate::ability::Power;
use crate::cast::scaling::{points, scaled_power};
use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::{BonusTag, Damageable, StatusKind};

/// Bring a downed target back with HP equal to the effect's power.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReviveEffect {
    pub power: Power,
}

impl ReviveEffect {
    pub fn new(power: Power) -> Self {
        Self { power }
    }

    /// Does nothing unless the target is at 0 HP.
    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        if ctx.target_ref().hp() > 0 {
            return None;
        }
        let element = ctx.ability.element;
        let power = points(scaled_power(ctx, &self.power, &[BonusTag::Healing], element));

        let target = ctx.target();
        let hp = power.min(target.max_hp());
        target.set_hp(hp);
        target
            .modifiers
            .remove_statuses(|s| matches!(s.kind, StatusKind::Dead | StatusKind::Unconscious));

        tracing::debug!(target = %ctx.target_id(), hp, "revived");
        Some(EffectResult::new(ctx.target_id(), EffectOutcome::Revived { hp }))
    }
}
