//! Effect specs: the typed sub-effects an ability resolves, in order.
//!
//! # Architecture
//!
//! Each effect type is a struct in its own file holding the catalog data and
//! an `apply` method with that type's terminal computation. [`EffectSpec`]
//! wraps them for serialization and dispatches with an exhaustive match.
//!
//! `apply` returns `None` when the effect did not land (dead target, failed
//! chance roll). Those never reach the result list or the combo rules.

mod bookkeeping;
mod damage;
mod dispel;
mod heal;
mod mana;
mod revive;
mod stat;
mod status;
mod ward;

pub use bookkeeping::{SummonEffect, TeleportEffect, TransformEffect};
pub use damage::{ChainDamageEffect, DamageEffect};
pub use dispel::DispelEffect;
pub use heal::HealEffect;
pub use mana::{ManaDrainEffect, ManaRestoreEffect};
pub use revive::ReviveEffect;
pub use stat::StatChangeEffect;
pub use status::{InflictStatusEffect, RemoveStatusEffect};
pub use ward::{AbsorbEffect, ReflectEffect, ShieldEffect};

use crate::cast::{EffectContext, EffectResult};

/// One declarative sub-effect of an ability.
#[derive(Clone, Debug, PartialEq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectSpec {
    // ========================================================================
    // Hit points
    // ========================================================================
    Damage(DamageEffect),
    AreaDamage(DamageEffect),
    ChainDamage(ChainDamageEffect),
    Heal(HealEffect),
    Revive(ReviveEffect),

    // ========================================================================
    // Stats and statuses
    // ========================================================================
    StatBoost(StatChangeEffect),
    StatDebuff(StatChangeEffect),
    StatusInflict(InflictStatusEffect),
    RemoveStatus(RemoveStatusEffect),
    Dispel(DispelEffect),

    // ========================================================================
    // Mana
    // ========================================================================
    MpRestore(ManaRestoreEffect),
    MpDrain(ManaDrainEffect),

    // ========================================================================
    // Wards
    // ========================================================================
    Shield(ShieldEffect),
    AbsorbDamage(AbsorbEffect),
    ReflectDamage(ReflectEffect),

    // ========================================================================
    // Bookkeeping for world and rendering systems
    // ========================================================================
    Teleport(TeleportEffect),
    Summon(SummonEffect),
    Transform(TransformEffect),

    /// An effect type this engine does not implement; skipped with a warning.
    Unsupported { kind: String },
}

impl EffectSpec {
    /// Stable snake_case tag (`"damage"`, `"mp_drain"`, ...).
    pub fn tag(&self) -> &str {
        match self {
            Self::Unsupported { kind } => kind,
            known => known.as_ref(),
        }
    }

    /// False for effects that still apply to a target at 0 HP.
    pub fn needs_living_target(&self) -> bool {
        !matches!(
            self,
            Self::Revive(_)
                | Self::RemoveStatus(_)
                | Self::Dispel(_)
                | Self::Teleport(_)
                | Self::Summon(_)
                | Self::Unsupported { .. }
        )
    }

    /// Applies the effect to the context's target.
    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        if self.needs_living_target() && ctx.target_ref().stats.hp == 0 {
            tracing::debug!(
                effect = self.tag(),
                target = %ctx.target_id(),
                "target is down; effect skipped"
            );
            return None;
        }
        match self {
            Self::Damage(e) | Self::AreaDamage(e) => e.apply(ctx),
            Self::ChainDamage(e) => e.damage.apply(ctx),
            Self::Heal(e) => e.apply(ctx),
            Self::Revive(e) => e.apply(ctx),
            Self::StatBoost(e) => e.apply(ctx, 1),
            Self::StatDebuff(e) => e.apply(ctx, -1),
            Self::StatusInflict(e) => e.apply(ctx),
            Self::RemoveStatus(e) => e.apply(ctx),
            Self::Dispel(e) => e.apply(ctx),
            Self::MpRestore(e) => e.apply(ctx),
            Self::MpDrain(e) => e.apply(ctx),
            Self::Shield(e) => e.apply(ctx),
            Self::AbsorbDamage(e) => e.apply(ctx),
            Self::ReflectDamage(e) => e.apply(ctx),
            Self::Teleport(e) => e.apply(ctx),
            Self::Summon(e) => e.apply(ctx),
            Self::Transform(e) => e.apply(ctx),
            // the pipeline warns once per spec before resolving targets
            Self::Unsupported { .. } => None,
        }
    }
}
