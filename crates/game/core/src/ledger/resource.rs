//! Mana pool bookkeeping.
//!
//! Every change to an actor's MP goes through [`ResourceLedger`], which keeps
//! `0 ≤ mp ≤ max_mp` intact. No randomness is involved.

use crate::config::EngineConfig;
use crate::env::WorldContext;
use crate::state::{Actor, BonusTag, ManaPool, StatusKind};

/// Slack for float noise before rounding regeneration up.
const ROUNDING_SLACK: f64 = 1e-9;

/// Situation that selects the base regeneration rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RegenContext {
    Combat,
    Exploration,
    Rest,
    Meditation,
}

impl RegenContext {
    /// Picks the context for `actor` in `world`.
    ///
    /// Active combat wins over everything; then resting (status or rest
    /// area); then meditating or focused; otherwise exploration.
    pub fn resolve(actor: &Actor, world: &dyn WorldContext) -> Self {
        if world.is_combat_active() {
            Self::Combat
        } else if actor.has_status(&StatusKind::Resting) || world.is_rest_area() {
            Self::Rest
        } else if actor.has_status(&StatusKind::Meditating) || actor.has_status(&StatusKind::Focused)
        {
            Self::Meditation
        } else {
            Self::Exploration
        }
    }
}

/// Consumes, restores and regenerates mana.
#[derive(Clone, Copy, Debug)]
pub struct ResourceLedger<'a> {
    config: &'a EngineConfig,
}

impl<'a> ResourceLedger<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Maximum mana a fresh actor of this class and level starts with.
    pub fn initial_max_mp(&self, actor: &Actor) -> u32 {
        actor
            .class
            .base_mp()
            .saturating_add(self.config.mp_per_level.saturating_mul(actor.level))
    }

    /// Sets `max_mp` (and fills the pool) if it has never been set.
    ///
    /// Returns true if the actor was initialized by this call.
    pub fn initialize(&self, actor: &mut Actor) -> bool {
        if actor.stats.max_mp.is_some() {
            return false;
        }
        let max = self.initial_max_mp(actor);
        actor.stats.max_mp = Some(max);
        actor.set_mp(max);
        true
    }

    /// Mana the actor could spend right now, counting an uninitialized pool as full.
    pub fn available_mp(&self, actor: &Actor) -> u32 {
        match actor.stats.max_mp {
            Some(_) => actor.mp(),
            None => self.initial_max_mp(actor),
        }
    }

    /// Spends `amount`; false and no change if the pool is short.
    pub fn consume(&self, actor: &mut impl ManaPool, amount: u32) -> bool {
        let mp = actor.mp();
        if mp < amount {
            return false;
        }
        actor.set_mp(mp - amount);
        true
    }

    /// Adds up to `amount` without exceeding max MP, returning the amount added.
    pub fn restore(&self, actor: &mut impl ManaPool, amount: u32) -> u32 {
        let mp = actor.mp();
        let max = actor.max_mp();
        if mp >= max {
            return 0;
        }
        let next = mp.saturating_add(amount).min(max);
        actor.set_mp(next);
        next - mp
    }

    /// Mana one regeneration tick would restore, without applying it.
    pub fn regeneration_preview(&self, actor: &Actor, world: &dyn WorldContext) -> u32 {
        let max = actor.max_mp();
        if max == 0 {
            return 0;
        }
        let regen = &self.config.regen;
        let base = match RegenContext::resolve(actor, world) {
            RegenContext::Combat => regen.combat,
            RegenContext::Exploration => regen.exploration,
            RegenContext::Rest => regen.rest,
            RegenContext::Meditation => regen.meditation,
        };
        let rate = base * actor.class.regen_multiplier() + actor.level as f64 * regen.per_level;

        let status_factor = actor
            .modifiers
            .statuses()
            .filter_map(|s| s.kind.regen_multiplier())
            .product::<f64>()
            .max(regen.status_floor);

        let points = (rate * status_factor * max as f64 - ROUNDING_SLACK).ceil() as i64
            + actor.equipment.bonus(&[BonusTag::ManaRegen]) as i64;
        points.clamp(0, u32::MAX as i64) as u32
    }

    /// Applies one regeneration tick, returning the mana actually restored.
    pub fn regenerate(&self, actor: &mut Actor, world: &dyn WorldContext) -> u32 {
        let amount = self.regeneration_preview(actor, world);
        self.restore(actor, amount)
    }

    /// Current mana as a percentage of max (0 for an empty or unset pool).
    pub fn mp_percent(&self, actor: &Actor) -> f64 {
        let max = actor.max_mp();
        if max == 0 {
            return 0.0;
        }
        actor.mp() as f64 / max as f64 * 100.0
    }
}
