//! Capability traits over actor resource pools.
//!
//! The effect pipeline only touches HP and MP through these traits, so any
//! actor representation that implements them can be a target.

use super::actor::Actor;
use super::common::ActorId;

/// Something with hit points.
pub trait Damageable {
    fn id(&self) -> ActorId;
    fn hp(&self) -> u32;
    fn max_hp(&self) -> u32;
    fn set_hp(&mut self, hp: u32);

    /// Subtracts `amount`, returning HP actually lost.
    fn lose_hp(&mut self, amount: u32) -> u32 {
        let before = self.hp();
        self.set_hp(before.saturating_sub(amount));
        before - self.hp()
    }

    /// Adds up to `amount` without exceeding max HP, returning HP actually gained.
    fn gain_hp(&mut self, amount: u32) -> u32 {
        let before = self.hp();
        let after = before.saturating_add(amount).min(self.max_hp().max(before));
        self.set_hp(after);
        after - before
    }
}

/// Something with a mana pool.
pub trait ManaPool {
    fn mp(&self) -> u32;
    /// Zero while the pool is uninitialized.
    fn max_mp(&self) -> u32;
    fn set_mp(&mut self, mp: u32);
}

impl Damageable for Actor {
    fn id(&self) -> ActorId {
        self.id
    }

    fn hp(&self) -> u32 {
        self.stats.hp
    }

    fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    fn set_hp(&mut self, hp: u32) {
        self.stats.hp = hp;
    }
}

impl ManaPool for Actor {
    fn mp(&self) -> u32 {
        self.stats.mp
    }

    fn max_mp(&self) -> u32 {
        self.stats.max_mp.unwrap_or(0)
    }

    fn set_mp(&mut self, mp: u32) {
        self.stats.mp = mp;
    }
}
