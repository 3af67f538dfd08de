//! Per-actor, per-ability cooldown expiries.

use std::collections::BTreeMap;

use crate::state::{AbilityId, ActorId, Timestamp};

/// Structured cooldown key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownKey {
    pub actor: ActorId,
    pub ability: AbilityId,
}

impl CooldownKey {
    pub fn new(actor: ActorId, ability: &AbilityId) -> Self {
        Self {
            actor,
            ability: ability.clone(),
        }
    }
}

/// Absolute expiry timestamps, pruned lazily on lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CooldownLedger {
    expiries: BTreeMap<CooldownKey, Timestamp>,
}

impl CooldownLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a cooldown of `duration_ms`; zero does nothing.
    pub fn start(&mut self, actor: ActorId, ability: &AbilityId, duration_ms: u64, now: Timestamp) {
        if duration_ms == 0 {
            return;
        }
        self.expiries
            .insert(CooldownKey::new(actor, ability), now + duration_ms);
    }

    /// True while the cooldown runs; drops the entry once it has passed.
    pub fn is_on_cooldown(&mut self, actor: ActorId, ability: &AbilityId, now: Timestamp) -> bool {
        let key = CooldownKey::new(actor, ability);
        match self.expiries.get(&key) {
            Some(expiry) if *expiry > now => true,
            Some(_) => {
                self.expiries.remove(&key);
                false
            }
            None => false,
        }
    }

    /// Seconds until the cooldown ends, zero when it is not running.
    pub fn remaining_seconds(&self, actor: ActorId, ability: &AbilityId, now: Timestamp) -> f64 {
        self.expiries
            .get(&CooldownKey::new(actor, ability))
            .map(|expiry| now.millis_until(*expiry) as f64 / 1_000.0)
            .unwrap_or(0.0)
    }

    /// Removes every cooldown of `actor`, returning how many were cleared.
    pub fn clear_all(&mut self, actor: ActorId) -> usize {
        let before = self.expiries.len();
        self.expiries.retain(|key, _| key.actor != actor);
        before - self.expiries.len()
    }

    /// Tracked entries, expired ones included until looked up.
    pub fn len(&self) -> usize {
        self.expiries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expiries.is_empty()
    }
}
