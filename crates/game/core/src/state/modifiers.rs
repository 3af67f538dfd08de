//! Unified timed-modifier collection.
//!
//! Statuses, shields, absorptions, reflections, stat changes and
//! transformations all live in one ordered list per actor. Insertion order is
//! preserved, which is what makes absorption consumption FIFO.
//!
//! # Tick-based Duration
//!
//! `ticks_left` counts discrete ticks. [`TimedModifiers::sweep`] decrements
//! every finite duration by one and drops records that reached zero or whose
//! ward capacity is exhausted. `None` marks a record that only an effect can
//! remove (e.g. `dead`).

use super::actor::StatName;
use super::common::{AbilityId, ActorId, Timestamp};
use super::status::{StatusKind, StatusTags};

/// A status condition payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub tags: StatusTags,
    /// HP lost by the bearer on every tick (damage over time).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick_damage: u32,
    /// HP restored to the bearer on every tick (heal over time).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick_heal: u32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind) -> Self {
        let tags = kind.default_tags();
        Self {
            kind,
            tags,
            tick_damage: 0,
            tick_heal: 0,
        }
    }
}

/// What a timed modifier does.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierKind {
    Status(StatusEffect),

    /// Absorbs incoming damage after absorptions; cleared by dispel.
    Shield { capacity: u32 },

    /// Absorbs incoming damage first, optionally healing whoever placed it.
    Absorption { capacity: u32, heal_source: bool },

    /// Redirects `fraction` of an incoming hit back to the attacker with `chance`.
    Reflection { chance: f64, fraction: f64 },

    /// Flat change to a secondary stat.
    StatChange { stat: StatName, delta: i32 },

    /// Alternate form, interpreted by rendering/world systems.
    Transformation { form: String },
}

impl ModifierKind {
    pub fn category(&self) -> ModifierCategory {
        match self {
            Self::Status(_) => ModifierCategory::Status,
            Self::Shield { .. } => ModifierCategory::Shield,
            Self::Absorption { .. } => ModifierCategory::Absorption,
            Self::Reflection { .. } => ModifierCategory::Reflection,
            Self::StatChange { .. } => ModifierCategory::StatChange,
            Self::Transformation { .. } => ModifierCategory::Transformation,
        }
    }

    /// Wards with no capacity left are dead weight.
    fn is_exhausted(&self) -> bool {
        matches!(
            self,
            Self::Shield { capacity: 0 } | Self::Absorption { capacity: 0, .. }
        )
    }
}

/// Discriminant of [`ModifierKind`], used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ModifierCategory {
    Status,
    Shield,
    Absorption,
    Reflection,
    StatChange,
    Transformation,
}

/// A single timed record on an actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedModifier {
    pub kind: ModifierKind,
    /// Remaining ticks; `None` never expires on its own.
    pub ticks_left: Option<u32>,
    /// Ability that created the record.
    pub source: Option<AbilityId>,
    /// Actor that applied the record.
    pub applied_by: Option<ActorId>,
    pub applied_at: Timestamp,
}

impl TimedModifier {
    pub fn new(kind: ModifierKind, ticks_left: Option<u32>) -> Self {
        Self {
            kind,
            ticks_left,
            source: None,
            applied_by: None,
            applied_at: Timestamp::ZERO,
        }
    }

    /// Builder: record the ability, applier and time of application.
    pub fn applied(mut self, source: &AbilityId, applied_by: ActorId, at: Timestamp) -> Self {
        self.source = Some(source.clone());
        self.applied_by = Some(applied_by);
        self.applied_at = at;
        self
    }

    pub fn status(&self) -> Option<&StatusEffect> {
        match &self.kind {
            ModifierKind::Status(status) => Some(status),
            _ => None,
        }
    }
}

/// Ordered timed modifiers of one actor.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimedModifiers {
    entries: Vec<TimedModifier>,
}

impl TimedModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end (newest last).
    pub fn push(&mut self, modifier: TimedModifier) {
        self.entries.push(modifier);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimedModifier> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TimedModifier> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records of one category, oldest first.
    pub fn of(&self, category: ModifierCategory) -> impl Iterator<Item = &TimedModifier> {
        self.entries
            .iter()
            .filter(move |m| m.kind.category() == category)
    }

    /// Active status payloads, oldest first.
    pub fn statuses(&self) -> impl Iterator<Item = &StatusEffect> {
        self.entries.iter().filter_map(TimedModifier::status)
    }

    pub fn has_status(&self, kind: &StatusKind) -> bool {
        self.statuses().any(|s| &s.kind == kind)
    }

    /// Removes every status matching `predicate`, returning how many went.
    pub fn remove_statuses(&mut self, mut predicate: impl FnMut(&StatusEffect) -> bool) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|m| m.status().is_none_or(|status| !predicate(status)));
        before - self.entries.len()
    }

    /// Removes every record of `category`, returning how many went.
    pub fn clear(&mut self, category: ModifierCategory) -> usize {
        let before = self.entries.len();
        self.entries.retain(|m| m.kind.category() != category);
        before - self.entries.len()
    }

    /// Net change to `stat` from active stat modifiers.
    pub fn stat_delta(&self, stat: StatName) -> i32 {
        self.entries
            .iter()
            .filter_map(|m| match m.kind {
                ModifierKind::StatChange { stat: s, delta } if s == stat => Some(delta),
                _ => None,
            })
            .sum()
    }

    /// Total (damage, heal) the bearer takes from over-time statuses this tick.
    pub fn over_time(&self) -> (u32, u32) {
        self.statuses().fold((0, 0), |(dmg, heal), s| {
            (dmg.saturating_add(s.tick_damage), heal.saturating_add(s.tick_heal))
        })
    }

    /// Drops exhausted wards without touching durations.
    pub fn prune_exhausted(&mut self) {
        self.entries.retain(|m| !m.kind.is_exhausted());
    }

    /// Advances every duration by one tick and removes expired records.
    ///
    /// Returns the removed records so callers can report expirations.
    pub fn sweep(&mut self) -> Vec<TimedModifier> {
        let mut expired = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for mut modifier in self.entries.drain(..) {
            if let Some(ticks) = modifier.ticks_left.as_mut() {
                *ticks = ticks.saturating_sub(1);
            }
            if modifier.ticks_left == Some(0) || modifier.kind.is_exhausted() {
                expired.push(modifier);
            } else {
                kept.push(modifier);
            }
        }
        self.entries = kept;
        expired
    }
}
