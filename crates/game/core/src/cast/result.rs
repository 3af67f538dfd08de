//! Typed records produced by a cast.
//!
//! Rendering and notification layers consume these; nothing in the engine
//! reads them back except the combo post-processor.

use crate::state::{ActorId, Element, StatName, StatusKind};

use super::validation::CastRejection;

/// Damage as it landed on one target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageDealt {
    /// Damage after variance, before wards.
    pub amount: u32,
    pub element: Element,
    pub absorbed: u32,
    pub shielded: u32,
    /// Portion sent back to the caster by reflections.
    pub reflected: u32,
    /// HP the target actually lost.
    pub hp_lost: u32,
    pub overkill: u32,
    /// Chain hop index, for chain damage.
    pub hop: Option<u32>,
    /// Absorption heals owed to ward appliers who were not part of the cast.
    /// The caller owns those actors and settles these.
    pub source_heals: Vec<(ActorId, u32)>,
}

/// Secondary effects synthesized from the primary results.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ComboMarker {
    /// A single cast both damaged and healed.
    LifeSteal,
    /// Many statuses landed at once.
    OverwhelmingDebuff { statuses: usize, bonus_damage: u32 },
}

/// Kind-specific part of an [`EffectResult`].
#[derive(Clone, Debug, PartialEq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectOutcome {
    Damage(DamageDealt),
    Heal {
        amount: u32,
        overheal: u32,
    },
    StatChange {
        stat: StatName,
        delta: i32,
        duration: u32,
    },
    StatusApplied {
        status: StatusKind,
        duration: u32,
        /// Added by the combo post-processor rather than an effect spec.
        synthesized: bool,
    },
    StatusRemoved {
        removed: usize,
    },
    ManaRestored {
        amount: u32,
    },
    ManaDrained {
        amount: u32,
        transferred: u32,
    },
    Revived {
        hp: u32,
    },
    Shield {
        capacity: u32,
        duration: u32,
    },
    Absorption {
        capacity: u32,
        duration: u32,
    },
    Reflection {
        chance: f64,
        fraction: f64,
        duration: u32,
    },
    Dispelled {
        statuses: usize,
        shields: usize,
    },
    Teleported {
        destination: String,
    },
    Summoned {
        template: String,
        count: u32,
        duration: Option<u32>,
    },
    Transformed {
        form: String,
        duration: Option<u32>,
    },
    Combo(ComboMarker),
}

/// One applied effect against one target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectResult {
    pub target: ActorId,
    pub critical: bool,
    pub outcome: EffectOutcome,
}

impl EffectResult {
    pub fn new(target: ActorId, outcome: EffectOutcome) -> Self {
        Self {
            target,
            critical: false,
            outcome,
        }
    }

    /// Builder: mark as critical.
    pub fn critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    /// Stable snake_case kind name (`"damage"`, `"status_applied"`, ...).
    pub fn kind(&self) -> &str {
        self.outcome.as_ref()
    }

    /// Headline number of the effect.
    pub fn magnitude(&self) -> u32 {
        match &self.outcome {
            EffectOutcome::Damage(hit) => hit.amount,
            EffectOutcome::Heal { amount, .. }
            | EffectOutcome::ManaRestored { amount }
            | EffectOutcome::ManaDrained { amount, .. } => *amount,
            EffectOutcome::StatChange { delta, .. } => delta.unsigned_abs(),
            EffectOutcome::StatusApplied { duration, .. } => *duration,
            EffectOutcome::StatusRemoved { removed } => *removed as u32,
            EffectOutcome::Revived { hp } => *hp,
            EffectOutcome::Shield { capacity, .. } | EffectOutcome::Absorption { capacity, .. } => {
                *capacity
            }
            EffectOutcome::Dispelled { statuses, shields } => (statuses + shields) as u32,
            EffectOutcome::Summoned { count, .. } => *count,
            EffectOutcome::Combo(ComboMarker::OverwhelmingDebuff { bonus_damage, .. }) => {
                *bonus_damage
            }
            EffectOutcome::Reflection { .. }
            | EffectOutcome::Teleported { .. }
            | EffectOutcome::Transformed { .. }
            | EffectOutcome::Combo(ComboMarker::LifeSteal) => 0,
        }
    }

    pub fn damage(&self) -> Option<&DamageDealt> {
        match &self.outcome {
            EffectOutcome::Damage(hit) => Some(hit),
            _ => None,
        }
    }

    pub fn is_heal(&self) -> bool {
        matches!(self.outcome, EffectOutcome::Heal { .. })
    }

    /// Status applications written by an effect spec (not by a combo).
    pub fn is_primary_status(&self) -> bool {
        matches!(
            self.outcome,
            EffectOutcome::StatusApplied {
                synthesized: false,
                ..
            }
        )
    }
}

/// Result of a cast request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastOutcome {
    pub success: bool,
    pub reason: Option<CastRejection>,
    pub effects: Vec<EffectResult>,
    /// Mana spent.
    pub resource_consumed: u32,
}

impl CastOutcome {
    pub fn rejected(reason: CastRejection) -> Self {
        Self {
            success: false,
            reason: Some(reason),
            effects: Vec::new(),
            resource_consumed: 0,
        }
    }

    pub fn completed(effects: Vec<EffectResult>, resource_consumed: u32) -> Self {
        Self {
            success: true,
            reason: None,
            effects,
            resource_consumed,
        }
    }

    /// Sum of damage dealt across all targets.
    pub fn total_damage(&self) -> u32 {
        self.effects
            .iter()
            .filter_map(EffectResult::damage)
            .map(|hit| hit.amount)
            .sum()
    }

    /// Results whose kind matches `kind`.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a EffectResult> {
        self.effects.iter().filter(move |e| e.kind() == kind)
    }
}

/// Answer to a cast pre-check.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastCheck {
    pub can_cast: bool,
    pub reason: Option<CastRejection>,
}

impl From<Result<(), CastRejection>> for CastCheck {
    fn from(result: Result<(), CastRejection>) -> Self {
        match result {
            Ok(()) => Self {
                can_cast: true,
                reason: None,
            },
            Err(reason) => Self {
                can_cast: false,
                reason: Some(reason),
            },
        }
    }
}
