//! Catalog-side ability definitions.

use crate::env::TimeOfDay;
use crate::state::{AbilityId, ActorClass, Element};

use crate::effect::EffectSpec;

/// Who an ability may be aimed at.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetType {
    /// The caster.
    #[strum(serialize = "self")]
    SelfTarget,
    SingleAlly,
    SingleEnemy,
    AllAllies,
    AllEnemies,
    /// A fallen ally (revival spells).
    DeadAlly,
}

impl TargetType {
    /// Single-target types fail validation without an explicit target.
    pub const fn requires_target(self) -> bool {
        matches!(self, Self::SingleAlly | Self::SingleEnemy | Self::DeadAlly)
    }
}

/// Where and when an ability may be cast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvironmentRestriction {
    /// Areas where casting is forbidden.
    pub forbidden_areas: Vec<String>,
    /// If non-empty, casting is only allowed in one of these areas.
    pub required_areas: Vec<String>,
    pub time_of_day: Option<TimeOfDay>,
}

/// A read-only ability entry from the catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    pub id: AbilityId,
    pub name: String,
    /// Mana consumed per cast.
    pub mp_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown_secs: f64,
    /// Level at which the ability becomes learnable.
    pub learn_level: u32,
    /// Classes allowed to learn the ability; empty means every class.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_classes: Vec<ActorClass>,
    pub target: TargetType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restriction: Option<EnvironmentRestriction>,
    pub effects: Vec<EffectSpec>,
}

impl AbilityDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, target: TargetType) -> Self {
        Self {
            id: AbilityId::new(id),
            name: name.into(),
            mp_cost: 0,
            cooldown_secs: 0.0,
            learn_level: 1,
            allowed_classes: Vec::new(),
            target,
            element: Element::Neutral,
            restriction: None,
            effects: Vec::new(),
        }
    }

    /// Builder: mana cost.
    pub fn with_cost(mut self, mp_cost: u32) -> Self {
        self.mp_cost = mp_cost;
        self
    }

    /// Builder: cooldown in seconds.
    pub fn with_cooldown(mut self, secs: f64) -> Self {
        self.cooldown_secs = secs;
        self
    }

    /// Builder: learn level.
    pub fn with_learn_level(mut self, level: u32) -> Self {
        self.learn_level = level;
        self
    }

    /// Builder: element tag.
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Builder: restrict to classes.
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = ActorClass>) -> Self {
        self.allowed_classes = classes.into_iter().collect();
        self
    }

    /// Builder: environmental restriction.
    pub fn with_restriction(mut self, restriction: EnvironmentRestriction) -> Self {
        self.restriction = Some(restriction);
        self
    }

    /// Builder: append an effect.
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn allows_class(&self, class: ActorClass) -> bool {
        self.allowed_classes.is_empty() || self.allowed_classes.contains(&class)
    }

    /// Cooldown in engine milliseconds; zero when the ability has none.
    pub fn cooldown_ms(&self) -> u64 {
        if self.cooldown_secs > 0.0 {
            (self.cooldown_secs * 1_000.0).round() as u64
        } else {
            0
        }
    }
}
