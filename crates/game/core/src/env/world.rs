//! World context oracle: area, time of day, combat and affinities.

use std::collections::BTreeMap;

use crate::state::Element;

/// Coarse time of day used by environmental restrictions.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TimeOfDay {
    Dawn,
    #[default]
    Day,
    Dusk,
    Night,
}

/// Read-only view of the world around the caster.
pub trait WorldContext: Send + Sync {
    fn current_area(&self) -> &str;

    fn time_of_day(&self) -> TimeOfDay;

    fn is_combat_active(&self) -> bool;

    /// Inns, shrines and camps regenerate at the rest rate.
    fn is_rest_area(&self) -> bool {
        false
    }

    /// Multiplier the current area applies to effects of `element`.
    fn element_affinity(&self, _element: Element) -> f64 {
        1.0
    }
}

/// Fixed world context, configured up front.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StaticWorld {
    pub area: String,
    pub time: TimeOfDay,
    pub combat: bool,
    pub rest_area: bool,
    pub affinities: BTreeMap<Element, f64>,
}

impl Default for StaticWorld {
    fn default() -> Self {
        Self {
            area: "overworld".to_owned(),
            time: TimeOfDay::Day,
            combat: false,
            rest_area: false,
            affinities: BTreeMap::new(),
        }
    }
}

impl StaticWorld {
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            ..Self::default()
        }
    }

    pub fn in_combat(mut self, combat: bool) -> Self {
        self.combat = combat;
        self
    }

    pub fn at(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    pub fn resting(mut self, rest_area: bool) -> Self {
        self.rest_area = rest_area;
        self
    }

    pub fn with_affinity(mut self, element: Element, multiplier: f64) -> Self {
        self.affinities.insert(element, multiplier);
        self
    }
}

impl WorldContext for StaticWorld {
    fn current_area(&self) -> &str {
        &self.area
    }

    fn time_of_day(&self) -> TimeOfDay {
        self.time
    }

    fn is_combat_active(&self) -> bool {
        self.combat
    }

    fn is_rest_area(&self) -> bool {
        self.rest_area
    }

    fn element_affinity(&self, element: Element) -> f64 {
        self.affinities.get(&element).copied().unwrap_or(1.0)
    }
}
