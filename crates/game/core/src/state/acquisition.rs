//! Records of how an actor learned its abilities.

use super::actor::StatName;
use super::common::{AbilityId, Timestamp};

/// Where an ability is learned from.
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
pub enum AcquisitionSource {
    LevelUp,
    Scroll,
    NpcPurchase,
    QuestReward,
    LootDrop,
    Trainer,
    Book,
    Tome,
}

impl AcquisitionSource {
    /// Sources that charge gold.
    pub const fn costs_gold(self) -> bool {
        matches!(self, Self::NpcPurchase | Self::Trainer)
    }
}

/// Source-specific details accompanying a learn request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcquisitionMeta {
    /// Gold price for purchases and training.
    pub cost: Option<u32>,
    pub npc_id: Option<String>,
    pub quest_id: Option<String>,
    /// Scroll flavour (e.g. `"ancient"`), informational.
    pub scroll_type: Option<String>,
    /// Inventory item consumed by learning (scroll, book, tome).
    pub item: Option<String>,
    /// Minimum stat required to study a book or tome.
    pub required_stat: Option<(StatName, i32)>,
}

impl AcquisitionMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: gold cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Builder: consumed inventory item.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Builder: quest granting the ability.
    pub fn with_quest(mut self, quest_id: impl Into<String>) -> Self {
        self.quest_id = Some(quest_id.into());
        self
    }

    /// Builder: NPC selling or teaching the ability.
    pub fn with_npc(mut self, npc_id: impl Into<String>) -> Self {
        self.npc_id = Some(npc_id.into());
        self
    }

    /// Builder: minimum stat for books.
    pub fn with_required_stat(mut self, stat: StatName, value: i32) -> Self {
        self.required_stat = Some((stat, value));
        self
    }
}

/// One successful learn. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcquisitionRecord {
    pub ability: AbilityId,
    pub source: AcquisitionSource,
    pub learned_at: Timestamp,
    pub meta: AcquisitionMeta,
}
