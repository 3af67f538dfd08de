//! Learning abilities from sources.
//!
//! A learn request walks
//! `requested → source-validated → class/level-checked → not-already-known
//! → cost-processed → committed | rejected`. The record is appended before
//! costs are paid; if paying fails the record is removed again, so a failed
//! learn never leaves partial state behind.

use crate::ability::AbilityDefinition;
use crate::config::EngineConfig;
use crate::env::{AbilityCatalog, Inventory};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    AbilityId, AcquisitionMeta, AcquisitionRecord, AcquisitionSource, Actor, ActorClass, StatName,
    Timestamp,
};

/// Why a learn request was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LearnRejection {
    #[error("ability '{0}' does not exist")]
    UnknownAbility(AbilityId),

    #[error("ability '{0}' is already known")]
    AlreadyKnown(AbilityId),

    #[error("{0} cannot learn this ability")]
    ClassNotAllowed(ActorClass),

    #[error("level {required} required (current level {actual})")]
    LevelTooLow { required: u32, actual: u32 },

    #[error("requires item '{0}'")]
    MissingItem(String),

    #[error("not enough gold: {required} required")]
    InsufficientGold { required: u32 },

    #[error("no quest granted this ability")]
    MissingQuest,

    #[error("{stat} {required} required (current {actual})")]
    StatTooLow {
        stat: StatName,
        required: i32,
        actual: i32,
    },

    #[error("paying the cost failed: {0}")]
    CostFailed(String),
}

impl GameError for LearnRejection {
    fn severity(&self) -> ErrorSeverity {
        use LearnRejection::*;
        match self {
            LevelTooLow { .. } | MissingItem(_) | InsufficientGold { .. } | StatTooLow { .. } => {
                ErrorSeverity::Recoverable
            }
            UnknownAbility(_) | AlreadyKnown(_) | ClassNotAllowed(_) | MissingQuest => {
                ErrorSeverity::Validation
            }
            CostFailed(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use LearnRejection::*;
        match self {
            UnknownAbility(_) => "LEARN_UNKNOWN_ABILITY",
            AlreadyKnown(_) => "LEARN_ALREADY_KNOWN",
            ClassNotAllowed(_) => "LEARN_CLASS_NOT_ALLOWED",
            LevelTooLow { .. } => "LEARN_LEVEL_TOO_LOW",
            MissingItem(_) => "LEARN_MISSING_ITEM",
            InsufficientGold { .. } => "LEARN_INSUFFICIENT_GOLD",
            MissingQuest => "LEARN_MISSING_QUEST",
            StatTooLow { .. } => "LEARN_STAT_TOO_LOW",
            CostFailed(_) => "LEARN_COST_FAILED",
        }
    }
}

/// Answer to a learn pre-check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnCheck {
    pub can_learn: bool,
    pub reason: Option<LearnRejection>,
}

impl From<Result<(), LearnRejection>> for LearnCheck {
    fn from(result: Result<(), LearnRejection>) -> Self {
        Self {
            can_learn: result.is_ok(),
            reason: result.err(),
        }
    }
}

/// Result of a learn request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnOutcome {
    pub success: bool,
    pub reason: Option<LearnRejection>,
    pub record: Option<AcquisitionRecord>,
}

impl From<Result<AcquisitionRecord, LearnRejection>> for LearnOutcome {
    fn from(result: Result<AcquisitionRecord, LearnRejection>) -> Self {
        match result {
            Ok(record) => Self {
                success: true,
                reason: None,
                record: Some(record),
            },
            Err(reason) => Self {
                success: false,
                reason: Some(reason),
                record: None,
            },
        }
    }
}

/// Validates and commits ability acquisitions.
#[derive(Clone, Copy)]
pub struct AcquisitionValidator<'a> {
    catalog: &'a dyn AbilityCatalog,
    config: &'a EngineConfig,
}

impl<'a> AcquisitionValidator<'a> {
    pub fn new(catalog: &'a dyn AbilityCatalog, config: &'a EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Checks every rule without mutating anything.
    pub fn validate(
        &self,
        actor: &Actor,
        ability_id: &AbilityId,
        source: AcquisitionSource,
        meta: &AcquisitionMeta,
        inventory: &dyn Inventory,
    ) -> Result<&'a AbilityDefinition, LearnRejection> {
        let ability = self
            .catalog
            .ability(ability_id)
            .ok_or_else(|| LearnRejection::UnknownAbility(ability_id.clone()))?;

        if !ability.allows_class(actor.class) {
            return Err(LearnRejection::ClassNotAllowed(actor.class));
        }
        // Already-known takes precedence over every cost check.
        if actor.knows(ability_id) {
            return Err(LearnRejection::AlreadyKnown(ability_id.clone()));
        }

        self.check_source(actor, ability, source, meta, inventory)?;
        Ok(ability)
    }

    fn check_source(
        &self,
        actor: &Actor,
        ability: &AbilityDefinition,
        source: AcquisitionSource,
        meta: &AcquisitionMeta,
        inventory: &dyn Inventory,
    ) -> Result<(), LearnRejection> {
        let min_level = match source {
            AcquisitionSource::LevelUp => ability.learn_level,
            AcquisitionSource::Scroll => ability
                .learn_level
                .saturating_sub(self.config.scroll_level_relief)
                .max(1),
            AcquisitionSource::LootDrop => ability
                .learn_level
                .saturating_sub(self.config.loot_level_relief)
                .max(1),
            _ => 0,
        };
        if actor.level < min_level {
            return Err(LearnRejection::LevelTooLow {
                required: min_level,
                actual: actor.level,
            });
        }

        match source {
            AcquisitionSource::NpcPurchase | AcquisitionSource::Trainer => {
                let cost = meta.cost.unwrap_or(0);
                if !inventory.has_gold(cost) {
                    return Err(LearnRejection::InsufficientGold { required: cost });
                }
            }
            AcquisitionSource::QuestReward if meta.quest_id.is_none() => {
                return Err(LearnRejection::MissingQuest);
            }
            AcquisitionSource::Book | AcquisitionSource::Tome => {
                if let Some((stat, required)) = meta.required_stat {
                    let actual = actor.stat(stat);
                    if actual < required {
                        return Err(LearnRejection::StatTooLow {
                            stat,
                            required,
                            actual,
                        });
                    }
                }
            }
            _ => {}
        }

        if consumes_item(source)
            && let Some(item) = &meta.item
            && !inventory.has_item(item)
        {
            return Err(LearnRejection::MissingItem(item.clone()));
        }
        Ok(())
    }

    /// Validates, appends the record, then pays costs; rolls back if paying fails.
    pub fn learn(
        &self,
        actor: &mut Actor,
        ability_id: &AbilityId,
        source: AcquisitionSource,
        meta: AcquisitionMeta,
        inventory: &mut dyn Inventory,
        now: Timestamp,
    ) -> Result<AcquisitionRecord, LearnRejection> {
        self.validate(actor, ability_id, source, &meta, inventory)?;

        let record = AcquisitionRecord {
            ability: ability_id.clone(),
            source,
            learned_at: now,
            meta,
        };
        actor.learned.push(record.clone());

        if let Err(reason) = pay_costs(&record, inventory) {
            actor.learned.retain(|r| r != &record);
            tracing::warn!(
                actor = %actor.id,
                ability = %ability_id,
                %reason,
                "learn rolled back"
            );
            return Err(reason);
        }

        tracing::info!(actor = %actor.id, ability = %ability_id, %source, "ability learned");
        Ok(record)
    }

    /// Catalog abilities the actor's class may learn at its level and does not know yet.
    pub fn learnable_abilities(&self, actor: &Actor) -> Vec<&'a AbilityDefinition> {
        self.catalog
            .abilities_for_level(actor.class, actor.level)
            .into_iter()
            .filter(|a| !actor.knows(&a.id))
            .collect()
    }

    /// Learns every ability newly unlocked by the actor's level.
    pub fn grant_level_up_abilities(&self, actor: &mut Actor, now: Timestamp) -> Vec<AbilityId> {
        let ids: Vec<AbilityId> = self
            .learnable_abilities(actor)
            .into_iter()
            .map(|a| a.id.clone())
            .collect();
        let mut granted = Vec::with_capacity(ids.len());
        let mut no_inventory = NoCost;
        for id in ids {
            if self
                .learn(
                    actor,
                    &id,
                    AcquisitionSource::LevelUp,
                    AcquisitionMeta::new(),
                    &mut no_inventory,
                    now,
                )
                .is_ok()
            {
                granted.push(id);
            }
        }
        granted
    }
}

fn consumes_item(source: AcquisitionSource) -> bool {
    matches!(
        source,
        AcquisitionSource::Scroll | AcquisitionSource::Book | AcquisitionSource::Tome
    )
}

fn pay_costs(
    record: &AcquisitionRecord,
    inventory: &mut dyn Inventory,
) -> Result<(), LearnRejection> {
    if record.source.costs_gold() {
        let cost = record.meta.cost.unwrap_or(0);
        if cost > 0 && !inventory.remove_gold(cost) {
            return Err(LearnRejection::CostFailed(format!("could not deduct {cost} gold")));
        }
    }
    if consumes_item(record.source)
        && let Some(item) = &record.meta.item
        && !inventory.remove_item(item)
    {
        return Err(LearnRejection::CostFailed(format!("could not consume '{item}'")));
    }
    Ok(())
}

/// Inventory for cost-free level-up grants.
struct NoCost;

impl Inventory for NoCost {
    fn has_item(&self, _item: &str) -> bool {
        false
    }

    fn remove_item(&mut self, _item: &str) -> bool {
        false
    }

    fn has_gold(&self, amount: u32) -> bool {
        amount == 0
    }

    fn remove_gold(&mut self, amount: u32) -> bool {
        amount == 0
    }
}
