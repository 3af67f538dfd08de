//! Cast pre-validation.
//!
//! Checks run in a fixed order and stop at the first failure, so every
//! rejection names exactly one reason. Nothing here mutates actor or ledger
//! state.

use crate::ability::{AbilityDefinition, TargetType};
use crate::config::EngineConfig;
use crate::env::{SpellEnv, TimeOfDay};
use crate::error::{ErrorSeverity, GameError};
use crate::ledger::{CooldownLedger, ResourceLedger};
use crate::state::{AbilityId, Actor, StatusKind, Timestamp};

/// Why a cast was refused.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastRejection {
    #[error("ability '{0}' does not exist")]
    UnknownAbility(AbilityId),

    #[error("ability '{0}' has not been learned")]
    NotLearned(AbilityId),

    #[error("insufficient MP: need {required}, have {available} (short by {shortfall})")]
    InsufficientMp {
        required: u32,
        available: u32,
        shortfall: u32,
    },

    #[error("ability is on cooldown for {remaining_secs:.1}s")]
    OnCooldown { remaining_secs: f64 },

    #[error("{target_type} ability requires a target")]
    MissingTarget { target_type: TargetType },

    #[error("cannot cast while affected by {0}")]
    BlockedByStatus(StatusKind),

    #[error("ability cannot be cast in {area}")]
    ForbiddenArea { area: String },

    #[error("ability can only be cast in {}", .required.join(", "))]
    RequiredArea { required: Vec<String> },

    #[error("ability can only be cast at {required}")]
    WrongTimeOfDay { required: TimeOfDay },
}

impl GameError for CastRejection {
    fn severity(&self) -> ErrorSeverity {
        use CastRejection::*;
        match self {
            InsufficientMp { .. } | OnCooldown { .. } | BlockedByStatus(_) => {
                ErrorSeverity::Recoverable
            }
            ForbiddenArea { .. } | RequiredArea { .. } | WrongTimeOfDay { .. } => {
                ErrorSeverity::Recoverable
            }
            UnknownAbility(_) | NotLearned(_) | MissingTarget { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CastRejection::*;
        match self {
            UnknownAbility(_) => "CAST_UNKNOWN_ABILITY",
            NotLearned(_) => "CAST_NOT_LEARNED",
            InsufficientMp { .. } => "CAST_INSUFFICIENT_MP",
            OnCooldown { .. } => "CAST_ON_COOLDOWN",
            MissingTarget { .. } => "CAST_MISSING_TARGET",
            BlockedByStatus(_) => "CAST_BLOCKED_BY_STATUS",
            ForbiddenArea { .. } => "CAST_FORBIDDEN_AREA",
            RequiredArea { .. } => "CAST_REQUIRED_AREA",
            WrongTimeOfDay { .. } => "CAST_WRONG_TIME_OF_DAY",
        }
    }
}

/// Read-only view of everything a cast check consults.
pub(crate) struct CastValidator<'v, 'e> {
    pub env: SpellEnv<'e>,
    pub config: &'v EngineConfig,
    pub cooldowns: &'v CooldownLedger,
    pub now: Timestamp,
}

impl<'e> CastValidator<'_, 'e> {
    /// Runs every check in order, returning the ability on success.
    pub fn validate(
        &self,
        caster: &Actor,
        ability_id: &AbilityId,
        has_target: bool,
    ) -> Result<&'e AbilityDefinition, CastRejection> {
        let ability = self
            .env
            .catalog()
            .ability(ability_id)
            .ok_or_else(|| CastRejection::UnknownAbility(ability_id.clone()))?;
        if !caster.knows(ability_id) {
            return Err(CastRejection::NotLearned(ability_id.clone()));
        }

        let available = ResourceLedger::new(self.config).available_mp(caster);
        if available < ability.mp_cost {
            return Err(CastRejection::InsufficientMp {
                required: ability.mp_cost,
                available,
                shortfall: ability.mp_cost - available,
            });
        }

        let remaining_secs = self
            .cooldowns
            .remaining_seconds(caster.id, ability_id, self.now);
        if remaining_secs > 0.0 {
            return Err(CastRejection::OnCooldown { remaining_secs });
        }

        if ability.target.requires_target() && !has_target {
            return Err(CastRejection::MissingTarget {
                target_type: ability.target,
            });
        }

        if let Some(blocker) = caster
            .modifiers
            .statuses()
            .find(|s| s.kind.blocks_casting())
        {
            return Err(CastRejection::BlockedByStatus(blocker.kind.clone()));
        }

        self.check_environment(ability)?;
        Ok(ability)
    }

    fn check_environment(&self, ability: &AbilityDefinition) -> Result<(), CastRejection> {
        let Some(restriction) = &ability.restriction else {
            return Ok(());
        };
        let world = self.env.world();
        let area = world.current_area();

        if restriction.forbidden_areas.iter().any(|a| a == area) {
            return Err(CastRejection::ForbiddenArea {
                area: area.to_owned(),
            });
        }
        if !restriction.required_areas.is_empty()
            && !restriction.required_areas.iter().any(|a| a == area)
        {
            return Err(CastRejection::RequiredArea {
                required: restriction.required_areas.clone(),
            });
        }
        if let Some(required) = restriction.time_of_day
            && world.time_of_day() != required
        {
            return Err(CastRejection::WrongTimeOfDay { required });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::EnvironmentRestriction;
    use crate::env::{ConstantRng, StaticCatalog, StaticWorld};
    use crate::state::{
        AcquisitionMeta, AcquisitionRecord, AcquisitionSource, ActorClass, ActorId, ActorStats,
        ModifierKind, StatusEffect, TimedModifier,
    };

    fn catalog() -> StaticCatalog {
        StaticCatalog::from_definitions([
            AbilityDefinition::new("bolt", "Bolt", TargetType::SingleEnemy)
                .with_cost(10)
                .with_cooldown(30.0),
            AbilityDefinition::new("glow", "Glow", TargetType::SelfTarget).with_restriction(
                EnvironmentRestriction {
                    forbidden_areas: vec!["crypt".into()],
                    required_areas: vec![],
                    time_of_day: Some(TimeOfDay::Night),
                },
            ),
        ])
        .unwrap()
    }

    fn caster(mp: u32) -> Actor {
        let mut actor = Actor::new(ActorId(1), "Ada", ActorClass::Wizard, 10).with_stats(
            ActorStats {
                mp,
                max_mp: Some(50),
                ..ActorStats::with_hp(60)
            },
        );
        for id in ["bolt", "glow"] {
            actor.learned.push(AcquisitionRecord {
                ability: AbilityId::from(id),
                source: AcquisitionSource::LevelUp,
                learned_at: Timestamp::ZERO,
                meta: AcquisitionMeta::new(),
            });
        }
        actor
    }

    fn check(
        world: &StaticWorld,
        cooldowns: &CooldownLedger,
        actor: &Actor,
        id: &str,
        target: bool,
    ) -> Result<(), CastRejection> {
        let catalog = catalog();
        let config = EngineConfig::default();
        let validator = CastValidator {
            env: SpellEnv::new(&catalog, world, &ConstantRng::MID),
            config: &config,
            cooldowns,
            now: Timestamp::ZERO,
        };
        validator
            .validate(actor, &AbilityId::from(id), target)
            .map(|_| ())
    }

    #[test]
    fn reports_exact_shortfall() {
        let err = check(&StaticWorld::default(), &CooldownLedger::new(), &caster(5), "bolt", true)
            .unwrap_err();
        assert_eq!(
            err,
            CastRejection::InsufficientMp {
                required: 10,
                available: 5,
                shortfall: 5
            }
        );
        assert_eq!(err.error_code(), "CAST_INSUFFICIENT_MP");
    }

    #[test]
    fn single_target_needs_target() {
        let err = check(&StaticWorld::default(), &CooldownLedger::new(), &caster(50), "bolt", false)
            .unwrap_err();
        assert!(matches!(err, CastRejection::MissingTarget { .. }));
    }

    #[test]
    fn unknown_before_not_learned() {
        let world = StaticWorld::default();
        let cooldowns = CooldownLedger::new();
        let err = check(&world, &cooldowns, &caster(50), "meteor", true).unwrap_err();
        assert!(matches!(err, CastRejection::UnknownAbility(_)));

        let mut novice = caster(50);
        novice.learned.clear();
        let err = check(&world, &cooldowns, &novice, "bolt", true).unwrap_err();
        assert!(matches!(err, CastRejection::NotLearned(_)));
    }

    #[test]
    fn silence_blocks_casting() {
        let mut actor = caster(50);
        actor.modifiers.push(TimedModifier::new(
            ModifierKind::Status(StatusEffect::new(StatusKind::Silence)),
            Some(2),
        ));
        let err = check(&StaticWorld::default(), &CooldownLedger::new(), &actor, "bolt", true)
            .unwrap_err();
        assert_eq!(err, CastRejection::BlockedByStatus(StatusKind::Silence));
    }

    #[test]
    fn environment_restrictions() {
        let cooldowns = CooldownLedger::new();
        let actor = caster(50);

        let crypt = StaticWorld::new("crypt").at(TimeOfDay::Night);
        assert!(matches!(
            check(&crypt, &cooldowns, &actor, "glow", false),
            Err(CastRejection::ForbiddenArea { .. })
        ));

        let noon = StaticWorld::new("meadow").at(TimeOfDay::Day);
        assert_eq!(
            check(&noon, &cooldowns, &actor, "glow", false),
            Err(CastRejection::WrongTimeOfDay {
                required: TimeOfDay::Night
            })
        );

        let night = StaticWorld::new("meadow").at(TimeOfDay::Night);
        assert!(check(&night, &cooldowns, &actor, "glow", false).is_ok());
    }

    #[test]
    fn cooldown_reports_remaining_seconds() {
        let mut cooldowns = CooldownLedger::new();
        cooldowns.start(ActorId(1), &AbilityId::from("bolt"), 30_000, Timestamp::ZERO);
        let err = check(&StaticWorld::default(), &cooldowns, &caster(50), "bolt", true)
            .unwrap_err();
        assert_eq!(err, CastRejection::OnCooldown { remaining_secs: 30.0 });
    }
}
