//! Deterministic spell effect resolution.
//!
//! `spellcraft-core` validates casts and learn requests, resolves an
//! ability's effect specs against caller-owned actors, and keeps the mana,
//! cooldown and acquisition ledgers consistent. All mutation flows through
//! [`engine::SpellEngine`]; catalogs, world state, randomness and
//! notifications are injected through the oracle traits in [`env`].
pub mod ability;
pub mod cast;
pub mod config;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod ledger;
pub mod state;

pub use ability::{
    AbilityDefinition, CritOverride, EnvironmentRestriction, Power, StatScaling, TargetType,
};
pub use cast::{
    CastCheck, CastOutcome, CastRejection, CastTargets, ComboMarker, DamageDealt, EffectOutcome,
    EffectResult,
};
pub use config::{ComboConfig, CritConfig, EngineConfig, RegenConfig};
pub use effect::EffectSpec;
pub use engine::{ActorUpkeep, EngineError, SpellEngine, TickReport};
pub use env::{
    AbilityCatalog, ConstantRng, Inventory, Notifier, NotifySeverity, NullNotifier, OracleError,
    PcgRng, Purse, RngOracle, SpellEnv, StaticCatalog, StaticWorld, TimeOfDay, TracingNotifier,
    WorldContext,
};
pub use error::{ErrorSeverity, GameError};
pub use ledger::{
    AcquisitionValidator, CooldownLedger, LearnCheck, LearnOutcome, LearnRejection, RegenContext,
    ResourceLedger,
};
pub use state::{
    AbilityId, AcquisitionMeta, AcquisitionRecord, AcquisitionSource, Actor, ActorClass, ActorId,
    ActorStats, BonusTag, DamageCategory, Damageable, Element, Equipment, EquipmentSlot, Item,
    ManaPool, ModifierCategory, ModifierKind, StatName, StatusEffect, StatusKind, StatusTags,
    TimedModifier, TimedModifiers, Timestamp,
};
