//! Actor-side state mutated by the engine.
//!
//! Everything here is plain data owned by the caller. The engine never keeps
//! references to actors past a single call.
mod acquisition;
mod actor;
mod common;
mod element;
mod equipment;
mod modifiers;
mod status;
mod vitals;

pub use acquisition::{AcquisitionMeta, AcquisitionRecord, AcquisitionSource};
pub use actor::{Actor, ActorClass, ActorStats, StatName};
pub use common::{AbilityId, ActorId, Timestamp};
pub use element::{DamageCategory, Element};
pub use equipment::{BonusTag, Equipment, EquipmentSlot, Item, ItemModifier};
pub use modifiers::{ModifierCategory, ModifierKind, StatusEffect, TimedModifier, TimedModifiers};
pub use status::{StatusKind, StatusTags};
pub use vitals::{Damageable, ManaPool};
