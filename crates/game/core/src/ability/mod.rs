//! Read-only ability catalog entries.
//!
//! An [`AbilityDefinition`] is what the catalog hands the engine: cost,
//! cooldown, learn rules, targeting and the ordered list of
//! [`EffectSpec`](crate::effect::EffectSpec)s a cast resolves.
mod definition;
mod power;

pub use definition::{AbilityDefinition, EnvironmentRestriction, TargetType};
pub use power::{CritOverride, Power, StatScaling};
