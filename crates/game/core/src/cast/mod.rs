//! Casting: validation, target resolution, effect execution and results.
//!
//! [`SpellEngine`](crate::engine::SpellEngine) drives these pieces in a fixed
//! order: validate, pay, start the cooldown, run the pipeline, post-process
//! combos.
#[cfg(test)]
pub(crate) mod bench;
mod combo;
mod context;
pub(crate) mod incoming;
pub(crate) mod pipeline;
mod result;
pub(crate) mod scaling;
mod targets;
mod validation;

pub use context::{EffectContext, Roller};
pub use result::{CastCheck, CastOutcome, ComboMarker, DamageDealt, EffectOutcome, EffectResult};
pub use targets::CastTargets;
pub use validation::CastRejection;

pub(crate) use targets::Participants;
pub(crate) use validation::CastValidator;
