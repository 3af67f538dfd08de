//! Error types surfaced by the engine facade.
//!
//! Ordinary rejections travel inside [`CastOutcome`](crate::cast::CastOutcome)
//! and [`LearnOutcome`](crate::ledger::LearnOutcome). `Err` is reserved for
//! states that should have been impossible after validation.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{AbilityId, ActorId};

/// Errors surfaced while executing a cast through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error(
        "internal inconsistency: {actor} passed validation for '{ability}' but could not pay \
         {required} MP (has {available})"
    )]
    InternalInconsistency {
        actor: ActorId,
        ability: AbilityId,
        required: u32,
        available: u32,
    },
}

impl EngineError {
    pub(crate) fn unpaid(actor: ActorId, ability: &AbilityId, required: u32, available: u32) -> Self {
        Self::InternalInconsistency {
            actor,
            ability: ability.clone(),
            required,
            available,
        }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InternalInconsistency { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InternalInconsistency { .. } => "ENGINE_INTERNAL_INCONSISTENCY",
        }
    }
}
