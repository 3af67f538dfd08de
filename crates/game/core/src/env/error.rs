//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::AbilityId;

/// Errors raised by catalog construction and strict lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Ability definition was not found by id.
    #[error("ability '{0}' not found in catalog")]
    AbilityNotFound(AbilityId),

    /// Two catalog entries share an id.
    #[error("ability '{0}' defined more than once")]
    DuplicateAbility(AbilityId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AbilityNotFound(_) => ErrorSeverity::Validation,
            Self::DuplicateAbility(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AbilityNotFound(_) => "ORACLE_ABILITY_NOT_FOUND",
            Self::DuplicateAbility(_) => "ORACLE_DUPLICATE_ABILITY",
        }
    }
}
