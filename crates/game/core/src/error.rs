//! Common error infrastructure for spellcraft-core.
//!
//! Domain-specific rejections (e.g. [`CastRejection`](crate::cast::CastRejection),
//! [`LearnRejection`](crate::ledger::LearnRejection)) live next to the component
//! that produces them. This module provides the shared classification they all
//! implement so callers can route any of them the same way.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error type with specific variants
//! - **Distinguishable**: Every variant carries a stable error code
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed later (cooldown, low mana)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with an alternative action.
    ///
    /// Examples: ability on cooldown, not enough mana
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: ability not learned, missing target
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs in the caller contract and should be investigated.
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Lowercase label used in log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Waiting (cooldown, regeneration) may turn the rejection into a success.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// The engine or its caller broke a contract.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all spellcraft-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Presentation layers key localized messages off this code.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
