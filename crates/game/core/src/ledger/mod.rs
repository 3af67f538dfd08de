//! Ledgers owning mutable bookkeeping: mana, cooldowns and acquisitions.
mod acquisition;
mod cooldown;
mod resource;

pub use acquisition::{AcquisitionValidator, LearnCheck, LearnOutcome, LearnRejection};
pub use cooldown::{CooldownKey, CooldownLedger};
pub use resource::{RegenContext, ResourceLedger};
