//! Traits describing the collaborators the engine consults.
//!
//! Oracles expose the ability catalog, the world around the caster, the
//! random source and the notification sink. The [`SpellEnv`] aggregate
//! bundles them so the engine can access everything it needs without hard
//! coupling to concrete implementations.
mod catalog;
mod error;
mod inventory;
mod notify;
mod rng;
mod world;

pub use catalog::{AbilityCatalog, StaticCatalog};
pub use error::OracleError;
pub use inventory::{Inventory, Purse};
pub use notify::{Notifier, NotifySeverity, NullNotifier, TracingNotifier};
pub use rng::{ConstantRng, PcgRng, RngOracle, compute_seed};
pub use world::{StaticWorld, TimeOfDay, WorldContext};

static NULL_NOTIFIER: NullNotifier = NullNotifier;

/// Aggregates the read-only oracles required by the engine.
#[derive(Clone, Copy)]
pub struct SpellEnv<'a> {
    catalog: &'a dyn AbilityCatalog,
    world: &'a dyn WorldContext,
    rng: &'a dyn RngOracle,
    notifier: &'a dyn Notifier,
}

impl<'a> SpellEnv<'a> {
    /// Environment with notifications discarded.
    pub fn new(
        catalog: &'a dyn AbilityCatalog,
        world: &'a dyn WorldContext,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            catalog,
            world,
            rng,
            notifier: &NULL_NOTIFIER,
        }
    }

    /// Builder: route notifications to `notifier`.
    pub fn with_notifier(mut self, notifier: &'a dyn Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Builder: swap the world view (e.g. when the party changes area).
    pub fn with_world(mut self, world: &'a dyn WorldContext) -> Self {
        self.world = world;
        self
    }

    pub fn catalog(&self) -> &'a dyn AbilityCatalog {
        self.catalog
    }

    pub fn world(&self) -> &'a dyn WorldContext {
        self.world
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn notifier(&self) -> &'a dyn Notifier {
        self.notifier
    }
}

impl core::fmt::Debug for SpellEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpellEnv")
            .field("area", &self.world.current_area())
            .field("time_of_day", &self.world.time_of_day())
            .finish_non_exhaustive()
    }
}
