//! Test harness for running a single effect against hand-built actors.

use crate::ability::{AbilityDefinition, TargetType};
use crate::config::EngineConfig;
use crate::env::{RngOracle, SpellEnv, StaticCatalog, StaticWorld};
use crate::state::{Actor, ActorClass, ActorId, ActorStats, Timestamp};

use super::context::{EffectContext, Roller};

pub(crate) struct Bench {
    pub config: EngineConfig,
    pub world: StaticWorld,
    pub ability: AbilityDefinition,
    pub prior_uses: u32,
    pub hop: Option<u32>,
}

impl Default for Bench {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            world: StaticWorld::default(),
            ability: AbilityDefinition::new("probe", "Probe", TargetType::SingleEnemy),
            prior_uses: 0,
            hop: None,
        }
    }
}

impl Bench {
    pub fn run<R>(
        &self,
        rng: &dyn RngOracle,
        caster: &mut Actor,
        target: Option<&mut Actor>,
        f: impl FnOnce(&mut EffectContext<'_, '_>) -> R,
    ) -> R {
        let catalog = StaticCatalog::new();
        let env = SpellEnv::new(&catalog, &self.world, rng);
        let mut roller = Roller::new(rng, 7, 1, caster.id);
        let mut ctx = EffectContext {
            caster,
            target,
            ability: &self.ability,
            config: &self.config,
            env,
            roller: &mut roller,
            now: Timestamp::ZERO,
            prior_uses: self.prior_uses,
            hop: self.hop,
        };
        f(&mut ctx)
    }
}

/// Level 10 wizard with 100 HP and zeroed secondary stats.
pub(crate) fn caster() -> Actor {
    Actor::new(ActorId(1), "Ada", ActorClass::Wizard, 10).with_stats(ActorStats::with_hp(100))
}

/// Defenseless monster with `hp` hit points.
pub(crate) fn dummy(hp: u32) -> Actor {
    Actor::new(ActorId(2), "Dummy", ActorClass::Monster, 5).with_stats(ActorStats::with_hp(hp))
}
