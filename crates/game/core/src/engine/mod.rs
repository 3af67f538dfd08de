//! The spell engine facade.
//!
//! [`SpellEngine`] owns the engine clock, the cooldown ledger, the seed and
//! the cast nonce. Actors stay with the caller and are borrowed per call.
//! Every cast flows through the same sequence:
//! validate → pay → start cooldown → count usage → resolve effects → combos.

mod errors;
mod tick;

pub use errors::EngineError;
pub use tick::{ActorUpkeep, TickReport};

use crate::ability::AbilityDefinition;
use crate::cast::pipeline::EffectPipeline;
use crate::cast::{CastCheck, CastOutcome, CastTargets, CastValidator, Participants, Roller};
use crate::config::EngineConfig;
use crate::env::{Inventory, NotifySeverity, SpellEnv};
use crate::error::GameError;
use crate::ledger::{
    AcquisitionValidator, CooldownLedger, LearnCheck, LearnOutcome, ResourceLedger,
};
use crate::state::{
    AbilityId, AcquisitionMeta, AcquisitionSource, Actor, ActorId, ManaPool, Timestamp,
};

/// Deterministic spell engine.
///
/// Given the same seed, oracles and call sequence, every cast resolves to the
/// same results.
pub struct SpellEngine<'a> {
    env: SpellEnv<'a>,
    config: EngineConfig,
    seed: u64,
    nonce: u64,
    clock: Timestamp,
    carry_ms: u64,
    cooldowns: CooldownLedger,
}

impl<'a> SpellEngine<'a> {
    /// Creates an engine with the default configuration.
    pub fn new(env: SpellEnv<'a>, seed: u64) -> Self {
        Self::with_config(env, EngineConfig::default(), seed)
    }

    pub fn with_config(env: SpellEnv<'a>, config: EngineConfig, seed: u64) -> Self {
        Self {
            env,
            config,
            seed,
            nonce: 0,
            clock: Timestamp::ZERO,
            carry_ms: 0,
            cooldowns: CooldownLedger::new(),
        }
    }

    pub fn env(&self) -> SpellEnv<'a> {
        self.env
    }

    /// Replaces the oracles, keeping clock, cooldowns and nonce.
    pub fn set_env(&mut self, env: SpellEnv<'a>) {
        self.env = env;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current engine time.
    pub fn now(&self) -> Timestamp {
        self.clock
    }

    /// Number of casts resolved so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn resources(&self) -> ResourceLedger<'_> {
        ResourceLedger::new(&self.config)
    }

    pub fn acquisitions(&self) -> AcquisitionValidator<'_> {
        AcquisitionValidator::new(self.env.catalog(), &self.config)
    }

    fn validator(&self) -> CastValidator<'_, 'a> {
        CastValidator {
            env: self.env,
            config: &self.config,
            cooldowns: &self.cooldowns,
            now: self.clock,
        }
    }

    // ========================================================================
    // Casting
    // ========================================================================

    /// Checks whether `caster` could cast `ability` right now. Mutates nothing.
    pub fn validate_cast(
        &self,
        caster: &Actor,
        ability: &AbilityId,
        target: Option<&Actor>,
    ) -> CastCheck {
        self.validator()
            .validate(caster, ability, target.is_some())
            .map(|_| ())
            .into()
    }

    /// Casts a single-target (or untargeted) ability.
    pub fn cast(
        &mut self,
        caster: &mut Actor,
        ability: &AbilityId,
        target: Option<&mut Actor>,
    ) -> Result<CastOutcome, EngineError> {
        self.cast_at(caster, ability, CastTargets::from(target))
    }

    /// Casts an ability against a primary target plus secondary targets.
    ///
    /// Validation failures come back as an unsuccessful [`CastOutcome`].
    /// `Err` means mana could not be paid after validation passed.
    pub fn cast_at(
        &mut self,
        caster: &mut Actor,
        ability_id: &AbilityId,
        targets: CastTargets<'_>,
    ) -> Result<CastOutcome, EngineError> {
        let ability = match self
            .validator()
            .validate(caster, ability_id, targets.primary.is_some())
        {
            Ok(ability) => ability,
            Err(reason) => {
                tracing::debug!(
                    caster = %caster.id,
                    ability = %ability_id,
                    code = reason.error_code(),
                    severity = reason.severity().as_str(),
                    %reason,
                    "cast rejected"
                );
                return Ok(CastOutcome::rejected(reason));
            }
        };

        self.pay(caster, ability)?;
        self.cooldowns
            .start(caster.id, &ability.id, ability.cooldown_ms(), self.clock);
        let prior_uses = caster.uses_of(&ability.id);
        *caster.usage.entry(ability.id.clone()).or_insert(0) += 1;

        self.nonce += 1;
        let mut roller = Roller::new(self.env.rng(), self.seed, self.nonce, caster.id);
        let caster_id = caster.id;

        let mut participants = Participants::new(caster, targets);
        let ledger = ResourceLedger::new(&self.config);
        for actor in participants.all_mut() {
            ledger.initialize(actor);
        }

        let pipeline = EffectPipeline {
            ability,
            config: &self.config,
            env: self.env,
            now: self.clock,
            prior_uses,
        };
        let effects = pipeline.run(&mut participants, &mut roller);

        tracing::info!(
            caster = %caster_id,
            ability = %ability.id,
            effects = effects.len(),
            mp = ability.mp_cost,
            nonce = self.nonce,
            "cast resolved"
        );
        Ok(CastOutcome::completed(effects, ability.mp_cost))
    }

    fn pay(&self, caster: &mut Actor, ability: &AbilityDefinition) -> Result<(), EngineError> {
        let ledger = ResourceLedger::new(&self.config);
        ledger.initialize(caster);
        if !ledger.consume(caster, ability.mp_cost) {
            tracing::error!(
                caster = %caster.id,
                ability = %ability.id,
                required = ability.mp_cost,
                available = caster.mp(),
                "mana payment failed after validation"
            );
            return Err(EngineError::unpaid(
                caster.id,
                &ability.id,
                ability.mp_cost,
                caster.mp(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Learning
    // ========================================================================

    /// Checks whether `actor` could learn `ability` from `source`. Mutates nothing.
    pub fn validate_learn(
        &self,
        actor: &Actor,
        ability: &AbilityId,
        source: AcquisitionSource,
        meta: &AcquisitionMeta,
        inventory: &dyn Inventory,
    ) -> LearnCheck {
        self.acquisitions()
            .validate(actor, ability, source, meta, inventory)
            .map(|_| ())
            .into()
    }

    /// Learns `ability` from `source`, paying its costs from `inventory`.
    pub fn learn(
        &self,
        actor: &mut Actor,
        ability: &AbilityId,
        source: AcquisitionSource,
        meta: AcquisitionMeta,
        inventory: &mut dyn Inventory,
    ) -> LearnOutcome {
        let result = self
            .acquisitions()
            .learn(actor, ability, source, meta, inventory, self.clock);
        let notifier = self.env.notifier();
        match &result {
            Ok(_) => notifier.notify(
                &format!("{} learned {}", actor.name, self.display_name(ability)),
                NotifySeverity::Success,
            ),
            Err(reason) => notifier.notify(
                &format!("{} could not learn {}: {reason}", actor.name, self.display_name(ability)),
                NotifySeverity::Warning,
            ),
        }
        result.into()
    }

    fn display_name(&self, ability: &AbilityId) -> String {
        self.env
            .catalog()
            .ability(ability)
            .map_or_else(|| ability.to_string(), |a| a.name.clone())
    }

    /// Catalog abilities `actor` could learn at its class and level.
    pub fn learnable_abilities(&self, actor: &Actor) -> Vec<&AbilityDefinition> {
        self.acquisitions().learnable_abilities(actor)
    }

    /// Learns every level-up ability `actor` now qualifies for.
    pub fn grant_level_up_abilities(&self, actor: &mut Actor) -> Vec<AbilityId> {
        let granted = self.acquisitions().grant_level_up_abilities(actor, self.clock);
        for id in &granted {
            self.env.notifier().notify(
                &format!("{} learned {}", actor.name, self.display_name(id)),
                NotifySeverity::Success,
            );
        }
        granted
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Advances the clock by `delta_ms` and runs one upkeep pass per whole
    /// elapsed second over `roster`.
    ///
    /// Sub-second remainders carry into the next call.
    pub fn tick(&mut self, delta_ms: u64, roster: &mut [&mut Actor]) -> TickReport {
        self.clock = self.clock + delta_ms;
        self.carry_ms = self.carry_ms.saturating_add(delta_ms);
        let seconds = self.carry_ms / EngineConfig::TICK_MS;
        self.carry_ms %= EngineConfig::TICK_MS;

        let mut report = TickReport {
            seconds,
            ..TickReport::default()
        };
        if seconds == 0 {
            return report;
        }

        let ledger = ResourceLedger::new(&self.config);
        let world = self.env.world();
        for actor in roster.iter_mut() {
            ledger.initialize(actor);
        }
        for _ in 0..seconds {
            for actor in roster.iter_mut() {
                let upkeep = report.actors.entry(actor.id).or_default();
                tick::upkeep(actor, &ledger, world, upkeep);
            }
        }
        tracing::trace!(seconds, now = %self.clock, "tick");
        report
    }

    // ========================================================================
    // Cooldowns
    // ========================================================================

    pub fn is_on_cooldown(&mut self, actor: ActorId, ability: &AbilityId) -> bool {
        self.cooldowns.is_on_cooldown(actor, ability, self.clock)
    }

    /// Seconds until `ability` is ready again for `actor` (0 when ready).
    pub fn remaining_cooldown(&self, actor: ActorId, ability: &AbilityId) -> f64 {
        self.cooldowns.remaining_seconds(actor, ability, self.clock)
    }

    /// Clears every cooldown of `actor`, returning how many were active.
    pub fn clear_cooldowns(&mut self, actor: ActorId) -> usize {
        self.cooldowns.clear_all(actor)
    }

    pub fn cooldowns(&self) -> &CooldownLedger {
        &self.cooldowns
    }
}
