//! Scripted party-versus-monsters duel.

use anyhow::{Context, Result};
use spellcraft_core::{
    AbilityCatalog, AbilityId, Actor, ActorClass, ActorId, CastOutcome, CastTargets, Damageable,
    EffectOutcome, SpellEngine, WorldContext,
};

use crate::report::{self, Names};

/// One scripted cast.
struct Step {
    caster: u32,
    ability: &'static str,
    /// Primary target first; empty for self and untargeted abilities.
    targets: &'static [u32],
}

const SCRIPT: &[Step] = &[
    Step { caster: 1, ability: "arcane_barrier", targets: &[] },
    Step { caster: 1, ability: "ignite", targets: &[10] },
    Step { caster: 1, ability: "fireball", targets: &[10] },
    Step { caster: 2, ability: "sanctuary", targets: &[1] },
    Step { caster: 2, ability: "weaken", targets: &[10] },
    Step { caster: 1, ability: "chain_lightning", targets: &[10, 11, 12] },
    Step { caster: 1, ability: "mana_siphon", targets: &[11] },
    Step { caster: 1, ability: "fireball", targets: &[10] },
    Step { caster: 1, ability: "fireball", targets: &[10] },
    Step { caster: 1, ability: "frost_bolt", targets: &[12] },
    Step { caster: 2, ability: "mend", targets: &[1] },
    Step { caster: 1, ability: "blink", targets: &[] },
    Step { caster: 2, ability: "dispel_magic", targets: &[10] },
    Step { caster: 1, ability: "meditate", targets: &[] },
];

/// Every actor taking part, owned by the duel.
pub struct Roster {
    actors: Vec<Actor>,
}

impl Roster {
    pub fn new(actors: Vec<Actor>) -> Self {
        Self { actors }
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Borrows the caster and its targets at once.
    fn split(
        &mut self,
        caster: ActorId,
        targets: &[ActorId],
    ) -> Result<(&mut Actor, CastTargets<'_>)> {
        let mut caster_slot = None;
        let mut picked = Vec::new();
        for actor in self.actors.iter_mut() {
            if actor.id == caster {
                caster_slot = Some(actor);
            } else if let Some(order) = targets.iter().position(|t| *t == actor.id) {
                picked.push((order, actor));
            }
        }
        let caster = caster_slot.with_context(|| format!("caster {caster} is not in the roster"))?;
        picked.sort_by_key(|(order, _)| *order);

        let mut picked = picked.into_iter().map(|(_, actor)| actor);
        let targets = match picked.next() {
            Some(primary) => picked.fold(CastTargets::single(primary), CastTargets::and),
            None => CastTargets::none(),
        };
        Ok((caster, targets))
    }

    /// Pays ward heals owed to actors that were not part of the cast.
    fn settle_source_heals(&mut self, outcome: &CastOutcome) {
        let owed = outcome.effects.iter().filter_map(|e| match &e.outcome {
            EffectOutcome::Damage(hit) => Some(&hit.source_heals),
            _ => None,
        });
        for &(warder, amount) in owed.flatten() {
            if let Some(actor) = self.actors.iter_mut().find(|a| a.id == warder) {
                let healed = actor.gain_hp(amount);
                tracing::debug!(%warder, healed, "ward heal paid");
            }
        }
    }
}

/// Grants the party every ability its levels allow, then runs the script.
pub fn run(engine: &mut SpellEngine<'_>, roster: &mut Roster, step_ms: u64) -> Result<()> {
    for actor in roster
        .actors
        .iter_mut()
        .filter(|a| a.class != ActorClass::Monster)
    {
        let granted = engine.grant_level_up_abilities(actor);
        if !granted.is_empty() {
            let names: Vec<&str> = granted.iter().map(AbilityId::as_str).collect();
            println!("{} knows: {}", actor.name, names.join(", "));
        }
    }
    println!();

    for (index, step) in SCRIPT.iter().enumerate() {
        let ability = AbilityId::from(step.ability);
        let display = engine
            .env()
            .catalog()
            .ability(&ability)
            .map_or(step.ability, |a| a.name.as_str())
            .to_owned();
        let targets: Vec<ActorId> = step.targets.iter().copied().map(ActorId).collect();

        let outcome = {
            let (caster, cast_targets) = roster.split(ActorId(step.caster), &targets)?;
            if !caster.is_alive() {
                println!("[{:>2}] {} is down", index + 1, caster.name);
                continue;
            }
            engine
                .cast_at(caster, &ability, cast_targets)
                .with_context(|| format!("step {} ({})", index + 1, step.ability))?
        };

        let names = Names(roster.actors());
        println!(
            "[{:>2}] {}",
            index + 1,
            report::cast_line(&names.of(ActorId(step.caster)), &display, &outcome)
        );
        for effect in &outcome.effects {
            println!("{}", report::effect_line(effect, &names));
        }
        roster.settle_source_heals(&outcome);

        let mut everyone: Vec<&mut Actor> = roster.actors.iter_mut().collect();
        let upkeep = engine.tick(step_ms, &mut everyone);
        let names = Names(roster.actors());
        for line in report::tick_lines(&upkeep, &names) {
            println!("{line}");
        }
    }

    println!();
    for actor in roster.actors() {
        println!("{}", report::status_line(actor));
    }
    Ok(())
}

/// Moves the engine to `area` and lets the survivors recover there.
pub fn rest<'a>(
    engine: &mut SpellEngine<'a>,
    roster: &mut Roster,
    area: &'a dyn WorldContext,
    secs: u64,
) {
    engine.set_env(engine.env().with_world(area));
    println!();
    println!("The party rests at {} for {secs}s", area.current_area());

    let mut survivors: Vec<&mut Actor> = roster
        .actors
        .iter_mut()
        .filter(|a| a.class != ActorClass::Monster && a.is_alive())
        .collect();
    let upkeep = engine.tick(secs * 1_000, &mut survivors);
    let names = Names(roster.actors());
    for (id, u) in &upkeep.actors {
        println!("  ~ {}: +{} MP", names.of(*id), u.mana);
    }
}
