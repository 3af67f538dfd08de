//! Plain-text rendering of cast and tick results.

use spellcraft_core::{
    Actor, ActorId, CastOutcome, ComboMarker, EffectOutcome, EffectResult, TickReport,
};

/// Resolves actor ids to display names.
pub struct Names<'a>(pub &'a [Actor]);

impl Names<'_> {
    pub fn of(&self, id: ActorId) -> String {
        self.0
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

pub fn cast_line(caster: &str, ability: &str, outcome: &CastOutcome) -> String {
    match &outcome.reason {
        Some(reason) => format!("{caster} tries {ability}: {reason}"),
        None => format!(
            "{caster} casts {ability} ({} MP, {} effects)",
            outcome.resource_consumed,
            outcome.effects.len()
        ),
    }
}

pub fn effect_line(result: &EffectResult, names: &Names<'_>) -> String {
    let target = names.of(result.target);
    let crit = if result.critical { " (critical)" } else { "" };
    let body = match &result.outcome {
        EffectOutcome::Damage(hit) => {
            let mut line = format!("{target} takes {} {} damage{crit}", hit.hp_lost, hit.element);
            if hit.absorbed + hit.shielded > 0 {
                line.push_str(&format!(", {} warded", hit.absorbed + hit.shielded));
            }
            if hit.reflected > 0 {
                line.push_str(&format!(", {} reflected", hit.reflected));
            }
            if hit.overkill > 0 {
                line.push_str(&format!(", overkill {}", hit.overkill));
            }
            if let Some(hop) = hit.hop {
                line.push_str(&format!(" [hop {hop}]"));
            }
            line
        }
        EffectOutcome::Heal { amount, overheal } => {
            format!("{target} heals {amount}{crit} (overheal {overheal})")
        }
        EffectOutcome::StatChange {
            stat,
            delta,
            duration,
        } => format!("{target} {stat} {delta:+} for {duration} ticks"),
        EffectOutcome::StatusApplied {
            status,
            duration,
            synthesized,
        } => {
            let combo = if *synthesized { " [combo]" } else { "" };
            format!("{target} is now {} for {duration} ticks{combo}", status.name())
        }
        EffectOutcome::StatusRemoved { removed } => format!("{target} loses {removed} statuses"),
        EffectOutcome::ManaRestored { amount } => format!("{target} regains {amount} MP"),
        EffectOutcome::ManaDrained {
            amount,
            transferred,
        } => format!("{target} loses {amount} MP ({transferred} siphoned)"),
        EffectOutcome::Revived { hp } => format!("{target} rises with {hp} HP"),
        EffectOutcome::Shield { capacity, duration } => {
            format!("{target} gains a {capacity}-point shield for {duration} ticks")
        }
        EffectOutcome::Absorption { capacity, duration } => {
            format!("{target} gains a {capacity}-point absorption for {duration} ticks")
        }
        EffectOutcome::Reflection {
            chance, fraction, ..
        } => format!(
            "{target} reflects {:.0}% of hits {:.0}% of the time",
            fraction * 100.0,
            chance * 100.0
        ),
        EffectOutcome::Dispelled { statuses, shields } => {
            format!("{target} is stripped of {statuses} statuses and {shields} shields")
        }
        EffectOutcome::Teleported { destination } => format!("{target} blinks to {destination}"),
        EffectOutcome::Summoned {
            template, count, ..
        } => format!("{target} summons {count} x {template}"),
        EffectOutcome::Transformed { form, .. } => format!("{target} takes the form of a {form}"),
        EffectOutcome::Combo(ComboMarker::LifeSteal) => format!("{target} drains life"),
        EffectOutcome::Combo(ComboMarker::OverwhelmingDebuff {
            statuses,
            bonus_damage,
        }) => format!("{target} is overwhelmed by {statuses} statuses (+{bonus_damage} bonus)"),
    };
    format!("  - {body}")
}

pub fn tick_lines(report: &TickReport, names: &Names<'_>) -> Vec<String> {
    report
        .actors
        .iter()
        .filter(|(_, u)| u.damage > 0 || u.healed > 0 || !u.expired.is_empty())
        .map(|(id, u)| {
            let mut parts = Vec::new();
            if u.damage > 0 {
                parts.push(format!("-{} HP", u.damage));
            }
            if u.healed > 0 {
                parts.push(format!("+{} HP", u.healed));
            }
            if !u.expired.is_empty() {
                let expired: Vec<String> = u.expired.iter().map(ToString::to_string).collect();
                parts.push(format!("expired: {}", expired.join(", ")));
            }
            format!("  ~ {}: {}", names.of(*id), parts.join("; "))
        })
        .collect()
}

pub fn status_line(actor: &Actor) -> String {
    let statuses: Vec<&str> = actor.modifiers.statuses().map(|s| s.kind.name()).collect();
    format!(
        "{:<14} L{:<2} {:<8} HP {:>3}/{:<3} MP {:>3}/{:<3} {}",
        actor.name,
        actor.level,
        actor.class,
        actor.stats.hp,
        actor.stats.max_hp,
        actor.stats.mp,
        actor.stats.max_mp.unwrap_or(0),
        statuses.join(" ")
    )
}
