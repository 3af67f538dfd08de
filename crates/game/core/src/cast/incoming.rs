//! Incoming-damage processing against the target's wards.
//!
//! Order: absorptions (oldest first), then shields, then one independent
//! reflection roll per reflection record. Whatever is left comes off HP.

use crate::state::{ActorId, Damageable, Element, ModifierCategory, ModifierKind};

use super::context::EffectContext;
use super::result::DamageDealt;

/// Runs `amount` of `element` damage through the target's wards and HP.
pub(crate) fn receive(ctx: &mut EffectContext<'_, '_>, amount: u32, element: Element) -> DamageDealt {
    let mut remaining = amount;
    let mut absorbed = 0;
    let mut shielded = 0;
    let mut heals: Vec<(ActorId, u32)> = Vec::new();

    let target = ctx.target();
    for modifier in target.modifiers.iter_mut() {
        if remaining == 0 {
            break;
        }
        let applied_by = modifier.applied_by;
        if let ModifierKind::Absorption {
            capacity,
            heal_source,
        } = &mut modifier.kind
        {
            let taken = remaining.min(*capacity);
            *capacity -= taken;
            remaining -= taken;
            absorbed += taken;
            if *heal_source
                && taken > 0
                && let Some(by) = applied_by
            {
                heals.push((by, taken));
            }
        }
    }
    for modifier in target.modifiers.iter_mut() {
        if remaining == 0 {
            break;
        }
        if let ModifierKind::Shield { capacity } = &mut modifier.kind {
            let taken = remaining.min(*capacity);
            *capacity -= taken;
            remaining -= taken;
            shielded += taken;
        }
    }

    // A caster never reflects its own spell back at itself.
    let mut reflected = 0;
    if !ctx.targets_caster() {
        let reflections: Vec<(f64, f64)> = ctx
            .target_ref()
            .modifiers
            .of(ModifierCategory::Reflection)
            .filter_map(|m| match m.kind {
                ModifierKind::Reflection { chance, fraction } => Some((chance, fraction)),
                _ => None,
            })
            .collect();
        for (chance, fraction) in reflections {
            if ctx.roller.chance(chance) {
                let bounced = ((remaining as f64 * fraction).floor() as u32).min(remaining);
                remaining -= bounced;
                reflected += bounced;
            }
        }
    }

    let target = ctx.target();
    let hp_before = target.hp();
    let hp_lost = target.lose_hp(remaining);
    let overkill = remaining.saturating_sub(hp_before);
    target.modifiers.prune_exhausted();

    if reflected > 0 {
        ctx.caster.lose_hp(reflected);
    }

    let caster_id = ctx.caster.id;
    let target_id = ctx.target_id();
    let mut source_heals = Vec::new();
    for (by, amount) in heals {
        if by == target_id {
            ctx.target().gain_hp(amount);
        } else if by == caster_id {
            ctx.caster.gain_hp(amount);
        } else {
            source_heals.push((by, amount));
        }
    }

    tracing::debug!(
        target = %target_id,
        amount,
        absorbed,
        shielded,
        reflected,
        hp_lost,
        "damage received"
    );

    DamageDealt {
        amount,
        element,
        absorbed,
        shielded,
        reflected,
        hp_lost,
        overkill,
        hop: ctx.hop,
        source_heals,
    }
}
