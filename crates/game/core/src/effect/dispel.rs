//! Dispel: strips magical statuses and shields.

use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::ModifierCategory;

/// Strip magical and enchantment statuses and every shield.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispelEffect;

impl DispelEffect {
    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let modifiers = &mut ctx.target().modifiers;
        let statuses = modifiers.remove_statuses(|s| s.tags.is_dispellable());
        let shields = modifiers.clear(ModifierCategory::Shield);
        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::Dispelled { statuses, shields },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::bench::{Bench, caster, dummy};
    use crate::env::ConstantRng;
    use crate::state::{ModifierKind, StatusEffect, StatusKind, TimedModifier};

    #[test]
    fn strips_magic_and_shields_but_not_burn() {
        let bench = Bench::default();
        let mut ada = caster();
        let mut target = dummy(60);
        for kind in [StatusKind::Blessed, StatusKind::Haste, StatusKind::Burn] {
            target
                .modifiers
                .push(TimedModifier::new(ModifierKind::Status(StatusEffect::new(kind)), Some(5)));
        }
        target
            .modifiers
            .push(TimedModifier::new(ModifierKind::Shield { capacity: 40 }, Some(5)));

        let result = bench
            .run(&ConstantRng::MID, &mut ada, Some(&mut target), |ctx| DispelEffect.apply(ctx))
            .unwrap();
        assert_eq!(
            result.outcome,
            EffectOutcome::Dispelled {
                statuses: 2,
                shields: 1
            }
        );
        assert!(target.has_status(&StatusKind::Burn));
        assert_eq!(target.modifiers.len(), 1);
    }
}
