//! Teleport, summon and transform.
//!
//! The engine has no map or spawner. These effects only produce records for
//! the world and rendering systems; transform also leaves a timed
//! transformation modifier on the target.

use crate::cast::{EffectContext, EffectOutcome, EffectResult};
use crate::state::{ModifierKind, TimedModifier};

/// Move the target to a named destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeleportEffect {
    pub destination: String,
}

impl TeleportEffect {
    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::Teleported {
                destination: self.destination.clone(),
            },
        ))
    }
}

/// Call creatures from a template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonEffect {
    pub template: String,
    #[cfg_attr(feature = "serde", serde(default = "SummonEffect::default_count"))]
    pub count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

impl SummonEffect {
    fn default_count() -> u32 {
        1
    }

    pub fn new(template: impl Into<String>, count: u32) -> Self {
        Self {
            template: template.into(),
            count,
            duration: None,
        }
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        // summons belong to the caster regardless of the ability's target
        Some(EffectResult::new(
            ctx.caster.id,
            EffectOutcome::Summoned {
                template: self.template.clone(),
                count: self.count,
                duration: self.duration,
            },
        ))
    }
}

/// Change the target's form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformEffect {
    pub form: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

impl TransformEffect {
    pub fn apply(&self, ctx: &mut EffectContext<'_, '_>) -> Option<EffectResult> {
        let record = TimedModifier::new(
            ModifierKind::Transformation {
                form: self.form.clone(),
            },
            self.duration,
        )
        .applied(&ctx.ability.id, ctx.caster.id, ctx.now);
        ctx.target().modifiers.push(record);

        Some(EffectResult::new(
            ctx.target_id(),
            EffectOutcome::Transformed {
                form: self.form.clone(),
                duration: self.duration,
            },
        ))
    }
}
