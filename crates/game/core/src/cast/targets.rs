//! Target resolution.
//!
//! The caller hands the engine mutable borrows of every actor a cast may
//! touch. Each effect spec then resolves to a list of [`Slot`]s, and the
//! pipeline splits the borrows per slot so the caster and one target are
//! mutable at the same time.

use crate::ability::TargetType;
use crate::effect::EffectSpec;
use crate::state::{Actor, ActorId};

/// Targets supplied with a cast request.
///
/// `primary` is the explicit target of single-target abilities. `secondary`
/// carries the other members of the targeted group for group, area and chain
/// abilities, in the order chains should hop.
#[derive(Debug, Default)]
pub struct CastTargets<'t> {
    pub primary: Option<&'t mut Actor>,
    pub secondary: Vec<&'t mut Actor>,
}

impl<'t> CastTargets<'t> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(target: &'t mut Actor) -> Self {
        Self {
            primary: Some(target),
            secondary: Vec::new(),
        }
    }

    /// Builder: add a secondary target.
    pub fn and(mut self, target: &'t mut Actor) -> Self {
        self.secondary.push(target);
        self
    }
}

impl<'t> From<Option<&'t mut Actor>> for CastTargets<'t> {
    fn from(primary: Option<&'t mut Actor>) -> Self {
        Self {
            primary,
            secondary: Vec::new(),
        }
    }
}

/// Position of an actor within the cast's participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Caster,
    Primary,
    Secondary(usize),
}

/// A resolved target with its chain hop (if any).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub slot: Slot,
    pub hop: Option<u32>,
}

impl Resolved {
    fn at(slot: Slot) -> Self {
        Self { slot, hop: None }
    }
}

/// Every actor a cast may touch, borrowed for the duration of the cast.
pub(crate) struct Participants<'p> {
    caster: &'p mut Actor,
    primary: Option<&'p mut Actor>,
    secondary: Vec<&'p mut Actor>,
}

impl<'p> Participants<'p> {
    pub fn new(caster: &'p mut Actor, targets: CastTargets<'p>) -> Self {
        Self {
            caster,
            primary: targets.primary,
            secondary: targets.secondary,
        }
    }

    pub fn caster(&mut self) -> &mut Actor {
        &mut *self.caster
    }

    /// Every participant, caster first.
    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        std::iter::once(&mut *self.caster)
            .chain(self.primary.as_deref_mut())
            .chain(self.secondary.iter_mut().map(|t| &mut **t))
    }

    pub fn find_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.all_mut().find(|actor| actor.id == id)
    }

    /// Borrows the caster together with the actor in `slot`.
    ///
    /// The second element is `None` when `slot` is the caster itself.
    pub fn split(&mut self, slot: Slot) -> Option<(&mut Actor, Option<&mut Actor>)> {
        let Self {
            caster,
            primary,
            secondary,
        } = self;
        let target = match slot {
            Slot::Caster => return Some((&mut **caster, None)),
            Slot::Primary => primary.as_deref_mut()?,
            Slot::Secondary(index) => &mut **secondary.get_mut(index)?,
        };
        Some((&mut **caster, Some(target)))
    }

    /// Resolves where `effect` lands for an ability aimed as `target_type`.
    ///
    /// Area damage hits the primary and every secondary target. Chain damage
    /// hits the primary at hop 0 and then up to `chains` secondaries at hops
    /// 1, 2, ... Everything else follows the ability's target type.
    pub fn resolve(&self, target_type: TargetType, effect: &EffectSpec) -> Vec<Resolved> {
        let primary = self.primary.is_some().then_some(Slot::Primary);
        let secondaries = (0..self.secondary.len()).map(Slot::Secondary);

        match effect {
            EffectSpec::AreaDamage(_) => primary
                .into_iter()
                .chain(secondaries)
                .map(Resolved::at)
                .collect(),
            EffectSpec::ChainDamage(chain) => primary
                .into_iter()
                .chain(secondaries.take(chain.chains as usize))
                .enumerate()
                .map(|(hop, slot)| Resolved {
                    slot,
                    hop: Some(hop as u32),
                })
                .collect(),
            _ => match target_type {
                TargetType::SelfTarget => vec![Resolved::at(Slot::Caster)],
                TargetType::SingleAlly | TargetType::SingleEnemy | TargetType::DeadAlly => {
                    primary.into_iter().map(Resolved::at).collect()
                }
                TargetType::AllAllies => std::iter::once(Slot::Caster)
                    .chain(primary)
                    .chain(secondaries)
                    .map(Resolved::at)
                    .collect(),
                TargetType::AllEnemies => primary
                    .into_iter()
                    .chain(secondaries)
                    .map(Resolved::at)
                    .collect(),
            },
        }
    }
}
