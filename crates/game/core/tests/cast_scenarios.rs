use spellcraft_core::effect::{
    AbsorbEffect, ChainDamageEffect, DamageEffect, HealEffect, InflictStatusEffect, TeleportEffect,
};
use spellcraft_core::{
    AbilityDefinition, AbilityId, AcquisitionMeta, AcquisitionRecord, AcquisitionSource, Actor,
    ActorClass, ActorId, ActorStats, CastRejection, CastTargets, ComboMarker, ConstantRng,
    EffectOutcome, EffectSpec, Element, EngineConfig, PcgRng, Power, SpellEngine, SpellEnv,
    StatName, StaticCatalog, StaticWorld, StatusKind, TargetType, Timestamp,
};

/// Damage output at the midpoint of the variance band.
///
/// Against a goblin's 10% fire resistance, pre-variance damage is
/// (20 + 15 × 2) × 0.9 = 45.
fn fireball() -> AbilityDefinition {
    AbilityDefinition::new("fireball", "Fireball", TargetType::SingleEnemy)
        .with_cost(10)
        .with_cooldown(30.0)
        .with_learn_level(5)
        .with_element(Element::Fire)
        .with_effect(EffectSpec::Damage(DamageEffect::new(
            Power::flat(20.0).scaled(StatName::Intelligence, 2.0),
        )))
}

fn catalog() -> StaticCatalog {
    StaticCatalog::from_definitions([
        fireball(),
        AbilityDefinition::new("mend", "Mend", TargetType::SingleAlly)
            .with_cost(5)
            .with_effect(EffectSpec::Heal(HealEffect::new(Power::flat(30.0)))),
        AbilityDefinition::new("chain_lightning", "Chain Lightning", TargetType::SingleEnemy)
            .with_cost(15)
            .with_element(Element::Lightning)
            .with_effect(EffectSpec::ChainDamage(ChainDamageEffect::new(
                DamageEffect::new(Power::flat(50.0)),
                2,
            ))),
        AbilityDefinition::new("ember_hex", "Ember Hex", TargetType::SingleEnemy)
            .with_cost(8)
            .with_element(Element::Fire)
            .with_effect(EffectSpec::StatusInflict(
                InflictStatusEffect::new(StatusKind::Burn).lasting(3).dealing(2),
            ))
            .with_effect(EffectSpec::Damage(DamageEffect::new(Power::flat(30.0)))),
        AbilityDefinition::new("leech_ward", "Leech Ward", TargetType::SingleAlly).with_effect(
            EffectSpec::AbsorbDamage(AbsorbEffect::new(Power::flat(10.0), 3).healing_source()),
        ),
        AbilityDefinition::new("rift_step", "Rift Step", TargetType::SelfTarget)
            .with_effect(EffectSpec::Unsupported {
                kind: "phase_shift".into(),
            })
            .with_effect(EffectSpec::Teleport(TeleportEffect {
                destination: "sanctum".into(),
            })),
    ])
    .unwrap()
}

fn knows(actor: &mut Actor, ids: &[&str]) {
    for id in ids {
        actor.learned.push(AcquisitionRecord {
            ability: AbilityId::from(*id),
            source: AcquisitionSource::Trainer,
            learned_at: Timestamp::ZERO,
            meta: AcquisitionMeta::new(),
        });
    }
}

fn wizard() -> Actor {
    let mut ada = Actor::new(ActorId(1), "Ada", ActorClass::Wizard, 10).with_stats(ActorStats {
        intelligence: 15,
        ..ActorStats::with_hp(80)
    });
    knows(&mut ada, &["fireball", "mend", "chain_lightning", "ember_hex", "rift_step"]);
    ada
}

fn goblin(id: u32) -> Actor {
    let mut goblin = Actor::new(ActorId(id), "Goblin", ActorClass::Monster, 3)
        .with_stats(ActorStats::with_hp(200));
    goblin.resistances.insert(Element::Fire, 0.1);
    goblin
}

#[test]
fn wizard_fireball_lands_in_band() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    let mut target = goblin(2);
    let outcome = engine
        .cast(&mut ada, &"fireball".into(), Some(&mut target))
        .unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.resource_consumed, 10);
    assert_eq!(outcome.effects.len(), 1);
    let hit = outcome.effects[0].damage().unwrap();
    assert_eq!(hit.amount, 45);
    assert_eq!(target.stats.hp, 155);
    // 50 + 5 × 10 = 100 max, minus the cost
    assert_eq!(ada.stats.max_mp, Some(100));
    assert_eq!(ada.stats.mp, 90);
    assert_eq!(ada.uses_of(&"fireball".into()), 1);
}

#[test]
fn seeded_fireballs_stay_in_band() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &PcgRng);

    for seed in 0..32 {
        let mut engine = SpellEngine::new(env, seed);
        let mut ada = wizard();
        let mut target = goblin(2);
        let outcome = engine
            .cast(&mut ada, &"fireball".into(), Some(&mut target))
            .unwrap();
        let result = &outcome.effects[0];
        if !result.critical {
            let amount = result.magnitude();
            assert!((41..=49).contains(&amount), "seed {seed}: {amount}");
        }
    }
}

#[test]
fn same_seed_same_outcome() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &PcgRng);

    let run = || {
        let mut engine = SpellEngine::new(env, 42);
        let mut ada = wizard();
        let mut target = goblin(2);
        let first = engine
            .cast(&mut ada, &"ember_hex".into(), Some(&mut target))
            .unwrap();
        let second = engine
            .cast(&mut ada, &"mend".into(), Some(&mut target))
            .unwrap();
        (first, second, target)
    };
    assert_eq!(run(), run());
}

#[test]
fn insufficient_mp_reports_shortfall_and_changes_nothing() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    ada.stats.max_mp = Some(100);
    ada.stats.mp = 4;
    let mut target = goblin(2);
    let before = target.clone();

    let outcome = engine
        .cast(&mut ada, &"fireball".into(), Some(&mut target))
        .unwrap();
    assert!(!outcome.success);
    assert_eq!(
        outcome.reason,
        Some(CastRejection::InsufficientMp {
            required: 10,
            available: 4,
            shortfall: 6
        })
    );
    assert_eq!(target, before);
    assert_eq!(ada.stats.mp, 4);
    assert!(!engine.is_on_cooldown(ada.id, &"fireball".into()));
    assert_eq!(ada.uses_of(&"fireball".into()), 0);
}

#[test]
fn cooldown_clears_after_thirty_seconds() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    let mut target = goblin(2);
    let fireball: AbilityId = "fireball".into();
    assert!(engine.cast(&mut ada, &fireball, Some(&mut target)).unwrap().success);

    let again = engine.cast(&mut ada, &fireball, Some(&mut target)).unwrap();
    assert!(matches!(
        again.reason,
        Some(CastRejection::OnCooldown { remaining_secs }) if (remaining_secs - 30.0).abs() < 1e-9
    ));

    engine.tick(29_500, &mut []);
    assert!(engine.is_on_cooldown(ada.id, &fireball));
    assert!((engine.remaining_cooldown(ada.id, &fireball) - 0.5).abs() < 1e-9);

    engine.tick(500, &mut []);
    assert!(!engine.is_on_cooldown(ada.id, &fireball));
    assert!(engine.validate_cast(&ada, &fireball, Some(&target)).can_cast);
}

#[test]
fn missing_target_and_unknown_ability() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let engine = SpellEngine::new(env, 1);
    let ada = wizard();

    let check = engine.validate_cast(&ada, &"fireball".into(), None);
    assert!(!check.can_cast);
    assert!(matches!(check.reason, Some(CastRejection::MissingTarget { .. })));

    let check = engine.validate_cast(&ada, &"meteor".into(), None);
    assert_eq!(
        check.reason,
        Some(CastRejection::UnknownAbility("meteor".into()))
    );
}

#[test]
fn heal_clamps_with_overheal() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    let mut ally = goblin(3);
    ally.stats.hp = 190;
    let outcome = engine.cast(&mut ada, &"mend".into(), Some(&mut ally)).unwrap();
    assert_eq!(ally.stats.hp, 200);
    assert_eq!(
        outcome.effects[0].outcome,
        EffectOutcome::Heal {
            amount: 10,
            overheal: 20
        }
    );
}

#[test]
fn chain_damage_decays_per_hop() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    let (mut a, mut b, mut c, mut d) = (goblin(2), goblin(3), goblin(4), goblin(5));
    let targets = CastTargets::single(&mut a).and(&mut b).and(&mut c).and(&mut d);
    let outcome = engine
        .cast_at(&mut ada, &"chain_lightning".into(), targets)
        .unwrap();

    let amounts: Vec<u32> = outcome.effects.iter().map(|e| e.magnitude()).collect();
    // 50, 50 × 0.8, 50 × 0.64; the fourth goblin is out of reach
    assert_eq!(amounts, vec![50, 40, 32]);
    assert_eq!(d.stats.hp, 200);
    assert_eq!(outcome.total_damage(), 122);
}

#[test]
fn burning_target_takes_intense_burn() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    let mut target = goblin(2);
    let outcome = engine
        .cast(&mut ada, &"ember_hex".into(), Some(&mut target))
        .unwrap();

    let kinds: Vec<&str> = outcome.effects.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["status_applied", "damage", "status_applied"]);
    assert!(matches!(
        outcome.effects[2].outcome,
        EffectOutcome::StatusApplied {
            status: StatusKind::IntenseBurn,
            synthesized: true,
            ..
        }
    ));
    assert!(target.has_status(&StatusKind::IntenseBurn));
    assert!(
        !outcome
            .effects
            .iter()
            .any(|e| matches!(e.outcome, EffectOutcome::Combo(ComboMarker::OverwhelmingDebuff { .. })))
    );
}

#[test]
fn downed_target_takes_nothing() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    let mut corpse = goblin(2);
    corpse.stats.hp = 0;
    let outcome = engine
        .cast(&mut ada, &"fireball".into(), Some(&mut corpse))
        .unwrap();
    assert!(outcome.success);
    assert!(outcome.effects.is_empty());
    assert_eq!(outcome.resource_consumed, 10);
}

#[test]
fn unsupported_effects_are_skipped() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 1);

    let mut ada = wizard();
    let outcome = engine.cast(&mut ada, &"rift_step".into(), None).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.effects.len(), 1);
    assert_eq!(
        outcome.effects[0].outcome,
        EffectOutcome::Teleported {
            destination: "sanctum".into()
        }
    );
}

#[test]
fn blocking_status_and_area_restriction() {
    use spellcraft_core::{EnvironmentRestriction, ModifierKind, StatusEffect, TimedModifier};

    let restricted = AbilityDefinition::new("holy_fire", "Holy Fire", TargetType::SelfTarget)
        .with_restriction(EnvironmentRestriction {
            forbidden_areas: vec!["crypt".into()],
            ..EnvironmentRestriction::default()
        });
    let catalog = StaticCatalog::from_definitions([restricted]).unwrap();
    let world = StaticWorld::new("crypt");
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let engine = SpellEngine::with_config(env, EngineConfig::default(), 1);

    let mut ada = wizard();
    knows(&mut ada, &["holy_fire"]);
    let check = engine.validate_cast(&ada, &"holy_fire".into(), None);
    assert_eq!(
        check.reason,
        Some(CastRejection::ForbiddenArea {
            area: "crypt".into()
        })
    );

    ada.modifiers.push(TimedModifier::new(
        ModifierKind::Status(StatusEffect::new(StatusKind::Silence)),
        Some(2),
    ));
    let check = engine.validate_cast(&ada, &"holy_fire".into(), None);
    assert_eq!(
        check.reason,
        Some(CastRejection::BlockedByStatus(StatusKind::Silence))
    );
}

fn warded_knight(catalog: &StaticCatalog, world: &StaticWorld) -> (Actor, Actor) {
    let env = SpellEnv::new(catalog, world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 5);

    let mut bran = Actor::new(ActorId(5), "Bran", ActorClass::Cleric, 8)
        .with_stats(ActorStats::with_hp(80));
    bran.stats.hp = 50;
    knows(&mut bran, &["leech_ward"]);
    let mut knight = goblin(3);
    let outcome = engine
        .cast(&mut bran, &"leech_ward".into(), Some(&mut knight))
        .unwrap();
    assert!(outcome.success);
    (bran, knight)
}

#[test]
fn absent_warder_is_owed_the_absorbed_amount() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let (bran, mut knight) = warded_knight(&catalog, &world);

    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 6);
    let mut ada = wizard();
    let outcome = engine
        .cast(&mut ada, &"fireball".into(), Some(&mut knight))
        .unwrap();

    let hit = outcome.effects[0].damage().unwrap();
    assert_eq!(hit.amount, 45);
    assert_eq!(hit.absorbed, 10);
    assert_eq!(knight.stats.hp, 165);
    assert_eq!(hit.source_heals, vec![(bran.id, 10)]);
    assert_eq!(bran.stats.hp, 50);
}

#[test]
fn participating_warder_is_healed_in_the_cast() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let (mut bran, mut knight) = warded_knight(&catalog, &world);

    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::new(env, 6);
    let mut ada = wizard();
    // a single-target spell never lands on the secondary target
    let targets = CastTargets::single(&mut knight).and(&mut bran);
    let outcome = engine
        .cast_at(&mut ada, &"fireball".into(), targets)
        .unwrap();

    assert_eq!(outcome.effects.len(), 1);
    let hit = outcome.effects[0].damage().unwrap();
    assert_eq!(hit.absorbed, 10);
    assert!(hit.source_heals.is_empty());
    assert_eq!(bran.stats.hp, 60);
    assert_eq!(knight.stats.hp, 165);
}
