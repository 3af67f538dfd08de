use spellcraft_core::effect::DamageEffect;
use spellcraft_core::{
    AbilityDefinition, AbilityId, AcquisitionMeta, AcquisitionRecord, AcquisitionSource, Actor,
    ActorClass, ActorId, ActorStats, BonusTag, ConstantRng, EffectSpec, Element, EngineConfig,
    EquipmentSlot, Item, PcgRng, Power, RngOracle, SpellEngine, SpellEnv, StatName, StaticCatalog,
    StaticWorld, TargetType, Timestamp,
};

fn catalog() -> StaticCatalog {
    StaticCatalog::from_definitions([
        AbilityDefinition::new("fireball", "Fireball", TargetType::SingleEnemy)
            .with_cost(10)
            .with_learn_level(5)
            .with_element(Element::Fire)
            .with_effect(EffectSpec::Damage(DamageEffect::new(
                Power::flat(20.0).scaled(StatName::Intelligence, 2.0),
            ))),
        AbilityDefinition::new("arcane_lance", "Arcane Lance", TargetType::SingleEnemy)
            .with_learn_level(5)
            .with_element(Element::Arcane)
            .with_effect(EffectSpec::Damage(DamageEffect::new(
                Power::flat(10.0).per_level(2.0).per_spell_level(1.0),
            ))),
    ])
    .unwrap()
}

fn wizard() -> Actor {
    let mut ada = Actor::new(ActorId(1), "Ada", ActorClass::Wizard, 10).with_stats(ActorStats {
        intelligence: 15,
        ..ActorStats::with_hp(80)
    });
    for id in ["fireball", "arcane_lance"] {
        ada.learned.push(AcquisitionRecord {
            ability: AbilityId::from(id),
            source: AcquisitionSource::Trainer,
            learned_at: Timestamp::ZERO,
            meta: AcquisitionMeta::new(),
        });
    }
    ada
}

/// Resists 10% of fire.
fn ghoul() -> Actor {
    let mut ghoul = Actor::new(ActorId(10), "Cinder Ghoul", ActorClass::Monster, 6)
        .with_stats(ActorStats::with_hp(500));
    ghoul.resistances.insert(Element::Fire, 0.1);
    ghoul
}

/// No critical hits, so the variance edges are reachable.
fn steady() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.crit.damage_base_chance = 0.0;
    config
}

fn fire_at(world: &StaticWorld, rng: &dyn RngOracle, ada: &mut Actor) -> u32 {
    let catalog = catalog();
    let env = SpellEnv::new(&catalog, world, rng);
    let mut engine = SpellEngine::with_config(env, steady(), 7);
    let mut target = ghoul();
    let outcome = engine
        .cast(ada, &"fireball".into(), Some(&mut target))
        .unwrap();
    assert!(outcome.success, "{:?}", outcome.reason);
    outcome.effects[0].magnitude()
}

#[test]
fn wizard_fireball_against_fire_resistance() {
    // (20 + 2 × 15) × 0.9 = 45 before variance
    let world = StaticWorld::default();
    assert_eq!(fire_at(&world, &ConstantRng::MID, &mut wizard()), 45);
    assert_eq!(fire_at(&world, &ConstantRng::MIN, &mut wizard()), 41);
    assert_eq!(fire_at(&world, &ConstantRng::MAX, &mut wizard()), 49);

    for seed in 0..64 {
        let catalog = catalog();
        let env = SpellEnv::new(&catalog, &world, &PcgRng);
        let mut engine = SpellEngine::with_config(env, steady(), seed);
        let mut ada = wizard();
        let mut target = ghoul();
        let outcome = engine
            .cast(&mut ada, &"fireball".into(), Some(&mut target))
            .unwrap();
        let amount = outcome.effects[0].magnitude();
        assert!((41..50).contains(&amount), "seed {seed}: {amount}");
    }
}

#[test]
fn practiced_casters_hit_harder() {
    let world = StaticWorld::default();
    let mut ada = wizard();
    ada.usage.insert("fireball".into(), 50);
    // 45 × 1.5, floored
    assert_eq!(fire_at(&world, &ConstantRng::MID, &mut ada), 67);
    assert_eq!(ada.uses_of(&"fireball".into()), 51);

    // mastery stops growing at +50%
    ada.usage.insert("fireball".into(), 400);
    assert_eq!(fire_at(&world, &ConstantRng::MID, &mut ada), 67);
}

#[test]
fn area_affinity_scales_elemental_damage() {
    let blazing = StaticWorld::new("ember_crypt").with_affinity(Element::Fire, 2.0);
    assert_eq!(fire_at(&blazing, &ConstantRng::MID, &mut wizard()), 90);

    let unrelated = StaticWorld::new("glacier").with_affinity(Element::Ice, 2.0);
    assert_eq!(fire_at(&unrelated, &ConstantRng::MID, &mut wizard()), 45);
}

#[test]
fn equipped_damage_bonuses_add_before_resistance() {
    let world = StaticWorld::default();
    let mut ada = wizard();
    ada.equipment.equip(
        EquipmentSlot::Weapon,
        Item::new("ember_staff")
            .with_modifier(BonusTag::Damage, 3)
            .with_modifier(BonusTag::ElementalDamage(Element::Fire), 7),
    );
    ada.equipment.equip(
        EquipmentSlot::Trinket,
        Item::new("frost_charm").with_modifier(BonusTag::ElementalDamage(Element::Ice), 100),
    );
    // (50 + 3 + 7) × 0.9
    assert_eq!(fire_at(&world, &ConstantRng::MID, &mut ada), 54);
}

#[test]
fn scaling_stages_apply_in_order() {
    let world = StaticWorld::default().with_affinity(Element::Fire, 2.0);
    let mut ada = wizard();
    ada.usage.insert("fireball".into(), 50);
    ada.equipment.equip(
        EquipmentSlot::Weapon,
        Item::new("ember_staff").with_modifier(BonusTag::Damage, 5),
    );
    // ((50 × 1.5) + 5) × 2.0 × 0.9
    assert_eq!(fire_at(&world, &ConstantRng::MID, &mut ada), 144);
}

#[test]
fn caster_and_spell_level_coefficients() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let mut engine = SpellEngine::with_config(env, steady(), 7);

    let mut ada = wizard();
    let mut target = ghoul();
    let outcome = engine
        .cast(&mut ada, &"arcane_lance".into(), Some(&mut target))
        .unwrap();
    // 10 + 2 × caster level 10 + 1 × learn level 5
    assert_eq!(outcome.effects[0].magnitude(), 35);

    ada.level = 20;
    let outcome = engine
        .cast(&mut ada, &"arcane_lance".into(), Some(&mut target))
        .unwrap();
    assert_eq!(outcome.effects[0].magnitude(), 55);
}
