use std::sync::Mutex;

use spellcraft_core::{
    AbilityDefinition, AbilityId, AcquisitionMeta, AcquisitionSource, Actor, ActorClass, ActorId,
    ActorStats, ConstantRng, LearnRejection, Notifier, NotifySeverity, Purse, SpellEngine,
    SpellEnv, StaticCatalog, StaticWorld, TargetType,
};

#[derive(Default)]
struct Inbox(Mutex<Vec<(String, NotifySeverity)>>);

impl Notifier for Inbox {
    fn notify(&self, message: &str, severity: NotifySeverity) {
        if let Ok(mut messages) = self.0.lock() {
            messages.push((message.to_owned(), severity));
        }
    }
}

fn catalog() -> StaticCatalog {
    StaticCatalog::from_definitions([
        AbilityDefinition::new("spark", "Spark", TargetType::SingleEnemy).with_learn_level(1),
        AbilityDefinition::new("frost_nova", "Frost Nova", TargetType::AllEnemies)
            .with_learn_level(4),
        AbilityDefinition::new("arcane_ward", "Arcane Ward", TargetType::SelfTarget)
            .with_learn_level(8),
        AbilityDefinition::new("smite", "Smite", TargetType::SingleEnemy)
            .with_learn_level(2)
            .with_classes([ActorClass::Cleric, ActorClass::Paladin]),
    ])
    .unwrap()
}

fn apprentice(level: u32) -> Actor {
    Actor::new(ActorId(1), "Ada", ActorClass::Wizard, level).with_stats(ActorStats::with_hp(40))
}

#[test]
fn failed_purchase_leaves_gold_and_record_untouched() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let inbox = Inbox::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID).with_notifier(&inbox);
    let engine = SpellEngine::new(env, 3);

    let mut ada = apprentice(10);
    let mut purse = Purse::new(50);
    let outcome = engine.learn(
        &mut ada,
        &"frost_nova".into(),
        AcquisitionSource::NpcPurchase,
        AcquisitionMeta::new().with_cost(100).with_npc("old_mage"),
        &mut purse,
    );

    assert!(!outcome.success);
    assert_eq!(outcome.reason, Some(LearnRejection::InsufficientGold { required: 100 }));
    assert_eq!(purse.gold, 50);
    assert!(ada.learned.is_empty());

    let messages = inbox.0.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].1, NotifySeverity::Warning);
}

#[test]
fn purchase_then_validate_reports_already_known() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let engine = SpellEngine::new(env, 3);

    let mut ada = apprentice(10);
    let mut purse = Purse::new(150);
    let meta = AcquisitionMeta::new().with_cost(100);
    let outcome = engine.learn(
        &mut ada,
        &"frost_nova".into(),
        AcquisitionSource::NpcPurchase,
        meta.clone(),
        &mut purse,
    );
    assert!(outcome.success);
    assert_eq!(purse.gold, 50);
    assert_eq!(ada.learned.len(), 1);

    let check = engine.validate_learn(
        &ada,
        &"frost_nova".into(),
        AcquisitionSource::NpcPurchase,
        &meta,
        &purse,
    );
    assert_eq!(
        check.reason,
        Some(LearnRejection::AlreadyKnown("frost_nova".into()))
    );
}

#[test]
fn exact_payment_then_validate_reports_already_known() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let engine = SpellEngine::new(env, 3);

    let mut ada = apprentice(10);
    let mut purse = Purse::new(100).with_item("spark_scroll", 1);

    let bought = AcquisitionMeta::new().with_cost(100);
    let outcome = engine.learn(
        &mut ada,
        &"frost_nova".into(),
        AcquisitionSource::NpcPurchase,
        bought.clone(),
        &mut purse,
    );
    assert!(outcome.success);
    assert_eq!(purse.gold, 0);
    let check = engine.validate_learn(
        &ada,
        &"frost_nova".into(),
        AcquisitionSource::NpcPurchase,
        &bought,
        &purse,
    );
    assert_eq!(
        check.reason,
        Some(LearnRejection::AlreadyKnown("frost_nova".into()))
    );

    let scroll = AcquisitionMeta::new().with_item("spark_scroll");
    let outcome = engine.learn(
        &mut ada,
        &"spark".into(),
        AcquisitionSource::Scroll,
        scroll.clone(),
        &mut purse,
    );
    assert!(outcome.success);
    assert_eq!(purse.count("spark_scroll"), 0);
    let check = engine.validate_learn(
        &ada,
        &"spark".into(),
        AcquisitionSource::Scroll,
        &scroll,
        &purse,
    );
    assert_eq!(check.reason, Some(LearnRejection::AlreadyKnown("spark".into())));
}

#[test]
fn scroll_relief_and_item_consumption() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let engine = SpellEngine::new(env, 3);

    // arcane_ward is level 8; a scroll allows level 6
    let mut ada = apprentice(6);
    let mut purse = Purse::new(0).with_item("ward_scroll", 1);
    let meta = AcquisitionMeta::new().with_item("ward_scroll");

    let outcome = engine.learn(
        &mut ada,
        &"arcane_ward".into(),
        AcquisitionSource::Scroll,
        meta.clone(),
        &mut purse,
    );
    assert!(outcome.success, "{:?}", outcome.reason);
    assert_eq!(purse.count("ward_scroll"), 0);

    let mut novice = apprentice(5);
    let check = engine.validate_learn(
        &novice,
        &"arcane_ward".into(),
        AcquisitionSource::Scroll,
        &meta,
        &purse,
    );
    assert_eq!(
        check.reason,
        Some(LearnRejection::LevelTooLow {
            required: 6,
            actual: 5
        })
    );
    let outcome = engine.learn(
        &mut novice,
        &"smite".into(),
        AcquisitionSource::QuestReward,
        AcquisitionMeta::new().with_quest("cleanse_the_crypt"),
        &mut purse,
    );
    assert_eq!(
        outcome.reason,
        Some(LearnRejection::ClassNotAllowed(ActorClass::Wizard))
    );
}

#[test]
fn level_up_grants_every_eligible_ability() {
    let catalog = catalog();
    let world = StaticWorld::default();
    let env = SpellEnv::new(&catalog, &world, &ConstantRng::MID);
    let engine = SpellEngine::new(env, 3);

    let mut ada = apprentice(4);
    let learnable: Vec<&str> = engine
        .learnable_abilities(&ada)
        .into_iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(learnable, vec!["frost_nova", "spark"]);

    let granted = engine.grant_level_up_abilities(&mut ada);
    assert_eq!(granted.len(), 2);
    assert!(engine.learnable_abilities(&ada).is_empty());

    ada.level = 8;
    let granted = engine.grant_level_up_abilities(&mut ada);
    assert_eq!(granted, vec![AbilityId::from("arcane_ward")]);
    assert_eq!(ada.learned.len(), 3);
    assert!(
        ada.learned
            .iter()
            .all(|r| r.source == AcquisitionSource::LevelUp)
    );
}
