use planner_core::{
    AdmissionError, Breed, CharacterProfile, Criterion, EquipSlot, Item, ItemId, Profession,
    ProfileEngine, ProfileId, Roster, RulesConfig, StatId, TriggerEvent, Unmet, can_use,
    create_profile,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn character(rules: &RulesConfig, id: u32, profession: Profession) -> CharacterProfile {
    create_profile(rules, ProfileId(id), format!("char{id}"), Breed::Opifex, profession, 200)
}

fn ncu_belt(ncu: i32) -> Item {
    Item::new(ItemId(50_000), "NCU Memory Belt").with_effect(TriggerEvent::Wield, StatId::MAX_NCU, ncu)
}

fn nano(id: u32, strain: i32, priority: i32, cost: i32) -> Item {
    Item::new(ItemId(id), format!("nano {id}"))
        .with_stat(StatId::NANO_STRAIN, strain)
        .with_stat(StatId::STACKING_ORDER, priority)
        .with_stat(StatId::NCU_COST, cost)
}

/// Soldier-or-Enforcer gear that also needs 300 stamina.
fn trooper_armour() -> Item {
    Item::new(ItemId(10), "Trooper Armour").with_requirements(vec![
        Criterion::equals(StatId::PROFESSION, Profession::Soldier.id()),
        Criterion::equals(StatId::PROFESSION, Profession::Enforcer.id()),
        Criterion::Or,
        Criterion::at_least(StatId::STAMINA, 300),
        Criterion::And,
    ])
}

fn with_stamina(rules: &RulesConfig, profile: &mut CharacterProfile, stamina: i32) {
    let current = profile.total(StatId::STAMINA);
    ProfileEngine::new(profile, rules).add_perk(
        Item::new(ItemId(77), "Stamina Boost").with_effect(
            TriggerEvent::Wear,
            StatId::STAMINA,
            stamina - current,
        ),
    );
    assert_eq!(profile.total(StatId::STAMINA), stamina);
}

#[test]
fn profession_choice_requirement() {
    init_tracing();
    let rules = RulesConfig::default();

    let mut soldier = character(&rules, 1, Profession::Soldier);
    with_stamina(&rules, &mut soldier, 350);
    let result = can_use(&trooper_armour(), &soldier).expect("well-formed requirements");
    assert!(result.satisfied);
    assert!(result.unmet.is_empty());

    let mut nanotech = character(&rules, 2, Profession::NanoTechnician);
    with_stamina(&rules, &mut nanotech, 350);
    let result = can_use(&trooper_armour(), &nanotech).expect("well-formed requirements");
    assert!(!result.satisfied);
    assert_eq!(result.unmet, vec![Unmet::Choice { alternatives: 2 }]);
}

#[test]
fn buff_lifecycle_on_one_profile() {
    init_tracing();
    let rules = RulesConfig::default();
    let mut profile = character(&rules, 1, Profession::MetaPhysicist);
    let mut engine = ProfileEngine::new(&mut profile, &rules);

    // ================================================================
    // PHASE 1: capacity from equipment
    // ================================================================
    engine.equip(EquipSlot::Belt, ncu_belt(1206));
    assert_eq!(engine.ncu_capacity(), 1206);

    // ================================================================
    // PHASE 2: lower priority on a held strain is refused
    // ================================================================
    let a = nano(1, 1000, 100, 25);
    engine.cast_buff(&a).expect("A fits");

    let b = nano(2, 1000, 50, 30);
    let err = engine.cast_buff(&b).expect_err("B is outranked");
    assert!(matches!(err, AdmissionError::StrainConflict { active, .. } if active == ItemId(1)));
    assert!(engine.profile().buffs().contains(ItemId(1)));
    assert_eq!(engine.ncu_usage(), 25);

    // ================================================================
    // PHASE 3: higher priority replaces
    // ================================================================
    let c = nano(3, 1000, 200, 35);
    let outcome = engine.cast_buff(&c).expect("C outranks A");
    assert_eq!(outcome.replaced.map(|buff| buff.id()), Some(ItemId(1)));
    assert!(!engine.profile().buffs().contains(ItemId(1)));
    assert!(engine.profile().buffs().contains(ItemId(3)));
    assert_eq!(engine.ncu_usage(), 35);

    // ================================================================
    // PHASE 4: clean up
    // ================================================================
    engine.remove_buff(ItemId(3));
    assert_eq!(engine.ncu_usage(), 0);
}

#[test]
fn full_capacity_rejects_new_buff() {
    init_tracing();
    let rules = RulesConfig::default();
    let mut profile = character(&rules, 1, Profession::Bureaucrat);
    let mut engine = ProfileEngine::new(&mut profile, &rules);
    engine.equip(EquipSlot::Belt, ncu_belt(1206));
    engine.cast_buff(&nano(1, 1, 0, 1100)).expect("fits");
    let before = engine.profile().clone();

    let err = engine.cast_buff(&nano(2, 2, 0, 200)).expect_err("over capacity");
    assert_eq!(
        err,
        AdmissionError::InsufficientCapacity {
            requested: 200,
            used: 1100,
            capacity: 1206,
        }
    );
    assert_eq!(engine.profile(), &before);
    assert_eq!(engine.ncu_usage(), 1100);
}

#[test]
fn capacity_buff_can_host_later_casts() {
    init_tracing();
    let rules = RulesConfig::default();
    let mut profile = character(&rules, 1, Profession::NanoTechnician);
    let mut engine = ProfileEngine::new(&mut profile, &rules);
    engine.equip(EquipSlot::Belt, ncu_belt(30));

    let expansion = nano(1, 500, 1, 20).with_effect(TriggerEvent::Cast, StatId::MAX_NCU, 100);
    engine.cast_buff(&expansion).expect("fits");
    assert_eq!(engine.ncu_capacity(), 130);

    engine.cast_buff(&nano(2, 600, 1, 90)).expect("fits in expanded pool");
    assert_eq!(engine.ncu_usage(), 110);

    // Dropping the expansion leaves 90 used against 30.
    let report = engine.remove_buff(ItemId(1));
    assert_eq!(report.evicted.len(), 1);
    assert_eq!(report.evicted[0].id(), ItemId(2));
    assert_eq!(engine.ncu_usage(), 0);
}

#[test]
fn switching_profiles_does_not_leak_buffs() {
    init_tracing();
    let rules = RulesConfig::default();
    let mut roster = Roster::new();
    roster
        .insert(character(&rules, 1, Profession::Doctor))
        .expect("new id");
    roster
        .insert(character(&rules, 2, Profession::Agent))
        .expect("new id");
    let b_before = roster.get(ProfileId(2)).expect("inserted").clone();

    let a = roster.active_mut().expect("first insert is active");
    assert_eq!(a.id(), ProfileId(1));
    let mut engine = ProfileEngine::new(a, &rules);
    engine.equip(EquipSlot::Belt, ncu_belt(500));
    engine
        .cast_buff(&nano(9, 77, 1, 40).with_effect(TriggerEvent::Cast, StatId::AGILITY, 25))
        .expect("fits");

    roster.switch_to(ProfileId(2)).expect("known id");
    let b = roster.active().expect("switched");
    assert_eq!(b, &b_before);
    assert!(b.buffs().is_empty());
    assert!(!b.buffs().contains(ItemId(9)));

    let a = roster.get(ProfileId(1)).expect("still present");
    assert!(a.buffs().contains(ItemId(9)));
}
