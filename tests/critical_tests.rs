use broadsword::combat::{adjust_critical, apply_critical, roll_critical, OVERFLOW_DICE};
use broadsword::dice::Rng;
use broadsword::rules::CritLocation;
use broadsword::ships::{ShipConfig, ShipRegistry};
use broadsword::store::MemoryStore;

fn registry_with_ship() -> (ShipRegistry, String) {
    let mut registry = ShipRegistry::load(Box::new(MemoryStore::new()));
    let ship = registry.add(&ShipConfig::default());
    (registry, ship.id)
}

#[test]
fn location_roll_covers_the_table() {
    let mut rng = Rng::new(17);
    for _ in 0..200 {
        let roll = roll_critical(&mut rng, 6);
        assert!((2..=12).contains(&roll.total));
        assert_eq!(roll.location, CritLocation::from_roll(roll.total).unwrap());
        assert!(!roll.effect_text.is_empty());
    }
}

#[test]
fn severity_comes_from_the_attack_effect() {
    let mut rng = Rng::new(1);
    assert_eq!(roll_critical(&mut rng, 6).severity, 1);
    assert_eq!(roll_critical(&mut rng, 8).severity, 3);
    assert_eq!(roll_critical(&mut rng, 0).severity, 1);
}

#[test]
fn hull_breach_locations_carry_the_note() {
    let mut rng = Rng::new(23);
    let roll = roll_critical(&mut rng, 6);
    if roll.hull_breach {
        assert!(roll.breach_note.is_some());
    } else {
        assert!(roll.breach_note.is_none());
    }
    assert!(CritLocation::Hull.hull_breach());
    assert!(CritLocation::Bridge.hull_breach());
    assert!(!CritLocation::Sensors.hull_breach());
}

#[test]
fn fresh_location_takes_the_rolled_severity() {
    let (mut registry, id) = registry_with_ship();
    let mut rng = Rng::new(9);
    let applied = apply_critical(&mut registry, &mut rng, &id, CritLocation::Weapon, 2)
        .expect("ship should exist");
    assert_eq!(applied.previous, 0);
    assert_eq!(applied.severity, 2);
    assert!(applied.overflow.is_none());
}

#[test]
fn repeat_hits_stack_to_at_least_existing_plus_one() {
    let (mut registry, id) = registry_with_ship();
    let mut rng = Rng::new(9);

    apply_critical(&mut registry, &mut rng, &id, CritLocation::Sensors, 3);
    // New severity 1 on an existing 3 bumps to 4, not down to 1.
    let applied = apply_critical(&mut registry, &mut rng, &id, CritLocation::Sensors, 1)
        .expect("ship should exist");
    assert_eq!(applied.previous, 3);
    assert_eq!(applied.severity, 4);

    // A bigger incoming severity wins over the bump.
    let applied = apply_critical(&mut registry, &mut rng, &id, CritLocation::Sensors, 6)
        .expect("ship should exist");
    assert_eq!(applied.severity, 6);
    assert!(applied.overflow.is_none());
}

#[test]
fn maxed_location_stays_at_six_and_rolls_overflow_damage() {
    let (mut registry, id) = registry_with_ship();
    let mut rng = Rng::new(31);

    apply_critical(&mut registry, &mut rng, &id, CritLocation::Hull, 6);
    let applied = apply_critical(&mut registry, &mut rng, &id, CritLocation::Hull, 2)
        .expect("ship should exist");
    assert_eq!(applied.previous, 6);
    assert_eq!(applied.severity, 6);

    let overflow = applied.overflow.expect("overflow should roll");
    assert_eq!(overflow.rolls.len(), OVERFLOW_DICE as usize);
    assert!((OVERFLOW_DICE..=OVERFLOW_DICE * 6).contains(&overflow.total));
}

#[test]
fn adjust_clamps_to_the_severity_band_and_zero_clears() {
    let (mut registry, id) = registry_with_ship();
    let mut rng = Rng::new(2);
    apply_critical(&mut registry, &mut rng, &id, CritLocation::Fuel, 2);

    assert_eq!(
        adjust_critical(&mut registry, &id, CritLocation::Fuel, 10),
        Some(6)
    );
    assert_eq!(
        adjust_critical(&mut registry, &id, CritLocation::Fuel, -1),
        Some(5)
    );
    assert_eq!(
        adjust_critical(&mut registry, &id, CritLocation::Fuel, -9),
        Some(0)
    );
    assert_eq!(registry.get(&id).expect("ship").crit_count(), 0);

    // Adjusting an untouched location up from zero works too.
    assert_eq!(
        adjust_critical(&mut registry, &id, CritLocation::Crew, 1),
        Some(1)
    );
}

#[test]
fn unknown_ship_yields_none() {
    let mut registry = ShipRegistry::load(Box::new(MemoryStore::new()));
    let mut rng = Rng::new(3);
    assert!(apply_critical(&mut registry, &mut rng, "nope", CritLocation::Hull, 1).is_none());
    assert!(adjust_critical(&mut registry, "nope", CritLocation::Hull, 1).is_none());
}
