use broadsword::combat::{
    resolve_attack, resolve_damage, severity_for_effect, AttackModifiers, DamageInput,
    ATTACK_TARGET, CRITICAL_EFFECT,
};
use broadsword::dice::{roll_sum, Rng};

/// Seed whose first 2D roll has the given natural total.
fn seed_with_natural(natural: u32) -> u64 {
    for seed in 0..10_000 {
        let mut rng = Rng::new(seed);
        if roll_sum(&mut rng, 2, 6).total == natural {
            return seed;
        }
    }
    panic!("no seed found with natural {natural}");
}

#[test]
fn dm_total_subtracts_evasion_magnitudes() {
    let modifiers = AttackModifiers {
        gunner_skill: 2,
        dex_mod: 1,
        fire_control: 1,
        target_lock: 4,
        range: -2,
        evasive: 2,
        evade_program: 1,
        ..AttackModifiers::default()
    };
    assert_eq!(modifiers.dm_total(), 2 + 1 + 1 + 4 - 2 - 2 - 1);
}

#[test]
fn attack_effect_and_hit_follow_the_fixed_target() {
    let seed = seed_with_natural(9);
    let mut rng = Rng::new(seed);
    let modifiers = AttackModifiers {
        gunner_skill: 3,
        ..AttackModifiers::default()
    };
    let outcome = resolve_attack(&mut rng, &modifiers);
    assert_eq!(outcome.natural, 9);
    assert_eq!(outcome.dm, 3);
    assert_eq!(outcome.total, 12);
    assert_eq!(outcome.target, ATTACK_TARGET);
    assert_eq!(outcome.effect, 4);
    assert!(outcome.hit);
    assert!(!outcome.critical);
}

#[test]
fn effect_of_six_marks_the_hit_critical() {
    let seed = seed_with_natural(10);
    let mut rng = Rng::new(seed);
    let modifiers = AttackModifiers {
        gunner_skill: 4,
        ..AttackModifiers::default()
    };
    let outcome = resolve_attack(&mut rng, &modifiers);
    assert_eq!(outcome.effect, 6);
    assert!(outcome.critical);
}

#[test]
fn negative_dm_can_miss_outright() {
    let seed = seed_with_natural(4);
    let mut rng = Rng::new(seed);
    let modifiers = AttackModifiers {
        evasive: 3,
        ..AttackModifiers::default()
    };
    let outcome = resolve_attack(&mut rng, &modifiers);
    assert_eq!(outcome.total, 1);
    assert!(!outcome.hit);
    assert!(!outcome.critical);
}

#[test]
fn damage_applies_multiplier_then_armor() {
    let mut rng = Rng::new(21);
    let input = DamageInput {
        dice: 3,
        multiplier: 3,
        ap: 2,
        armor: 6,
        effect: 0,
        hull_start: 200,
    };
    let outcome = resolve_damage(&mut rng, &input);
    assert_eq!(outcome.rolls.len(), 3);
    assert_eq!(outcome.raw_damage, outcome.roll_total as i32 * 3);
    assert_eq!(outcome.effective_armor, 4);
    assert_eq!(
        outcome.final_damage,
        (outcome.raw_damage - 4).max(0)
    );
}

#[test]
fn threshold_crit_triggers_on_ten_percent_of_hull() {
    // 6D x 10 always rolls at least 60, far above 10% of an 80-point hull.
    let mut rng = Rng::new(2);
    let input = DamageInput {
        dice: 6,
        multiplier: 10,
        ap: 0,
        armor: 0,
        effect: 0,
        hull_start: 80,
    };
    let outcome = resolve_damage(&mut rng, &input);
    assert!(outcome.crit_by_damage);
    assert!(!outcome.crit_by_effect);
    assert!(outcome.critical);
}

#[test]
fn absorbed_hit_never_crits_even_on_high_effect() {
    // 2D x 1 cannot beat armor 200, so the effect trigger is moot.
    let mut rng = Rng::new(13);
    let input = DamageInput {
        dice: 2,
        multiplier: 1,
        ap: 0,
        armor: 200,
        effect: CRITICAL_EFFECT + 2,
        hull_start: 80,
    };
    let outcome = resolve_damage(&mut rng, &input);
    assert_eq!(outcome.final_damage, 0);
    assert!(outcome.crit_by_effect);
    assert!(!outcome.critical);
}

#[test]
fn suggested_severity_is_effect_minus_five_floored_at_one() {
    assert_eq!(severity_for_effect(0), 1);
    assert_eq!(severity_for_effect(6), 1);
    assert_eq!(severity_for_effect(7), 2);
    assert_eq!(severity_for_effect(11), 6);

    let mut rng = Rng::new(4);
    let input = DamageInput {
        effect: 9,
        ..DamageInput::default()
    };
    assert_eq!(resolve_damage(&mut rng, &input).suggested_severity, 4);
}

#[test]
fn negative_dice_roll_nothing() {
    let mut rng = Rng::new(8);
    let input = DamageInput {
        dice: -3,
        ..DamageInput::default()
    };
    let outcome = resolve_damage(&mut rng, &input);
    assert!(outcome.rolls.is_empty());
    assert_eq!(outcome.raw_damage, 0);
    assert_eq!(outcome.final_damage, 0);
}
