//! Damage resolution: dice times multiplier through armor and AP, plus the
//! two critical-hit triggers (attack effect, 10%-of-hull threshold).

use serde::Serialize;
use serde_json::Value;

use crate::combat::attack::CRITICAL_EFFECT;
use crate::combat::critical::severity_for_effect;
use crate::dice::{roll_sum, Rng};
use crate::input;

pub const DEFAULT_DICE: i32 = 2;
pub const DEFAULT_MULTIPLIER: i32 = 1;
pub const DEFAULT_HULL_START: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageInput {
    /// Number of six-sided damage dice.
    pub dice: i32,
    /// Mount multiplier (turret 1, barbette 3, small bay 10).
    pub multiplier: i32,
    pub ap: i32,
    pub armor: i32,
    /// Effect of the triggering attack; pre-filled on a hit, overridable.
    pub effect: i32,
    /// Target's hull at the start of the attack, for the threshold rule.
    pub hull_start: i32,
}

impl Default for DamageInput {
    fn default() -> Self {
        Self {
            dice: DEFAULT_DICE,
            multiplier: DEFAULT_MULTIPLIER,
            ap: 0,
            armor: 0,
            effect: 0,
            hull_start: DEFAULT_HULL_START,
        }
    }
}

impl DamageInput {
    /// Coerces a JSON form payload with the documented per-field defaults.
    pub fn from_value(value: &Value) -> DamageInput {
        DamageInput {
            dice: input::int_or(value.get("dice"), DEFAULT_DICE),
            multiplier: input::int_or(value.get("multiplier"), DEFAULT_MULTIPLIER),
            ap: input::int_or(value.get("ap"), 0),
            armor: input::int_or(value.get("armor"), 0),
            effect: input::int_or(value.get("effect"), 0),
            hull_start: input::int_or(value.get("hull_start"), DEFAULT_HULL_START),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DamageOutcome {
    pub rolls: Vec<u32>,
    pub roll_total: u32,
    pub multiplier: i32,
    pub raw_damage: i32,
    pub effective_armor: i32,
    pub final_damage: i32,
    /// Attack effect reached the critical band.
    pub crit_by_effect: bool,
    /// Final damage reached 10% of starting hull.
    pub crit_by_damage: bool,
    /// Either cause, and damage actually penetrated.
    pub critical: bool,
    /// max(1, effect - 5); always computed since location resolution needs
    /// a severity even when the threshold was the sole cause.
    pub suggested_severity: i32,
}

pub fn resolve_damage(rng: &mut Rng, input: &DamageInput) -> DamageOutcome {
    let dice = input.dice.max(0) as u32;
    let result = roll_sum(rng, dice, 6);
    let raw_damage = result.total as i32 * input.multiplier;
    let effective_armor = (input.armor - input.ap).max(0);
    let final_damage = (raw_damage - effective_armor).max(0);

    let crit_by_effect = input.effect >= CRITICAL_EFFECT;
    let crit_by_damage = final_damage >= hull_threshold(input.hull_start);
    DamageOutcome {
        rolls: result.rolls,
        roll_total: result.total,
        multiplier: input.multiplier,
        raw_damage,
        effective_armor,
        final_damage,
        crit_by_effect,
        crit_by_damage,
        critical: final_damage > 0 && (crit_by_effect || crit_by_damage),
        suggested_severity: severity_for_effect(input.effect),
    }
}

/// 10% of starting hull, rounded down.
fn hull_threshold(hull_start: i32) -> i32 {
    hull_start.max(0) / 10
}
