//! Attack resolution: 2D + summed modifiers against the fixed Average
//! target of 8. Effect drives hit, critical trigger, and damage pre-fill.

use serde::Serialize;
use serde_json::Value;

use crate::dice::{roll_sum, Rng};
use crate::input;

/// Standard task difficulty "Average". Every attack rolls against this.
pub const ATTACK_TARGET: i32 = 8;

/// Effect at or above which an attack also triggers a critical hit.
pub const CRITICAL_EFFECT: i32 = 6;

/// The flat modifier set for one attack. Evasive and evade-program are
/// magnitudes and are subtracted; everything else adds as entered. Illegal
/// combinations are accepted and computed as entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttackModifiers {
    pub gunner_skill: i32,
    pub dex_mod: i32,
    pub fire_control: i32,
    pub target_lock: i32,
    pub range: i32,
    pub target_size: i32,
    pub speed_diff: i32,
    /// Magnitude; applied as a subtraction.
    pub evasive: i32,
    pub firing_arc: i32,
    /// Magnitude; applied as a subtraction.
    pub evade_program: i32,
    pub other: i32,
    pub called_shot: i32,
}

impl AttackModifiers {
    pub fn dm_total(&self) -> i32 {
        self.gunner_skill
            + self.dex_mod
            + self.fire_control
            + self.target_lock
            + self.range
            + self.target_size
            + self.speed_diff
            - self.evasive
            + self.firing_arc
            - self.evade_program
            + self.other
            + self.called_shot
    }

    /// Coerces a JSON form payload; every missing or garbage field is 0.
    pub fn from_value(value: &Value) -> AttackModifiers {
        let field = |name: &str| input::int_or(value.get(name), 0);
        AttackModifiers {
            gunner_skill: field("gunner_skill"),
            dex_mod: field("dex_mod"),
            fire_control: field("fire_control"),
            target_lock: field("target_lock"),
            range: field("range"),
            target_size: field("target_size"),
            speed_diff: field("speed_diff"),
            evasive: field("evasive"),
            firing_arc: field("firing_arc"),
            evade_program: field("evade_program"),
            other: field("other"),
            called_shot: field("called_shot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackOutcome {
    pub rolls: Vec<u32>,
    /// Unmodified 2D total.
    pub natural: u32,
    pub dm: i32,
    pub total: i32,
    pub target: i32,
    pub effect: i32,
    pub hit: bool,
    /// Effect >= 6; the hit also inflicts a critical.
    pub critical: bool,
}

pub fn resolve_attack(rng: &mut Rng, modifiers: &AttackModifiers) -> AttackOutcome {
    let dm = modifiers.dm_total();
    let result = roll_sum(rng, 2, 6);
    let natural = result.total;
    let total = natural as i32 + dm;
    let effect = total - ATTACK_TARGET;
    AttackOutcome {
        rolls: result.rolls,
        natural,
        dm,
        total,
        target: ATTACK_TARGET,
        effect,
        hit: effect >= 0,
        critical: effect >= CRITICAL_EFFECT,
    }
}
