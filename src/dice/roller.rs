//! Dice primitives for the 2D6 ruleset: single rolls, ordered multi-rolls,
//! sums, and the canonical "roll 2D + DM vs target" skill check.

use serde::Serialize;

use crate::dice::rng::Rng;

/// An ordered roll sequence plus its arithmetic sum. Order is roll order and
/// is preserved for display and highest-die rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollSum {
    pub rolls: Vec<u32>,
    pub total: u32,
}

/// Outcome of a 2D skill check. `natural` is the unmodified dice total;
/// `effect` drives secondary outcomes (criticals, degree of success).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCheck {
    pub rolls: Vec<u32>,
    pub natural: u32,
    pub dm: i32,
    pub total: i32,
    pub target: i32,
    pub effect: i32,
    pub success: bool,
}

/// Uniform integer in [1, sides]. `sides` of 0 is treated as a 1-sided die.
pub fn roll(rng: &mut Rng, sides: u32) -> u32 {
    if sides <= 1 {
        return 1;
    }
    rng.next_below(sides) + 1
}

/// `count` independent rolls, in roll order.
pub fn roll_multiple(rng: &mut Rng, count: u32, sides: u32) -> Vec<u32> {
    (0..count).map(|_| roll(rng, sides)).collect()
}

pub fn roll_sum(rng: &mut Rng, count: u32, sides: u32) -> RollSum {
    let rolls = roll_multiple(rng, count, sides);
    let total = rolls.iter().sum();
    RollSum { rolls, total }
}

/// Rolls 2D6 + `dm` against `target`: effect = total - target, success when
/// effect >= 0. Every "roll 2D+DM vs target" in the ruleset goes through here.
pub fn skill_check(rng: &mut Rng, target: i32, dm: i32) -> SkillCheck {
    let result = roll_sum(rng, 2, 6);
    let natural = result.total;
    let total = natural as i32 + dm;
    let effect = total - target;
    SkillCheck {
        rolls: result.rolls,
        natural,
        dm,
        total,
        target,
        effect,
        success: effect >= 0,
    }
}
