//! Critical hit resolution: 2D location roll, severity from attack effect,
//! effect text lookup, hull-breach flag, and the stacking/overflow rule
//! when a location is hit again.

use serde::Serialize;

use crate::dice::{roll_sum, Rng, RollSum};
use crate::rules::{CritLocation, HULL_BREACH_NOTE, MAX_SEVERITY};
use crate::ships::ShipRegistry;

/// Dice of bonus damage rolled when a location is already at severity 6.
pub const OVERFLOW_DICE: u32 = 6;

/// Severity from the triggering attack's effect: max(1, effect - 5).
pub fn severity_for_effect(effect: i32) -> i32 {
    (effect - 5).max(1)
}

/// A resolved critical hit, before it is applied to any ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CritRoll {
    pub rolls: Vec<u32>,
    pub total: u32,
    pub location: CritLocation,
    pub severity: i32,
    pub effect_text: &'static str,
    pub hull_breach: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_note: Option<&'static str>,
}

/// Rolls 2D for location and derives severity from the attack effect.
pub fn roll_critical(rng: &mut Rng, effect: i32) -> CritRoll {
    let result = roll_sum(rng, 2, 6);
    // 2D of d6 is always 2..=12, which covers the whole location table.
    let location = CritLocation::from_roll(result.total).unwrap_or(CritLocation::Hull);
    let severity = severity_for_effect(effect);
    let hull_breach = location.hull_breach();
    CritRoll {
        rolls: result.rolls,
        total: result.total,
        location,
        severity,
        effect_text: location.effect_text(severity.clamp(1, i32::from(MAX_SEVERITY)) as u8),
        hull_breach,
        breach_note: hull_breach.then_some(HULL_BREACH_NOTE),
    }
}

/// Result of applying a critical to a ship's location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CritApplication {
    pub location: CritLocation,
    pub previous: u8,
    /// Severity now recorded at the location.
    pub severity: u8,
    pub effect_text: &'static str,
    pub hull_breach: bool,
    /// Bonus damage rolled when the location was already maxed at 6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<RollSum>,
}

/// Applies a new critical with the stacking rule: an already-damaged
/// location takes max(new, existing + 1), capped at 6. A location already
/// at 6 stays at 6 and instead yields 6D of overflow bonus damage.
/// None when the ship id is unknown.
pub fn apply_critical(
    registry: &mut ShipRegistry,
    rng: &mut Rng,
    id: &str,
    location: CritLocation,
    severity: i32,
) -> Option<CritApplication> {
    let existing = i32::from(
        registry
            .get(id)?
            .critical_hits
            .get(&location)
            .copied()
            .unwrap_or(0),
    );
    let stacked = if existing > 0 {
        severity.max(existing + 1)
    } else {
        severity
    };
    let applied = registry.set_critical(id, location, stacked)?;
    let overflow = (existing >= i32::from(MAX_SEVERITY))
        .then(|| roll_sum(rng, OVERFLOW_DICE, 6));
    Some(CritApplication {
        location,
        previous: existing as u8,
        severity: applied,
        effect_text: location.effect_text(applied.max(1)),
        hull_breach: location.hull_breach(),
        overflow,
    })
}

/// Manual correction/repair: moves a location's severity by `delta`,
/// clamped to 0..=6. Reaching 0 clears the entry. Returns the new severity.
pub fn adjust_critical(
    registry: &mut ShipRegistry,
    id: &str,
    location: CritLocation,
    delta: i32,
) -> Option<u8> {
    let current = i32::from(
        registry
            .get(id)?
            .critical_hits
            .get(&location)
            .copied()
            .unwrap_or(0),
    );
    let next = (current + delta).clamp(0, i32::from(MAX_SEVERITY));
    registry.set_critical(id, location, next)
}
