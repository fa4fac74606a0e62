//! JSON payload builders for the API routes. Each handler loads state from
//! the store, applies the operation, and returns the serialized result.
//! Unknown ship ids are NotFound; malformed bodies never panic.

use std::fmt;

use serde_json::{json, Value};

use crate::combat::{
    adjust_critical, apply_critical, resolve_attack, resolve_damage, roll_critical,
    severity_for_effect, AttackModifiers, DamageInput,
};
use crate::dice::{roll_sum, skill_check, Rng};
use crate::input;
use crate::rules;
use crate::rules::{gforce_for_hexes, power_summary, CritLocation, Mount, PowerSystem};
use crate::ships::{ShipConfig, ShipRegistry};
use crate::store::FileStore;
use crate::turn::TurnTracker;

#[derive(Debug)]
pub enum ApiError {
    Parse(serde_json::Error),
    BadRequest(String),
    NotFound(&'static str),
    Serialize(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid request body: {err}"),
            Self::BadRequest(msg) => write!(f, "{msg}"),
            Self::NotFound(what) => write!(f, "{what} not found"),
            Self::Serialize(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

fn registry() -> ShipRegistry {
    ShipRegistry::load(Box::new(FileStore::from_env()))
}

/// Body JSON, tolerating an empty body as an empty object.
fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(json!({}));
    }
    serde_json::from_str(body).map_err(ApiError::Parse)
}

/// Entropy-seeded RNG unless the payload carries an explicit seed.
fn rng_from(value: &Value) -> Rng {
    match value.get("seed").and_then(Value::as_u64) {
        Some(seed) => Rng::new(seed),
        None => Rng::from_entropy(),
    }
}

fn to_payload<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(ApiError::Serialize)
}

pub fn health_payload() -> Result<String, ApiError> {
    to_payload(&json!({
        "status": "ok",
        "service": "broadsword-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ── Ships ──

pub fn ships_payload() -> Result<String, ApiError> {
    to_payload(&registry().get_all())
}

pub fn ship_get_payload(id: &str) -> Result<String, ApiError> {
    let registry = registry();
    let ship = registry.get(id).ok_or(ApiError::NotFound("ship"))?;
    let power_panel: Vec<Value> = PowerSystem::ALL
        .into_iter()
        .map(|system| {
            json!({
                "system": system.as_str(),
                "name": system.display_name(),
                "allocated": ship
                    .power_allocation
                    .get(&system)
                    .copied()
                    .unwrap_or_else(|| system.default_allocation(ship)),
                "cap": system.suggested_cap(ship),
            })
        })
        .collect();
    to_payload(&json!({
        "ship": ship,
        "hull_percent": ship.hull_percent(),
        "health": ship.health_tier(),
        "size_category": ship.size_category().label(),
        "size_dm": ship.size_category().attack_dm(),
        "power": power_summary(ship),
        "power_panel": power_panel,
    }))
}

pub fn ship_add_payload(body: &str) -> Result<String, ApiError> {
    let config: ShipConfig =
        serde_json::from_str(if body.trim().is_empty() { "{}" } else { body })
            .map_err(ApiError::Parse)?;
    let ship = registry().add(&config);
    to_payload(&ship)
}

pub fn ship_update_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let config: ShipConfig =
        serde_json::from_str(if body.trim().is_empty() { "{}" } else { body })
            .map_err(ApiError::Parse)?;
    let ship = registry()
        .update(id, &config)
        .ok_or(ApiError::NotFound("ship"))?;
    to_payload(&ship)
}

pub fn ship_remove_payload(id: &str) -> Result<String, ApiError> {
    if !registry().remove(id) {
        return Err(ApiError::NotFound("ship"));
    }
    to_payload(&json!({ "removed": id }))
}

pub fn ship_damage_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let raw = input::int_or(value.get("raw"), 0);
    let ap = input::int_or(value.get("ap"), 0);
    let report = registry()
        .apply_damage(id, raw, ap)
        .ok_or(ApiError::NotFound("ship"))?;
    to_payload(&report)
}

pub fn ship_heal_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let amount = input::int_or(value.get("amount"), 0);
    let remaining = registry()
        .heal_hull(id, amount)
        .ok_or(ApiError::NotFound("ship"))?;
    to_payload(&json!({ "remaining_hull": remaining }))
}

pub fn ship_velocity_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let velocity = input::int_or(value.get("velocity"), 0);
    let velocity = registry()
        .set_velocity(id, velocity)
        .ok_or(ApiError::NotFound("ship"))?;
    to_payload(&json!({ "velocity": velocity }))
}

pub fn ship_power_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let system_key = input::string_or(value.get("system"), "");
    let system = PowerSystem::parse(&system_key)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown power system '{system_key}'")))?;
    let ep = input::int_or(value.get("ep"), 0);
    let mut registry = registry();
    registry
        .allocate_power(id, system, ep)
        .ok_or(ApiError::NotFound("ship"))?;
    let ship = registry.get(id).ok_or(ApiError::NotFound("ship"))?;
    to_payload(&json!({
        "allocation": ship.power_allocation,
        "summary": power_summary(ship),
    }))
}

fn location_from(value: &Value) -> Result<Option<CritLocation>, ApiError> {
    match value.get("location") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) => CritLocation::parse(name)
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown location '{name}'"))),
        Some(other) => Err(ApiError::BadRequest(format!(
            "location must be a string, got {other}"
        ))),
    }
}

/// Direct severity set (repair bookkeeping). Severity <= 0 clears the entry.
pub fn ship_critical_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let location = location_from(&value)?
        .ok_or_else(|| ApiError::BadRequest("location is required".to_string()))?;
    let severity = input::int_or(value.get("severity"), 0);
    let applied = registry()
        .set_critical(id, location, severity)
        .ok_or(ApiError::NotFound("ship"))?;
    to_payload(&json!({
        "location": location,
        "severity": applied,
    }))
}

/// Stacking application: rolls a location if none is given, severity from
/// the attack effect unless supplied explicitly.
pub fn ship_crit_apply_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let mut rng = rng_from(&value);
    let location = match location_from(&value)? {
        Some(location) => location,
        None => {
            let roll = roll_sum(&mut rng, 2, 6);
            CritLocation::from_roll(roll.total).unwrap_or(CritLocation::Hull)
        }
    };
    let effect = input::int_or(value.get("effect"), 0);
    let severity = input::int_or(value.get("severity"), severity_for_effect(effect));
    let mut registry = registry();
    let application = apply_critical(&mut registry, &mut rng, id, location, severity)
        .ok_or(ApiError::NotFound("ship"))?;
    to_payload(&application)
}

/// Manual +1/-1 severity correction.
pub fn ship_crit_adjust_payload(id: &str, body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let location = location_from(&value)?
        .ok_or_else(|| ApiError::BadRequest("location is required".to_string()))?;
    let delta = input::int_or(value.get("delta"), 0);
    let mut registry = registry();
    let severity = adjust_critical(&mut registry, id, location, delta)
        .ok_or(ApiError::NotFound("ship"))?;
    to_payload(&json!({
        "location": location,
        "severity": severity,
    }))
}

// ── Resolvers ──

pub fn attack_payload(body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let modifiers = AttackModifiers::from_value(&value);
    let mut rng = rng_from(&value);
    let outcome = resolve_attack(&mut rng, &modifiers);
    to_payload(&json!({
        "modifiers": modifiers,
        "dm": modifiers.dm_total(),
        "outcome": outcome,
    }))
}

pub fn damage_payload(body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let input = DamageInput::from_value(&value);
    let mut rng = rng_from(&value);
    to_payload(&resolve_damage(&mut rng, &input))
}

pub fn crit_roll_payload(body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let effect = input::int_or(value.get("effect"), 0);
    let mut rng = rng_from(&value);
    to_payload(&roll_critical(&mut rng, effect))
}

/// Generic 2D skill check (crew quick check).
pub fn check_payload(body: &str) -> Result<String, ApiError> {
    let value = parse_body(body)?;
    let target = input::int_or(value.get("target"), rules::tables::DIFFICULTIES[3].target);
    let dm = input::int_or(value.get("dm"), 0);
    let mut rng = rng_from(&value);
    to_payload(&skill_check(&mut rng, target, dm))
}

// ── Turn ──

fn turn_state_json(tracker: &TurnTracker) -> Value {
    json!({
        "turn": tracker.turn(),
        "phase_index": tracker.phase_index(),
        "step_index": tracker.step_index(),
        "phase": tracker.current_phase().name,
        "step": tracker.current_step().name,
        "step_desc": tracker.current_step().desc,
    })
}

pub fn turn_payload() -> Result<String, ApiError> {
    let tracker = TurnTracker::load(&FileStore::from_env());
    to_payload(&turn_state_json(&tracker))
}

pub fn turn_advance_payload() -> Result<String, ApiError> {
    let store = FileStore::from_env();
    let mut tracker = TurnTracker::load(&store);
    let advanced = tracker.advance();
    tracker.save(&store);
    let mut state = turn_state_json(&tracker);
    state["advanced"] = serde_json::to_value(advanced).map_err(ApiError::Serialize)?;
    to_payload(&state)
}

pub fn turn_new_payload() -> Result<String, ApiError> {
    let store = FileStore::from_env();
    let mut tracker = TurnTracker::load(&store);
    tracker.new_turn();
    tracker.save(&store);
    to_payload(&turn_state_json(&tracker))
}

pub fn turn_reset_payload() -> Result<String, ApiError> {
    let store = FileStore::from_env();
    let tracker = TurnTracker::new();
    tracker.save(&store);
    to_payload(&turn_state_json(&tracker))
}

/// Full encounter reset: all ships removed, turn cursor back to 1/0/0.
pub fn reset_payload() -> Result<String, ApiError> {
    let store = FileStore::from_env();
    registry().clear();
    let tracker = TurnTracker::new();
    tracker.save(&store);
    to_payload(&json!({ "reset": true }))
}

// ── Reference tables ──

pub fn rules_phases_payload() -> Result<String, ApiError> {
    to_payload(&rules::TURN_PHASES)
}

pub fn rules_critical_payload() -> Result<String, ApiError> {
    let locations: Vec<Value> = (2..=12)
        .filter_map(|roll| {
            let location = CritLocation::from_roll(roll)?;
            Some(json!({
                "roll": roll,
                "location": location,
                "hull_breach": location.hull_breach(),
                "effects": location.effects(),
            }))
        })
        .collect();
    to_payload(&json!({
        "locations": locations,
        "hull_breach_note": rules::HULL_BREACH_NOTE,
    }))
}

pub fn rules_weapons_payload() -> Result<String, ApiError> {
    to_payload(&json!({
        "turret": { "damage_multiplier": Mount::Turret.damage_multiplier(), "weapons": Mount::Turret.table() },
        "barbette": { "damage_multiplier": Mount::Barbette.damage_multiplier(), "weapons": Mount::Barbette.table() },
        "small_bay": { "damage_multiplier": Mount::SmallBay.damage_multiplier(), "weapons": Mount::SmallBay.table() },
        "missiles": rules::MISSILES,
        "torpedoes": rules::TORPEDOES,
    }))
}

pub fn rules_defenses_payload() -> Result<String, ApiError> {
    to_payload(&json!({
        "point_defense_laser": rules::POINT_DEFENSE_LASER,
        "point_defense_gauss": rules::POINT_DEFENSE_GAUSS,
        "screens": rules::SCREENS,
        "sand_canisters": rules::SAND_CANISTERS,
    }))
}

pub fn rules_tables_payload() -> Result<String, ApiError> {
    let power_systems: Vec<Value> = PowerSystem::ALL
        .into_iter()
        .map(|system| {
            json!({
                "key": system.as_str(),
                "name": system.display_name(),
                "ep": system.ep_note(),
            })
        })
        .collect();
    to_payload(&json!({
        "difficulties": rules::DIFFICULTIES,
        "range_bands": rules::RANGE_BANDS,
        "sensor_grades": rules::SENSOR_GRADES,
        "sensor_modes": rules::SENSOR_MODES,
        "movement_actions": rules::MOVEMENT_ACTIONS,
        "crew_actions": rules::CREW_ACTIONS,
        "crew_action_limit": rules::CREW_ACTION_LIMIT,
        "power_systems": power_systems,
    }))
}

/// Parses `?hexes=n` off the path for the G-force lookup.
pub fn gforce_payload(path: &str) -> Result<String, ApiError> {
    let query = path.split('?').nth(1).unwrap_or("");
    let hexes = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("hexes="))
        .and_then(|v| v.trim().parse::<i32>().ok());
    match hexes {
        Some(total) => to_payload(&json!({
            "hexes": total,
            "row": gforce_for_hexes(total),
        })),
        None => to_payload(&rules::GFORCE_TABLE),
    }
}
