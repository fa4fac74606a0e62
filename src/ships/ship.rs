//! Ship entity: configured capacities, current play state, critical hits,
//! and power allocation. Owned exclusively by the registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input;
use crate::rules::{CritLocation, PowerSystem};

pub const DEFAULT_HULL: i32 = 80;
pub const DEFAULT_ARMOR: i32 = 0;
pub const DEFAULT_THRUST: i32 = 2;
pub const DEFAULT_POWER: i32 = 60;
pub const DEFAULT_CREW: i32 = 10;
pub const DEFAULT_TONNAGE: i32 = 200;
pub const DEFAULT_FUEL: i32 = 40;
pub const DEFAULT_SENSOR_GRADE: &str = "Military";
pub const DEFAULT_NAME: &str = "Unnamed Ship";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Friendly,
    Enemy,
}

impl Side {
    pub fn parse(value: &str) -> Side {
        if value.trim().eq_ignore_ascii_case("enemy") {
            Side::Enemy
        } else {
            Side::Friendly
        }
    }
}

/// Health tier for display: >50% healthy, >20% damaged, else critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Healthy,
    Damaged,
    Critical,
}

/// Tonnage class for the target-size attack modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeCategory {
    Normal,
    Large,
    VeryLarge,
}

impl SizeCategory {
    /// DM granted to attackers against this size of target.
    pub fn attack_dm(self) -> i32 {
        match self {
            SizeCategory::Normal => 0,
            SizeCategory::Large => 2,
            SizeCategory::VeryLarge => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Normal => "Normal",
            SizeCategory::Large => "Large",
            SizeCategory::VeryLarge => "Very Large",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    pub name: String,
    pub ship_class: String,
    pub side: Side,
    pub hull_max: i32,
    pub hull_current: i32,
    /// Nominal armor rating from the ship sheet.
    pub armor: i32,
    /// Armor after critical-hit reductions; never above nominal.
    pub armor_current: i32,
    pub thrust_max: i32,
    pub thrust_current: i32,
    pub power_max: i32,
    pub crew: i32,
    pub sensor_grade: String,
    pub tonnage: i32,
    pub fuel_max: i32,
    pub fuel_current: i32,
    /// Signed, hexes per turn.
    pub velocity: i32,
    /// Absent location means no damage there. Values always 1..=6.
    #[serde(default)]
    pub critical_hits: BTreeMap<CritLocation, u8>,
    /// Advisory EP budget per system. Not enforced against power_max.
    #[serde(default)]
    pub power_allocation: BTreeMap<PowerSystem, i32>,
    /// One-way latch, set when hull reaches 0. Healing does not clear it.
    #[serde(default)]
    pub destroyed: bool,
}

impl Ship {
    pub fn hull_percent(&self) -> f64 {
        if self.hull_max <= 0 {
            return 0.0;
        }
        f64::from(self.hull_current) / f64::from(self.hull_max) * 100.0
    }

    pub fn health_tier(&self) -> HealthTier {
        let pct = self.hull_percent();
        if pct > 50.0 {
            HealthTier::Healthy
        } else if pct > 20.0 {
            HealthTier::Damaged
        } else {
            HealthTier::Critical
        }
    }

    pub fn size_category(&self) -> SizeCategory {
        if self.tonnage > 50_000 {
            SizeCategory::VeryLarge
        } else if self.tonnage > 5_000 {
            SizeCategory::Large
        } else {
            SizeCategory::Normal
        }
    }

    pub fn crit_count(&self) -> usize {
        self.critical_hits.len()
    }
}

/// Loosely-typed ship form data. Numeric fields stay raw JSON values so the
/// registry can apply form-style coercion with per-field defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub name: Option<String>,
    #[serde(alias = "shipClass", alias = "class")]
    pub ship_class: Option<String>,
    pub side: Option<String>,
    pub hull: Option<Value>,
    pub armor: Option<Value>,
    pub thrust: Option<Value>,
    pub power: Option<Value>,
    pub crew: Option<Value>,
    #[serde(alias = "sensorGrade")]
    pub sensor_grade: Option<String>,
    pub tonnage: Option<Value>,
    pub fuel: Option<Value>,
}

impl ShipConfig {
    /// Builds a fresh ship. Every missing or unparseable field independently
    /// takes its default; max and current start equal.
    pub fn build(&self, id: String) -> Ship {
        let hull = input::int_or(self.hull.as_ref(), DEFAULT_HULL);
        let armor = input::int_or(self.armor.as_ref(), DEFAULT_ARMOR);
        let thrust = input::int_or(self.thrust.as_ref(), DEFAULT_THRUST);
        let fuel = input::int_or(self.fuel.as_ref(), DEFAULT_FUEL);
        Ship {
            id,
            name: non_empty(self.name.as_deref(), DEFAULT_NAME),
            ship_class: non_empty(self.ship_class.as_deref(), ""),
            side: self.side.as_deref().map(Side::parse).unwrap_or_default(),
            hull_max: hull,
            hull_current: hull,
            armor,
            armor_current: armor,
            thrust_max: thrust,
            thrust_current: thrust,
            power_max: input::int_or(self.power.as_ref(), DEFAULT_POWER),
            crew: input::int_or(self.crew.as_ref(), DEFAULT_CREW),
            sensor_grade: non_empty(self.sensor_grade.as_deref(), DEFAULT_SENSOR_GRADE),
            tonnage: input::int_or(self.tonnage.as_ref(), DEFAULT_TONNAGE),
            fuel_max: fuel,
            fuel_current: fuel,
            velocity: 0,
            critical_hits: BTreeMap::new(),
            power_allocation: BTreeMap::new(),
            destroyed: false,
        }
    }

    /// Overwrites only the fields that are present and parseable. Current
    /// hull/fuel are clamped down when the new max is lower, never raised.
    pub fn apply_update(&self, ship: &mut Ship) {
        if let Some(name) = self.name.as_deref() {
            if !name.trim().is_empty() {
                ship.name = name.trim().to_string();
            }
        }
        if let Some(class) = self.ship_class.as_deref() {
            if !class.trim().is_empty() {
                ship.ship_class = class.trim().to_string();
            }
        }
        if let Some(side) = self.side.as_deref() {
            ship.side = Side::parse(side);
        }
        if let Some(hull) = parse_present(self.hull.as_ref()) {
            ship.hull_max = hull;
        }
        if let Some(armor) = parse_present(self.armor.as_ref()) {
            ship.armor = armor;
            ship.armor_current = armor;
        }
        if let Some(thrust) = parse_present(self.thrust.as_ref()) {
            ship.thrust_max = thrust;
            ship.thrust_current = thrust;
        }
        if let Some(power) = parse_present(self.power.as_ref()) {
            ship.power_max = power;
        }
        if let Some(crew) = parse_present(self.crew.as_ref()) {
            ship.crew = crew;
        }
        if let Some(grade) = self.sensor_grade.as_deref() {
            if !grade.trim().is_empty() {
                ship.sensor_grade = grade.trim().to_string();
            }
        }
        if let Some(tonnage) = parse_present(self.tonnage.as_ref()) {
            ship.tonnage = tonnage;
        }
        if let Some(fuel) = parse_present(self.fuel.as_ref()) {
            ship.fuel_max = fuel;
        }
        if ship.hull_current > ship.hull_max {
            ship.hull_current = ship.hull_max;
        }
        if ship.fuel_current > ship.fuel_max {
            ship.fuel_current = ship.fuel_max;
        }
    }
}

/// Present-and-parseable check for update semantics: an absent or garbage
/// field leaves the existing value untouched.
fn parse_present(value: Option<&Value>) -> Option<i32> {
    let value = value?;
    let sentinel = i32::MIN;
    let parsed = input::int_or(Some(value), sentinel);
    (parsed != sentinel).then_some(parsed)
}

fn non_empty(value: Option<&str>, default: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => default.to_string(),
    }
}
