//! Ship registry: owns the encounter's ships, applies every mutation, and
//! persists a full snapshot plus synchronous observer notification after
//! each one. Unknown ids are no-ops returning None, never errors.

use serde_json::json;
use uuid::Uuid;

use crate::rules::{CritLocation, PowerSystem, MAX_SEVERITY};
use crate::ships::ship::{Ship, ShipConfig};
use crate::store::{StateStore, SHIPS_KEY};

/// Breakdown of one damage application, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DamageReport {
    pub raw_damage: i32,
    pub effective_armor: i32,
    pub final_damage: i32,
    pub remaining_hull: i32,
    pub destroyed: bool,
}

type ChangeListener = Box<dyn Fn(&[Ship])>;

pub struct ShipRegistry {
    ships: Vec<Ship>,
    listeners: Vec<ChangeListener>,
    store: Box<dyn StateStore>,
}

impl ShipRegistry {
    /// Loads the ship list from the store. Missing or malformed data falls
    /// back to an empty encounter.
    pub fn load(store: Box<dyn StateStore>) -> Self {
        let ships = store
            .get(SHIPS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            ships,
            listeners: Vec::new(),
            store,
        }
    }

    /// Registers a synchronous observer, called after every mutation.
    pub fn on_change(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    pub fn get(&self, id: &str) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id == id)
    }

    pub fn get_all(&self) -> &[Ship] {
        &self.ships
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Adds a ship built from loose form data and returns a copy of it.
    pub fn add(&mut self, config: &ShipConfig) -> Ship {
        let ship = config.build(Uuid::new_v4().to_string());
        self.ships.push(ship.clone());
        self.commit();
        ship
    }

    /// Updates only the provided fields. None when the id is unknown.
    pub fn update(&mut self, id: &str, config: &ShipConfig) -> Option<Ship> {
        let ship = self.ships.iter_mut().find(|ship| ship.id == id)?;
        config.apply_update(ship);
        let updated = ship.clone();
        self.commit();
        Some(updated)
    }

    /// Removes a ship. False when the id was unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ships.len();
        self.ships.retain(|ship| ship.id != id);
        let removed = self.ships.len() != before;
        if removed {
            self.commit();
        }
        removed
    }

    /// Applies raw damage through armor: effective armor is current armor
    /// less AP, final damage is what penetrates. Hull floors at 0 and sets
    /// the one-way destroyed latch.
    pub fn apply_damage(&mut self, id: &str, raw_damage: i32, ap: i32) -> Option<DamageReport> {
        let ship = self.ships.iter_mut().find(|ship| ship.id == id)?;
        let effective_armor = (ship.armor_current - ap).max(0);
        let final_damage = (raw_damage - effective_armor).max(0);
        ship.hull_current = (ship.hull_current - final_damage).max(0);
        if ship.hull_current == 0 {
            ship.destroyed = true;
        }
        let report = DamageReport {
            raw_damage,
            effective_armor,
            final_damage,
            remaining_hull: ship.hull_current,
            destroyed: ship.destroyed,
        };
        self.commit();
        Some(report)
    }

    /// Restores hull up to the maximum. Does not clear the destroyed latch.
    pub fn heal_hull(&mut self, id: &str, amount: i32) -> Option<i32> {
        let ship = self.ships.iter_mut().find(|ship| ship.id == id)?;
        ship.hull_current = (ship.hull_current + amount.max(0)).min(ship.hull_max);
        let remaining = ship.hull_current;
        self.commit();
        Some(remaining)
    }

    /// Sets a critical severity at a location. Severity <= 0 clears the
    /// entry; anything else is capped at 6.
    pub fn set_critical(&mut self, id: &str, location: CritLocation, severity: i32) -> Option<u8> {
        let ship = self.ships.iter_mut().find(|ship| ship.id == id)?;
        let applied = if severity <= 0 {
            ship.critical_hits.remove(&location);
            0
        } else {
            let capped = severity.min(i32::from(MAX_SEVERITY)) as u8;
            ship.critical_hits.insert(location, capped);
            capped
        };
        self.commit();
        Some(applied)
    }

    pub fn set_velocity(&mut self, id: &str, velocity: i32) -> Option<i32> {
        let ship = self.ships.iter_mut().find(|ship| ship.id == id)?;
        ship.velocity = velocity;
        self.commit();
        Some(velocity)
    }

    /// Records an advisory EP allocation. Negative values clamp to 0; the
    /// total is allowed to exceed the budget (flagged by `power_summary`).
    pub fn allocate_power(&mut self, id: &str, system: PowerSystem, ep: i32) -> Option<i32> {
        let ship = self.ships.iter_mut().find(|ship| ship.id == id)?;
        let ep = ep.max(0);
        ship.power_allocation.insert(system, ep);
        self.commit();
        Some(ep)
    }

    /// Clears the whole encounter.
    pub fn clear(&mut self) {
        self.ships.clear();
        self.commit();
    }

    /// Persist the full snapshot, then notify observers. Persistence failure
    /// is swallowed inside the store; in-memory state stays authoritative.
    fn commit(&mut self) {
        let snapshot = serde_json::to_string(&self.ships)
            .unwrap_or_else(|_| json!([]).to_string());
        self.store.put(SHIPS_KEY, &snapshot);
        for listener in &self.listeners {
            listener(&self.ships);
        }
    }
}
