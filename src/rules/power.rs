//! Power allocation systems: the closed set of EP sinks a ship budgets for,
//! plus the slider-cap heuristics the allocation panel uses. Allocation is
//! advisory bookkeeping; an over-budget state is flagged, never rejected.

use serde::{Deserialize, Serialize};

use crate::ships::Ship;

/// The seven systems EP can be budgeted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSystem {
    MDrive,
    JDrive,
    LifeSupport,
    Sensors,
    Weapons,
    Screens,
    Reactions,
}

impl PowerSystem {
    pub const ALL: [PowerSystem; 7] = [
        PowerSystem::MDrive,
        PowerSystem::JDrive,
        PowerSystem::LifeSupport,
        PowerSystem::Sensors,
        PowerSystem::Weapons,
        PowerSystem::Screens,
        PowerSystem::Reactions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PowerSystem::MDrive => "mdrive",
            PowerSystem::JDrive => "jdrive",
            PowerSystem::LifeSupport => "lifesupport",
            PowerSystem::Sensors => "sensors",
            PowerSystem::Weapons => "weapons",
            PowerSystem::Screens => "screens",
            PowerSystem::Reactions => "reactions",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PowerSystem::MDrive => "M-Drive",
            PowerSystem::JDrive => "J-Drive",
            PowerSystem::LifeSupport => "Life Support",
            PowerSystem::Sensors => "Sensors",
            PowerSystem::Weapons => "Weapons",
            PowerSystem::Screens => "Screens",
            PowerSystem::Reactions => "Reactions",
        }
    }

    /// Rulebook EP requirement note for the reference table.
    pub fn ep_note(self) -> &'static str {
        match self {
            PowerSystem::MDrive => "1 EP per Thrust made available",
            PowerSystem::JDrive => "Per ship stats",
            PowerSystem::LifeSupport => "1 per 10 crew members",
            PowerSystem::Sensors => "1 per Sensor (ECM additional)",
            PowerSystem::Weapons => "1 per Turret + Weapon System Power",
            PowerSystem::Screens => "Per type (HG p. 41)",
            PowerSystem::Reactions => "Allocate EP reserved for reactions",
        }
    }

    pub fn parse(key: &str) -> Option<PowerSystem> {
        PowerSystem::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(key.trim()))
    }

    /// Slider cap used by the allocation panel. These are table conventions
    /// inherited from the tracker, not rules text; treat as tunable defaults
    /// pending rule-owner confirmation.
    pub fn suggested_cap(self, ship: &Ship) -> i32 {
        match self {
            PowerSystem::MDrive => ship.thrust_max * 2,
            PowerSystem::JDrive => ship.power_max * 4 / 10,
            PowerSystem::LifeSupport => life_support_baseline(ship) * 2,
            PowerSystem::Sensors => 10,
            PowerSystem::Weapons => ship.power_max * 6 / 10,
            PowerSystem::Screens => 60,
            PowerSystem::Reactions => ship.power_max * 3 / 10,
        }
    }

    /// Starting allocation before the operator touches the sliders.
    pub fn default_allocation(self, ship: &Ship) -> i32 {
        match self {
            PowerSystem::LifeSupport => life_support_baseline(ship),
            PowerSystem::Sensors => 1,
            _ => 0,
        }
    }
}

/// 1 EP per 10 crew, rounded up.
fn life_support_baseline(ship: &Ship) -> i32 {
    (ship.crew + 9) / 10
}

/// Advisory budget snapshot for one ship.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PowerSummary {
    pub budget: i32,
    pub allocated: i32,
    pub remaining: i32,
    pub over_budget: bool,
}

pub fn power_summary(ship: &Ship) -> PowerSummary {
    let allocated: i32 = ship.power_allocation.values().sum();
    let remaining = ship.power_max - allocated;
    PowerSummary {
        budget: ship.power_max,
        allocated,
        remaining,
        over_budget: remaining < 0,
    }
}
