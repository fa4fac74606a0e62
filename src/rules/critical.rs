//! Critical hit reference: the 2D location table and the per-location
//! severity effect text. Locations are a closed enumeration so table lookups
//! are checked at compile time.

use serde::{Deserialize, Serialize};

/// The eleven hit locations, mapped from a 2D roll of 2 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CritLocation {
    Sensors,
    #[serde(rename = "Power Plant")]
    PowerPlant,
    Fuel,
    Weapon,
    Armor,
    Hull,
    #[serde(rename = "Maneuver Drive")]
    ManeuverDrive,
    #[serde(rename = "Cargo Hold")]
    CargoHold,
    #[serde(rename = "Jump Drive")]
    JumpDrive,
    Crew,
    Bridge,
}

pub const MAX_SEVERITY: u8 = 6;

/// Breach rule: damage to unprotected occupants each round until sealed.
pub const HULL_BREACH_NOTE: &str =
    "3D damage per round to unprotected crew until protected from vacuum";

impl CritLocation {
    pub const ALL: [CritLocation; 11] = [
        CritLocation::Sensors,
        CritLocation::PowerPlant,
        CritLocation::Fuel,
        CritLocation::Weapon,
        CritLocation::Armor,
        CritLocation::Hull,
        CritLocation::ManeuverDrive,
        CritLocation::CargoHold,
        CritLocation::JumpDrive,
        CritLocation::Crew,
        CritLocation::Bridge,
    ];

    /// Location for a 2D roll total. None outside 2..=12.
    pub fn from_roll(total: u32) -> Option<CritLocation> {
        match total {
            2 => Some(CritLocation::Sensors),
            3 => Some(CritLocation::PowerPlant),
            4 => Some(CritLocation::Fuel),
            5 => Some(CritLocation::Weapon),
            6 => Some(CritLocation::Armor),
            7 => Some(CritLocation::Hull),
            8 => Some(CritLocation::ManeuverDrive),
            9 => Some(CritLocation::CargoHold),
            10 => Some(CritLocation::JumpDrive),
            11 => Some(CritLocation::Crew),
            12 => Some(CritLocation::Bridge),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CritLocation::Sensors => "Sensors",
            CritLocation::PowerPlant => "Power Plant",
            CritLocation::Fuel => "Fuel",
            CritLocation::Weapon => "Weapon",
            CritLocation::Armor => "Armor",
            CritLocation::Hull => "Hull",
            CritLocation::ManeuverDrive => "Maneuver Drive",
            CritLocation::CargoHold => "Cargo Hold",
            CritLocation::JumpDrive => "Jump Drive",
            CritLocation::Crew => "Crew",
            CritLocation::Bridge => "Bridge",
        }
    }

    /// Loose name lookup for form input. Case-insensitive, spaces optional.
    pub fn parse(name: &str) -> Option<CritLocation> {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .flat_map(|c| c.to_lowercase())
            .collect();
        CritLocation::ALL.into_iter().find(|loc| {
            loc.as_str()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .flat_map(|c| c.to_lowercase())
                .collect::<String>()
                == normalized
        })
    }

    /// Severity-indexed effect text, severities 1 through 6.
    pub fn effects(self) -> &'static [&'static str; 6] {
        match self {
            CritLocation::Sensors => &[
                "DM −2",
                "Inoperative beyond Med range",
                "Inoperative beyond Short range",
                "Inoperative beyond Close range",
                "Close range only, DM −2",
                "Disabled",
            ],
            CritLocation::PowerPlant => &[
                "Power reduced 10%",
                "Power reduced by 20%",
                "Power reduced by 50%",
                "Power reduced to 0",
                "Hull severity increased by 1. 0 Power.",
                "Hull severity increased by 1D. 0 Power.",
            ],
            CritLocation::Fuel => &[
                "Leak — lose 1D tons/hour",
                "Leak — lose 1D tons/round",
                "Leak — lose 1D × 10% of fuel",
                "Fuel tank destroyed",
                "Fuel tank destroyed, Hull severity +1",
                "Fuel tank destroyed, Hull severity +1D",
            ],
            CritLocation::Weapon => &[
                "Random weapon degraded — DM −1",
                "Random weapon disabled",
                "Random weapon destroyed",
                "Random weapon destroyed. Hull Severity +1",
                "1D3 random weapons destroyed, Hull severity +1",
                "1D random weapons destroyed, Hull severity +1",
            ],
            CritLocation::Armor => &[
                "Armor reduced by −1",
                "Armor reduced by 1D3",
                "Armor reduced by −1D",
                "Armor reduced by −1D",
                "Armor reduced by −2D, Hull Severity +1",
                "Armor reduced by −2D, Hull Severity +1",
            ],
            CritLocation::Hull => &[
                "1D extra damage",
                "2D extra damage",
                "3D extra damage",
                "4D extra damage",
                "5D extra damage",
                "6D extra damage",
            ],
            CritLocation::ManeuverDrive => &[
                "All checks DM −1",
                "All checks DM −1. Thrust −1.",
                "All checks DM −1. Thrust −1.",
                "All checks DM −1. Thrust −1.",
                "Thrust reduced to 0",
                "Thrust reduced to 0. Hull severity +1",
            ],
            CritLocation::CargoHold => &[
                "10% Cargo destroyed",
                "1D × 10% Cargo destroyed",
                "2D × 10% Cargo destroyed",
                "All cargo destroyed",
                "All cargo destroyed. Hull severity +1",
                "All cargo destroyed. Hull severity +1",
            ],
            CritLocation::JumpDrive => &[
                "DM −2 to Jump Checks",
                "Jump Drive disabled",
                "Jump Drive destroyed",
                "Jump Drive destroyed. Hull severity +1",
                "Jump Drive destroyed. Hull severity +1",
                "Jump Drive destroyed. Hull severity +1",
            ],
            CritLocation::Crew => &[
                "Random Crew member takes 1D damage",
                "Life Support fails in 1D hours",
                "1D occupants take 2D damage",
                "Life Support fails within 1D rounds",
                "All occupants take 3D damage",
                "Life support fails",
            ],
            CritLocation::Bridge => &[
                "Random Bridge Station Disabled (1-2: Sensors, 3-4: Comm, 5-6: Avionics)",
                "Computer reboots; all software unavailable this round and next",
                "Computer damaged, reduced bandwidth 50%",
                "Random Bridge Station destroyed. Occupant takes 1D × 1D damage",
                "Computer destroyed",
                "Random Bridge Station destroyed. Occupant takes 1D × 1D damage. Hull severity +1",
            ],
        }
    }

    /// Effect text for a severity, clamped into 1..=6.
    pub fn effect_text(self, severity: u8) -> &'static str {
        let index = severity.clamp(1, MAX_SEVERITY) as usize - 1;
        self.effects()[index]
    }

    /// Locations whose criticals open the hull to vacuum.
    pub fn hull_breach(self) -> bool {
        matches!(
            self,
            CritLocation::Hull
                | CritLocation::PowerPlant
                | CritLocation::ManeuverDrive
                | CritLocation::CargoHold
                | CritLocation::Crew
                | CritLocation::Bridge
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_roll_total_maps_to_one_location() {
        for total in 2..=12 {
            assert!(CritLocation::from_roll(total).is_some(), "total {total}");
        }
        assert!(CritLocation::from_roll(1).is_none());
        assert!(CritLocation::from_roll(13).is_none());
    }

    #[test]
    fn parse_accepts_loose_names() {
        assert_eq!(
            CritLocation::parse("power plant"),
            Some(CritLocation::PowerPlant)
        );
        assert_eq!(
            CritLocation::parse("ManeuverDrive"),
            Some(CritLocation::ManeuverDrive)
        );
        assert_eq!(CritLocation::parse("warp core"), None);
    }
}
