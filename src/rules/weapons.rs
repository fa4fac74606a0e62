//! Weapon, ordnance, and defensive-system reference tables. Read-only data
//! published by the reference API endpoints; the resolvers never consult
//! these directly (the operator keys stats in by hand).

use serde::Serialize;

/// Mount class. Damage rolls from a mount are multiplied by its class factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mount {
    Turret,
    Barbette,
    SmallBay,
}

impl Mount {
    pub fn damage_multiplier(self) -> i32 {
        match self {
            Mount::Turret => 1,
            Mount::Barbette => 3,
            Mount::SmallBay => 10,
        }
    }

    pub fn table(self) -> &'static [WeaponRow] {
        match self {
            Mount::Turret => &WEAPONS_TURRET,
            Mount::Barbette => &WEAPONS_BARBETTE,
            Mount::SmallBay => &WEAPONS_SMALL_BAY,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeaponRow {
    pub weapon: &'static str,
    pub tl: u8,
    pub range: &'static str,
    pub ep: u32,
    pub damage: &'static str,
    pub traits: &'static str,
}

pub static WEAPONS_TURRET: [WeaponRow; 8] = [
    WeaponRow { weapon: "Beam Laser", tl: 10, range: "Med (2-4)", ep: 4, damage: "1D", traits: "—" },
    WeaponRow { weapon: "Pulse Laser", tl: 9, range: "Long (5-10)", ep: 4, damage: "2D", traits: "—" },
    WeaponRow { weapon: "Missile Rack", tl: 7, range: "Per Wpn", ep: 0, damage: "Per Wpn", traits: "Smart" },
    WeaponRow { weapon: "Fusion Gun", tl: 14, range: "Med (2-4)", ep: 12, damage: "4D", traits: "Radiation" },
    WeaponRow { weapon: "Laser Drill", tl: 8, range: "Close (0-Same Hex)", ep: 4, damage: "2D", traits: "AP 4" },
    WeaponRow { weapon: "Particle Beam", tl: 12, range: "Very Long (11-20)", ep: 8, damage: "3D", traits: "Radiation" },
    WeaponRow { weapon: "Railgun", tl: 10, range: "Short (1)", ep: 2, damage: "2D", traits: "AP 4" },
    WeaponRow { weapon: "Sand Caster", tl: 9, range: "Special", ep: 0, damage: "Special", traits: "—" },
];

pub static WEAPONS_BARBETTE: [WeaponRow; 8] = [
    WeaponRow { weapon: "Beam Laser", tl: 10, range: "Med (2-4)", ep: 12, damage: "2D", traits: "—" },
    WeaponRow { weapon: "Fusion", tl: 12, range: "Med (2-4)", ep: 20, damage: "5D", traits: "AP 3, Radiation" },
    WeaponRow { weapon: "Ion Cannon", tl: 12, range: "Med (2-4)", ep: 10, damage: "7D (HG p.30)", traits: "Ion" },
    WeaponRow { weapon: "Missile", tl: 7, range: "Per Wpn", ep: 0, damage: "Per Wpn", traits: "Smart" },
    WeaponRow { weapon: "Particle Beam", tl: 11, range: "Very Long (11-20)", ep: 12, damage: "4D", traits: "Radiation" },
    WeaponRow { weapon: "Plasma", tl: 11, range: "Medium (2-4)", ep: 12, damage: "4D", traits: "AP 2" },
    WeaponRow { weapon: "Pulse Laser", tl: 9, range: "Long (5-10)", ep: 12, damage: "3D", traits: "—" },
    WeaponRow { weapon: "Torpedo", tl: 7, range: "Per Wpn", ep: 2, damage: "Per Wpn", traits: "Smart" },
];

pub static WEAPONS_SMALL_BAY: [WeaponRow; 11] = [
    WeaponRow { weapon: "Fusion", tl: 12, range: "Med (2-4)", ep: 50, damage: "6D", traits: "AP 6, Radiation" },
    WeaponRow { weapon: "Ion Cannon", tl: 12, range: "Med (2-4)", ep: 20, damage: "6D (HG p.30)", traits: "Ion" },
    WeaponRow { weapon: "Mass Driver", tl: 8, range: "Short (1)", ep: 15, damage: "3D", traits: "Orbital Bombardment" },
    WeaponRow { weapon: "Meson", tl: 11, range: "Long (5-10)", ep: 20, damage: "5D", traits: "Ignore armor, Radiation" },
    WeaponRow { weapon: "Missile Bay", tl: 7, range: "Per Wpn", ep: 5, damage: "Per Wpn", traits: "Smart" },
    WeaponRow { weapon: "Orbital Strike Mass Driver", tl: 10, range: "Short (1)", ep: 35, damage: "7D", traits: "Orbital Strike" },
    WeaponRow { weapon: "Orbital Strike Missile Bay", tl: 10, range: "Med (2-4)", ep: 5, damage: "3D", traits: "Orbital Strike" },
    WeaponRow { weapon: "Particle Beam", tl: 11, range: "Very Long (5-10)", ep: 30, damage: "6D", traits: "Radiation" },
    WeaponRow { weapon: "Railgun", tl: 10, range: "Short (1)", ep: 10, damage: "3D", traits: "AP 10" },
    WeaponRow { weapon: "Repulsor", tl: 15, range: "Short (1)", ep: 50, damage: "HG p.34", traits: "—" },
    WeaponRow { weapon: "Torpedo", tl: 7, range: "Per Wpn", ep: 2, damage: "Per Wpn", traits: "Smart" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrdnanceRow {
    pub warhead: &'static str,
    pub tl: u8,
    pub thrust: u32,
    pub damage: &'static str,
    pub traits: &'static str,
}

pub static MISSILES: [OrdnanceRow; 13] = [
    OrdnanceRow { warhead: "Standard", tl: 7, thrust: 10, damage: "4D", traits: "Smart" },
    OrdnanceRow { warhead: "Advanced", tl: 14, thrust: 15, damage: "5D", traits: "Smart" },
    OrdnanceRow { warhead: "Antimatter", tl: 20, thrust: 15, damage: "2DD", traits: "Radiation, Smart" },
    OrdnanceRow { warhead: "Anti-Torpedo", tl: 13, thrust: 15, damage: "1D", traits: "Smart" },
    OrdnanceRow { warhead: "Decoy", tl: 9, thrust: 15, damage: "2D", traits: "Smart" },
    OrdnanceRow { warhead: "Frag", tl: 8, thrust: 15, damage: "3D", traits: "Smart" },
    OrdnanceRow { warhead: "Ion", tl: 12, thrust: 12, damage: "See HG p.30", traits: "Ion" },
    OrdnanceRow { warhead: "Jump Breaker", tl: 13, thrust: 10, damage: "See HG p.37", traits: "Smart" },
    OrdnanceRow { warhead: "Long Range", tl: 8, thrust: 15, damage: "3D", traits: "Smart" },
    OrdnanceRow { warhead: "Multi-Warhead", tl: 8, thrust: 10, damage: "3D", traits: "Smart" },
    OrdnanceRow { warhead: "Nuclear", tl: 6, thrust: 10, damage: "1DD", traits: "Radiation, Smart" },
    OrdnanceRow { warhead: "Ortillery", tl: 7, thrust: 6, damage: "1DD", traits: "Orbital Strike" },
    OrdnanceRow { warhead: "Shockwave", tl: 7, thrust: 10, damage: "4D", traits: "Smart" },
];

pub static TORPEDOES: [OrdnanceRow; 13] = [
    OrdnanceRow { warhead: "Standard", tl: 7, thrust: 10, damage: "6D", traits: "Smart" },
    OrdnanceRow { warhead: "Advanced", tl: 14, thrust: 15, damage: "7D", traits: "Smart" },
    OrdnanceRow { warhead: "Antimatter", tl: 20, thrust: 10, damage: "3DD", traits: "Radiation, Smart" },
    OrdnanceRow { warhead: "Antimatter Bomb-Pumped", tl: 21, thrust: 10, damage: "8D", traits: "AP 10, Radiation, Smart" },
    OrdnanceRow { warhead: "Antiradiation", tl: 12, thrust: 10, damage: "6D", traits: "Smart" },
    OrdnanceRow { warhead: "Bomb-Pumped", tl: 9, thrust: 10, damage: "4D", traits: "Smart" },
    OrdnanceRow { warhead: "Ion", tl: 9, thrust: 10, damage: "See HG p.39", traits: "Smart" },
    OrdnanceRow { warhead: "Multi-Warhead Antimatter", tl: 21, thrust: 10, damage: "1DD", traits: "Radiation, Smart" },
    OrdnanceRow { warhead: "Multi-Warhead Standard", tl: 8, thrust: 10, damage: "4D", traits: "Smart" },
    OrdnanceRow { warhead: "Multi-Warhead Nuclear", tl: 8, thrust: 10, damage: "2DD", traits: "Radiation, Smart" },
    OrdnanceRow { warhead: "Nuclear", tl: 7, thrust: 10, damage: "2DD", traits: "Radiation, Smart" },
    OrdnanceRow { warhead: "Ortillery", tl: 8, thrust: 6, damage: "3DD", traits: "Orbital Strike" },
    OrdnanceRow { warhead: "Plasma", tl: 12, thrust: 10, damage: "1DD", traits: "AP 10, Smart" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointDefenseRow {
    pub kind: &'static str,
    pub tl: u8,
    pub intercept: &'static str,
    pub ep: u32,
}

pub static POINT_DEFENSE_LASER: [PointDefenseRow; 3] = [
    PointDefenseRow { kind: "Type I", tl: 10, intercept: "+2D", ep: 10 },
    PointDefenseRow { kind: "Type II", tl: 12, intercept: "+4D", ep: 20 },
    PointDefenseRow { kind: "Type III", tl: 14, intercept: "+6D", ep: 30 },
];

pub static POINT_DEFENSE_GAUSS: [PointDefenseRow; 3] = [
    PointDefenseRow { kind: "Type I", tl: 10, intercept: "+2D", ep: 5 },
    PointDefenseRow { kind: "Type II", tl: 12, intercept: "+4D", ep: 15 },
    PointDefenseRow { kind: "Type III", tl: 14, intercept: "+6D", ep: 25 },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScreenRow {
    pub screen: &'static str,
    pub tl: u8,
    pub ep: u32,
    pub effect: &'static str,
}

pub static SCREENS: [ScreenRow; 2] = [
    ScreenRow {
        screen: "Meson Screen",
        tl: 13,
        ep: 30,
        effect: "Damage from meson weapons reduced by 2D × 10, removes radiation trait",
    },
    ScreenRow {
        screen: "Nuclear Dampener",
        tl: 12,
        ep: 20,
        effect: "Reduces damage from fusion/nuclear by 2D, removes radiation trait",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SandCanisterRow {
    pub kind: &'static str,
    pub tl: u8,
    pub count: u32,
    pub effect: &'static str,
}

pub static SAND_CANISTERS: [SandCanisterRow; 5] = [
    SandCanisterRow {
        kind: "Standard",
        tl: 7,
        count: 20,
        effect: "1D + EFFECT adds to armor vs beam weapons",
    },
    SandCanisterRow {
        kind: "Anti-Personnel",
        tl: 8,
        count: 20,
        effect: "3D damage + EFFECT (ground scale) vs personnel. Range: SHORT",
    },
    SandCanisterRow {
        kind: "Flares/Chaff",
        tl: 8,
        count: 20,
        effect: "DM −1 vs sensor checks and missile/torpedo attacks",
    },
    SandCanisterRow {
        kind: "Pebble",
        tl: 7,
        count: 20,
        effect: "1DD damage + EFFECT (ground scale) vs boarders. Boarding range only",
    },
    SandCanisterRow {
        kind: "Sand Cutter",
        tl: 8,
        count: 20,
        effect: "½ protection to enemy sand cloud. Range: SHORT",
    },
];
