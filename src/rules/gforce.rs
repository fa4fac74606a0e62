//! G-force table: endurance saves and G-LOC outcomes keyed to total hexes
//! moved (velocity plus thrust).

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GForceRow {
    pub hexes_min: i32,
    pub hexes_max: i32,
    pub g_level: &'static str,
    pub save: &'static str,
    pub effect: &'static str,
    pub gloc: &'static str,
    pub spin_check: &'static str,
}

pub static GFORCE_TABLE: [GForceRow; 5] = [
    GForceRow {
        hexes_min: 1,
        hexes_max: 3,
        g_level: "1-2",
        save: "Easy (4+)",
        effect: "-1 DM to all tasks",
        gloc: "None",
        spin_check: "No",
    },
    GForceRow {
        hexes_min: 4,
        hexes_max: 6,
        g_level: "3-5",
        save: "Routine (6+)",
        effect: "-1 DM to all tasks",
        gloc: "Incapacitated for rest of turn",
        spin_check: "No",
    },
    GForceRow {
        hexes_min: 7,
        hexes_max: 8,
        g_level: "6-9",
        save: "Average (8+)",
        effect: "-2 DM to all tasks",
        gloc: "Incapacitated 2 turns",
        spin_check: "Average (8+)",
    },
    GForceRow {
        hexes_min: 9,
        hexes_max: 10,
        g_level: "10+",
        save: "Difficult (10+)",
        effect: "-2 DM to all tasks",
        gloc: "Incapacitated 2 turns + 1D damage",
        spin_check: "Difficult (10+)",
    },
    GForceRow {
        hexes_min: 11,
        hexes_max: i32::MAX,
        g_level: "11+",
        save: "Very Difficult (12+)",
        effect: "-4 DM to all tasks",
        gloc: "Incapacitated 3 rounds + 3D damage",
        spin_check: "Very Difficult (12+)",
    },
];

/// Row for a total hex count. None when the ship did not move; totals past
/// the last band clamp to the last row.
pub fn gforce_for_hexes(total_hexes: i32) -> Option<&'static GForceRow> {
    if total_hexes <= 0 {
        return None;
    }
    GFORCE_TABLE
        .iter()
        .find(|row| total_hexes >= row.hexes_min && total_hexes <= row.hexes_max)
        .or(GFORCE_TABLE.last())
}
