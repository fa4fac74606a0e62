//! General reference tables: task difficulties, range bands, sensors,
//! movement costs, and crew actions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Difficulty {
    pub name: &'static str,
    pub target: i32,
}

pub static DIFFICULTIES: [Difficulty; 8] = [
    Difficulty { name: "Simple", target: 2 },
    Difficulty { name: "Easy", target: 4 },
    Difficulty { name: "Routine", target: 6 },
    Difficulty { name: "Average", target: 8 },
    Difficulty { name: "Difficult", target: 10 },
    Difficulty { name: "Very Difficult", target: 12 },
    Difficulty { name: "Formidable", target: 14 },
    Difficulty { name: "Impossible", target: 16 },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RangeBand {
    pub band: &'static str,
    pub hexes: &'static str,
    pub distance: &'static str,
    /// None when the band is out of weapons range entirely.
    pub weapons_dm: Option<i32>,
    pub sensor_dm: Option<i32>,
}

pub static RANGE_BANDS: [RangeBand; 8] = [
    RangeBand { band: "Close", hexes: "0", distance: "<5,000 km", weapons_dm: Some(2), sensor_dm: Some(2) },
    RangeBand { band: "Short", hexes: "1", distance: "5,000 km", weapons_dm: Some(2), sensor_dm: Some(2) },
    RangeBand { band: "Medium", hexes: "2-4", distance: "5,001–10,000 km", weapons_dm: Some(0), sensor_dm: Some(0) },
    RangeBand { band: "Long", hexes: "5-10", distance: "10,001–25,000 km", weapons_dm: Some(0), sensor_dm: Some(0) },
    RangeBand { band: "Very Long", hexes: "11-20", distance: "25,001–50,000 km", weapons_dm: Some(-2), sensor_dm: Some(-2) },
    RangeBand { band: "Distant", hexes: "21-36", distance: "50,000–300,000 km", weapons_dm: Some(-4), sensor_dm: Some(-4) },
    RangeBand { band: "Extreme", hexes: "37+", distance: "300,000–5mil km", weapons_dm: None, sensor_dm: Some(-6) },
    RangeBand { band: "Far", hexes: "1000+", distance: "Over 5mil km", weapons_dm: None, sensor_dm: None },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SensorGrade {
    pub grade: &'static str,
    pub tl: &'static str,
    pub max_locks: &'static str,
    pub example: &'static str,
}

pub static SENSOR_GRADES: [SensorGrade; 3] = [
    SensorGrade {
        grade: "Civilian",
        tl: "TL7-9",
        max_locks: "1",
        example: "Single target — basic detection/fire control",
    },
    SensorGrade {
        grade: "Military",
        tl: "TL10-12",
        max_locks: "2-3",
        example: "Track 2-3 targets; military standard",
    },
    SensorGrade {
        grade: "Advanced",
        tl: "TL13-15",
        max_locks: "4+",
        example: "Multi-threat military grade sensor array",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SensorMode {
    pub mode: &'static str,
    pub ep: &'static str,
    pub dm: &'static str,
    pub detection_risk: &'static str,
}

pub static SENSOR_MODES: [SensorMode; 4] = [
    SensorMode { mode: "Passive", ep: "0", dm: "-2 / -4 vs Stealth", detection_risk: "0" },
    SensorMode { mode: "Active", ep: "1", dm: "0 / -2 vs Stealth", detection_risk: "+2 Enemy Sensor" },
    SensorMode { mode: "ECM", ep: "1", dm: "Allows ECM", detection_risk: "0" },
    SensorMode { mode: "Target Lock", ep: "1/target", dm: "+4 DM for attacks", detection_risk: "Automatic" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MovementAction {
    pub action: &'static str,
    pub ep: &'static str,
    pub note: &'static str,
}

pub static MOVEMENT_ACTIONS: [MovementAction; 6] = [
    MovementAction { action: "Acceleration", ep: "1 per hex", note: "Forward only" },
    MovementAction { action: "Deceleration", ep: "1 per decel", note: "Stops Acceleration" },
    MovementAction { action: "Turn 60°", ep: "1 + ⌊Speed/3⌋", note: "One hex facing" },
    MovementAction { action: "Sideways Vector", ep: "2", note: "One hex to side" },
    MovementAction { action: "Aid Gunners", ep: "1", note: "Pilot/Gunner task chain" },
    MovementAction { action: "Docking", ep: "1", note: "Same hex" },
];

/// Actions a crew may distribute per turn.
pub const CREW_ACTION_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrewAction {
    pub action: &'static str,
    pub role: &'static str,
    pub difficulty: &'static str,
    pub desc: &'static str,
}

pub static CREW_ACTIONS: [CrewAction; 9] = [
    CrewAction {
        action: "Emergency Jump",
        role: "Astrogation & Engineer",
        difficulty: "Difficult (10+)",
        desc: "Successful Astrogation and jump drive emergency jump. Jump can be made next maneuver step.",
    },
    CrewAction {
        action: "Overload Drive",
        role: "Engineer",
        difficulty: "Difficult (10+) [M-Drive]",
        desc: "Increases Thrust by 1 next maneuver step. Effect of −6 causes Severity 1 crit to drive.",
    },
    CrewAction {
        action: "Overload Plant",
        role: "Engineer",
        difficulty: "Difficult (10+) [M-Drive]",
        desc: "Increases power +10% next maneuver step. Effect of −6 causes Severity 1 crit to plant. Cumulative DM −2.",
    },
    CrewAction {
        action: "Offline System",
        role: "Engineer (Power)",
        difficulty: "Engineer check",
        desc: "Shut down systems to reduce EP requirements. 1 round to bring back online.",
    },
    CrewAction {
        action: "Repair System",
        role: "Engineer",
        difficulty: "Average (8+)",
        desc: "Repair critical hit. DM = −severity. Cumulative DM +1 per round working. Reduces severity by 1. Lasts 1D hours.",
    },
    CrewAction {
        action: "Repair Drone",
        role: "Electronics (Remote Ops)",
        difficulty: "Varies",
        desc: "Employ a repair drone to use the Repair Systems reaction.",
    },
    CrewAction {
        action: "Reload Turret",
        role: "Gunner",
        difficulty: "Easy (4+)",
        desc: "Reload munitions for missiles/torpedoes/sand casters/railguns in a turret or barbette.",
    },
    CrewAction {
        action: "Boarding Action",
        role: "Marine",
        difficulty: "Varies",
        desc: "If two ships are adjacent, launch a boarding party to storm an enemy ship.",
    },
    CrewAction {
        action: "Reassignment",
        role: "Any",
        difficulty: "None",
        desc: "Change role on ship. Transfer takes one step to complete.",
    },
];
