//! Static rules reference data. Loaded into the binary at compile time,
//! read-only, never mutated by the engine.

pub mod critical;
pub mod gforce;
pub mod phases;
pub mod power;
pub mod tables;
pub mod weapons;

pub use critical::{CritLocation, HULL_BREACH_NOTE, MAX_SEVERITY};
pub use gforce::{gforce_for_hexes, GForceRow, GFORCE_TABLE};
pub use phases::{total_steps, Phase, Step, TURN_PHASES};
pub use power::{power_summary, PowerSummary, PowerSystem};
pub use tables::{
    CrewAction, Difficulty, MovementAction, RangeBand, SensorGrade, SensorMode, CREW_ACTIONS,
    CREW_ACTION_LIMIT, DIFFICULTIES, MOVEMENT_ACTIONS, RANGE_BANDS, SENSOR_GRADES, SENSOR_MODES,
};
pub use weapons::{
    Mount, OrdnanceRow, PointDefenseRow, SandCanisterRow, ScreenRow, WeaponRow, MISSILES,
    POINT_DEFENSE_GAUSS, POINT_DEFENSE_LASER, SAND_CANISTERS, SCREENS, TORPEDOES, WEAPONS_BARBETTE,
    WEAPONS_SMALL_BAY, WEAPONS_TURRET,
};
