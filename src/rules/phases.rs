//! Turn sequence definition: 4 phases, 13 steps. Static and read-only; the
//! turn tracker is a cursor over this table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Phase {
    pub id: &'static str,
    pub name: &'static str,
    pub steps: &'static [Step],
}

pub static TURN_PHASES: [Phase; 4] = [
    Phase {
        id: "tactics",
        name: "Tactics Step",
        steps: &[
            Step {
                id: "initiative",
                name: "Determine Initiative Order",
                desc: "Tactics (Naval) 8+. Add Effect. Highest picks to go First (high→low) or Last (low→high).",
            },
            Step {
                id: "power",
                name: "Power Allocation",
                desc: "Allocate Energy Points (EP) to systems and actions in initiative order.",
            },
            Step {
                id: "sensors",
                name: "Sensor Checks",
                desc: "Choose sensor mode (Passive/Active/ECM). Allocate software programs.",
            },
            Step {
                id: "targetlocks",
                name: "Target Locks",
                desc: "Establish target locks (1 EP per target, +4 DM). Overt act — automatically detected.",
            },
            Step {
                id: "ecm",
                name: "ECM vs Existing Locks",
                desc: "Sensor Operator can attempt to break a pre-existing targeting lock from the previous turn (Opposed, −2 DM).",
            },
        ],
    },
    Phase {
        id: "maneuver",
        name: "Maneuver Step",
        steps: &[
            Step {
                id: "movement",
                name: "Ship Movement",
                desc: "Apply Velocity first, then Thrust. Thrust ≤ allocated EP.",
            },
            Step {
                id: "gforce",
                name: "G-Force Effects",
                desc: "All crew make Endurance Save based on total hexes moved. Check for G-LOC and Spin.",
            },
        ],
    },
    Phase {
        id: "attack",
        name: "Attack Step",
        steps: &[
            Step {
                id: "ordnance_move",
                name: "Move In-Flight Ordnance",
                desc: "Move existing missile and torpedo salvos.",
            },
            Step {
                id: "ordnance_launch",
                name: "Launch New Ordnance",
                desc: "Fire new missile and torpedo salvos.",
            },
            Step {
                id: "ordnance_attack",
                name: "Ordnance Attacks & Reactions",
                desc: "Resolve ordnance attacks. Defender reacts with Point Defense / ECM / Evade.",
            },
            Step {
                id: "directfire",
                name: "Direct Fire Attacks",
                desc: "Make direct fire attacks.",
            },
            Step {
                id: "directfire_react",
                name: "Direct Fire Reactions",
                desc: "Defender reacts with Screens / Sand Casters / Evade.",
            },
            Step {
                id: "resolve_damage",
                name: "Resolve Damage",
                desc: "Apply damage, check for critical hits.",
            },
        ],
    },
    Phase {
        id: "crew",
        name: "Crew Actions Step",
        steps: &[Step {
            id: "crew_actions",
            name: "Crew Actions (Limit 6)",
            desc: "Distribute up to 6 actions among crew (including previous actions above).",
        }],
    },
];

/// Steps across all phases; one full turn is exactly this many advances.
pub fn total_steps() -> usize {
    TURN_PHASES.iter().map(|phase| phase.steps.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sequence_has_thirteen_steps() {
        assert_eq!(TURN_PHASES.len(), 4);
        assert_eq!(total_steps(), 13);
    }

    #[test]
    fn every_phase_has_at_least_one_step() {
        for phase in &TURN_PHASES {
            assert!(!phase.steps.is_empty(), "phase {} has no steps", phase.id);
        }
    }
}
