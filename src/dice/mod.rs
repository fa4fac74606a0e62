pub mod animated;
pub mod rng;
pub mod roller;

pub use animated::{run as run_animated_roll, AnimatedRoll, Frame, COSMETIC_FRAMES, FRAME_INTERVAL_MS};
pub use rng::Rng;
pub use roller::{roll, roll_multiple, roll_sum, skill_check, RollSum, SkillCheck};
