pub mod registry;
pub mod ship;

pub use registry::{DamageReport, ShipRegistry};
pub use ship::{HealthTier, Ship, ShipConfig, Side, SizeCategory};
