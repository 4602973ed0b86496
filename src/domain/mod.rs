// Domain layer: core simulation types and rules.

pub mod outcome;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use outcome::Outcome;
pub use ports::{Canvas, Controls, Key};
pub use state::{
    Battery, BatteryPhase, BatterySnapshot, Frame, Helicopter, Pads, Position, Projectile,
    WorldState,
};
