// Use cases layer: the shared world handle and the actor tasks.

pub mod battery;
pub mod game;
pub mod helicopter;
pub mod pilot;
pub mod projectile;
pub mod world;

pub use game::run_mission;
pub use world::SharedWorld;
