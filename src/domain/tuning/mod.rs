// Gameplay tuning, separate from runtime/bootstrap configuration.

pub mod difficulty;
pub mod field;
pub mod pace;

pub use difficulty::{Difficulty, DifficultySettings};
pub use field::{Axis, FieldLayout};
pub use pace::Pace;
