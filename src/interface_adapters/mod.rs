// Interface adapters: terminal rendering, the difficulty menu and key input.

pub mod controls;
pub mod menu;
pub mod screen;

pub use controls::TerminalControls;
pub use menu::choose_difficulty;
pub use screen::{TerminalScreen, TerminalSession};
