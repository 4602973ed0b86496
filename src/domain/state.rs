// Domain-level simulation state and frame snapshot types.

use crate::domain::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Helicopter {
    pub pos: Position,
    pub carrying: bool,
}

/// Landing pads: the fixed pickup point and the relocating drop point.
#[derive(Debug, Clone, Copy)]
pub struct Pads {
    pub origin: Position,
    pub dest: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryPhase {
    Firing,
    WaitingForSlot,
    Reloading,
}

#[derive(Debug, Clone, Copy)]
pub struct Battery {
    pub id: u8,

    // Coordinate along the battery band axis; the field layout maps it to a cell.
    pub band_pos: i32,

    // Combat state.
    pub ammo: u32,
    pub phase: BatteryPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub id: u64,
    pub owner: u8,
    pub pos: Position,
}

/// Everything guarded by the state lock, in one record.
pub struct WorldState {
    pub helicopter: Helicopter,
    pub pads: Pads,
    pub batteries: [Battery; 2],
    pub evacuated: u32,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Copy)]
pub struct BatterySnapshot {
    pub id: u8,
    pub pos: Position,
    pub ammo: u32,
    pub reloading: bool,
}

/// One full-canvas render snapshot handed to the canvas port.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub evacuated: u32,
    pub target: u32,
    pub helicopter: Helicopter,
    pub pads: Pads,
    pub batteries: [BatterySnapshot; 2],
    pub dock: Position,
    pub projectiles: Vec<Position>,
    pub outcome: Option<Outcome>,
}
