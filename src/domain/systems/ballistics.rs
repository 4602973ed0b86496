use crate::domain::state::Position;
use crate::domain::tuning::{Axis, FieldLayout};

/// One cell of travel along the layout's travel axis.
pub fn advance(layout: &FieldLayout, pos: Position) -> Position {
    match layout.axis {
        Axis::Horizontal => Position::new(pos.x - 1, pos.y),
        Axis::Vertical => Position::new(pos.x, pos.y - 1),
    }
}

/// True while the projectile has not left the field on its travel axis.
pub fn in_flight(layout: &FieldLayout, pos: Position) -> bool {
    match layout.axis {
        Axis::Horizontal => pos.x >= 0,
        Axis::Vertical => pos.y >= 0,
    }
}

/// Single-cell coincidence test against the helicopter.
pub fn impacts(projectile: Position, helicopter: Position) -> bool {
    projectile == helicopter
}
