use std::ops::RangeInclusive;

use crate::domain::state::Position;

/// Travel axis of projectiles. The two layouts are the same design with the
/// field rotated, so everything else derives from this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Batteries on a column near the right edge, projectiles fly toward x = 0.
    Horizontal,
    /// Batteries on the bottom row, projectiles fly toward y = 0.
    Vertical,
}

/// Geometry of the playing field for one layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldLayout {
    pub width: i32,
    pub height: i32,
    pub axis: Axis,

    /// Fixed coordinate of the battery emplacements on the travel axis.
    pub battery_line: i32,

    /// Band the batteries fire from, along the axis perpendicular to travel.
    pub band_min: i32,
    pub band_max: i32,

    /// Initial band coordinate per battery.
    pub battery_home: [i32; 2],

    /// Recharge dock band coordinate and where a battery parks to reload.
    pub dock_band: i32,
    pub dock_stop: i32,

    /// Pickup pad (fixed) and the first drop pad cell.
    pub origin: Position,
    pub initial_dest: Position,

    /// Drop pad relocation range along the layout's relocation axis.
    pub dest_min: i32,
    pub dest_span: i32,
}

impl FieldLayout {
    pub fn horizontal() -> Self {
        let (width, height) = (60, 20);
        Self {
            width,
            height,
            axis: Axis::Horizontal,
            battery_line: width - 5,
            band_min: 3,
            band_max: height - 3,
            battery_home: [3, 7],
            dock_band: 3,
            dock_stop: 4,
            origin: Position::new(1, height / 2),
            initial_dest: Position::new(width - 20, height / 2),
            dest_min: 3,
            dest_span: height - 6,
        }
    }

    pub fn vertical() -> Self {
        let (width, height) = (60, 20);
        Self {
            width,
            height,
            axis: Axis::Vertical,
            battery_line: height - 2,
            band_min: 5,
            band_max: width - 5,
            battery_home: [15, 45],
            dock_band: 2,
            dock_stop: 6,
            origin: Position::new(1, height / 2),
            initial_dest: Position::new(width - 20, height / 2),
            dest_min: 10,
            dest_span: width - 20,
        }
    }

    pub fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::horizontal(),
            Axis::Vertical => Self::vertical(),
        }
    }

    /// Grid cell a battery occupies for a given band coordinate.
    pub fn battery_cell(&self, band_pos: i32) -> Position {
        match self.axis {
            Axis::Horizontal => Position::new(self.battery_line, band_pos),
            Axis::Vertical => Position::new(band_pos, self.battery_line),
        }
    }

    /// Cell a projectile spawns in when fired from a band coordinate.
    pub fn launch_cell(&self, band_pos: i32) -> Position {
        match self.axis {
            Axis::Horizontal => Position::new(self.battery_line, band_pos),
            Axis::Vertical => Position::new(band_pos, self.battery_line - 1),
        }
    }

    /// Cell of the recharge dock marker.
    pub fn dock_cell(&self) -> Position {
        match self.axis {
            Axis::Horizontal => Position::new(self.battery_line, self.dock_band),
            Axis::Vertical => Position::new(self.dock_band, self.battery_line),
        }
    }

    /// Random firing band for battery shots.
    pub fn band_range(&self) -> RangeInclusive<i32> {
        self.band_min..=self.band_max
    }

    /// Coordinates the drop pad may relocate to.
    pub fn dest_range(&self) -> RangeInclusive<i32> {
        self.dest_min..=self.dest_min + self.dest_span - 1
    }

    /// Drop pad cell for a drawn relocation coordinate. The coordinate moves
    /// along one axis only; the other is kept from the current pad.
    pub fn dest_cell(&self, coord: i32, current: Position) -> Position {
        match self.axis {
            Axis::Horizontal => Position::new(current.x, coord),
            Axis::Vertical => Position::new(coord, current.y),
        }
    }

    /// True when a cell lies outside the safe inner area. The margin differs
    /// per layout: the horizontal field keeps the header/footer rows lethal,
    /// the vertical field every border cell.
    pub fn lethal(&self, pos: Position) -> bool {
        match self.axis {
            Axis::Horizontal => pos.y <= 2 || pos.y >= self.height - 2,
            Axis::Vertical => {
                pos.x <= 0 || pos.x >= self.width - 1 || pos.y <= 0 || pos.y >= self.height - 1
            }
        }
    }

    /// Clamp a cell to the canvas bounds.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(
            pos.x.clamp(0, self.width - 1),
            pos.y.clamp(0, self.height - 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_the_layout_is_horizontal_then_battery_cells_sit_on_the_right_column() {
        let layout = FieldLayout::horizontal();
        assert_eq!(layout.battery_cell(7), Position::new(55, 7));
        assert_eq!(layout.launch_cell(7), Position::new(55, 7));
    }

    #[test]
    fn when_the_layout_is_vertical_then_projectiles_spawn_one_row_above_the_battery() {
        let layout = FieldLayout::vertical();
        assert_eq!(layout.battery_cell(20), Position::new(20, 18));
        assert_eq!(layout.launch_cell(20), Position::new(20, 17));
    }

    #[test]
    fn when_a_cell_breaches_the_horizontal_margins_then_it_is_lethal() {
        let layout = FieldLayout::horizontal();
        assert!(layout.lethal(Position::new(30, 2)));
        assert!(layout.lethal(Position::new(30, 18)));
        assert!(!layout.lethal(Position::new(30, 3)));
        assert!(!layout.lethal(Position::new(30, 17)));
        // The horizontal field does not punish the side columns.
        assert!(!layout.lethal(Position::new(0, 10)));
    }

    #[test]
    fn when_a_cell_touches_any_vertical_layout_border_then_it_is_lethal() {
        let layout = FieldLayout::vertical();
        assert!(layout.lethal(Position::new(0, 10)));
        assert!(layout.lethal(Position::new(59, 10)));
        assert!(layout.lethal(Position::new(30, 0)));
        assert!(layout.lethal(Position::new(30, 19)));
        assert!(!layout.lethal(Position::new(30, 10)));
    }

    #[test]
    fn when_the_drop_pad_relocates_then_only_the_layout_axis_coordinate_moves() {
        let horizontal = FieldLayout::horizontal();
        let moved = horizontal.dest_cell(12, Position::new(40, 10));
        assert_eq!(moved, Position::new(40, 12));

        let vertical = FieldLayout::vertical();
        let moved = vertical.dest_cell(12, Position::new(40, 10));
        assert_eq!(moved, Position::new(12, 10));
    }

    #[test]
    fn when_a_cell_is_clamped_then_it_stays_inside_the_canvas() {
        let layout = FieldLayout::horizontal();
        assert_eq!(layout.clamp(Position::new(-3, 25)), Position::new(0, 19));
        assert_eq!(layout.clamp(Position::new(70, -1)), Position::new(59, 0));
    }
}
