use crate::domain::state::{Position, WorldState};
use crate::domain::tuning::FieldLayout;

/// Objective transition produced by one helicopter tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewEvent {
    PickedUp,
    Delivered,
}

/// Pickup/delivery evaluation for the helicopter's current cell.
///
/// `relocated_dest` is drawn by the caller before taking the state lock; it is
/// only applied when a delivery actually lands, which keeps this function
/// deterministic for a given world.
pub fn advance_objectives(world: &mut WorldState, relocated_dest: Position) -> Option<CrewEvent> {
    let pos = world.helicopter.pos;

    if pos == world.pads.origin && !world.helicopter.carrying {
        world.helicopter.carrying = true;
        return Some(CrewEvent::PickedUp);
    }

    if pos == world.pads.dest && world.helicopter.carrying {
        world.helicopter.carrying = false;
        world.evacuated += 1;
        world.pads.dest = relocated_dest;
        return Some(CrewEvent::Delivered);
    }

    None
}

/// True when the helicopter sits on a battery cell or outside the safe area.
///
/// Pure in (helicopter position, battery positions, layout); callers evaluate
/// it strictly after `advance_objectives` so a same-tick delivery is credited
/// even when that tick is fatal.
pub fn in_hazard(world: &WorldState, layout: &FieldLayout) -> bool {
    let pos = world.helicopter.pos;
    world
        .batteries
        .iter()
        .any(|battery| pos == layout.battery_cell(battery.band_pos))
        || layout.lethal(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::{Battery, BatteryPhase, Helicopter, Pads};

    fn world_at(pos: Position, carrying: bool) -> WorldState {
        let layout = FieldLayout::horizontal();
        WorldState {
            helicopter: Helicopter { pos, carrying },
            pads: Pads {
                origin: layout.origin,
                dest: layout.initial_dest,
            },
            batteries: [
                Battery {
                    id: 0,
                    band_pos: 3,
                    ammo: 2,
                    phase: BatteryPhase::Firing,
                },
                Battery {
                    id: 1,
                    band_pos: 7,
                    ammo: 2,
                    phase: BatteryPhase::Firing,
                },
            ],
            evacuated: 0,
            outcome: None,
        }
    }

    #[test]
    fn when_the_empty_helicopter_lands_on_the_origin_pad_then_it_picks_up() {
        let mut world = world_at(Position::new(1, 10), false);

        let event = advance_objectives(&mut world, Position::new(40, 12));

        assert_eq!(event, Some(CrewEvent::PickedUp));
        assert!(world.helicopter.carrying);
        assert_eq!(world.evacuated, 0);
    }

    #[test]
    fn when_the_helicopter_already_carries_then_the_origin_pad_is_inert() {
        let mut world = world_at(Position::new(1, 10), true);

        let event = advance_objectives(&mut world, Position::new(40, 12));

        assert_eq!(event, None);
        assert!(world.helicopter.carrying);
    }

    #[test]
    fn when_a_delivery_lands_then_the_count_increments_and_the_pad_relocates() {
        let mut world = world_at(Position::new(40, 10), true);
        let relocated = Position::new(40, 5);

        let event = advance_objectives(&mut world, relocated);

        assert_eq!(event, Some(CrewEvent::Delivered));
        assert!(!world.helicopter.carrying);
        assert_eq!(world.evacuated, 1);
        assert_eq!(world.pads.dest, relocated);
    }

    #[test]
    fn when_the_empty_helicopter_crosses_the_drop_pad_then_nothing_is_delivered() {
        let mut world = world_at(Position::new(40, 10), false);

        let event = advance_objectives(&mut world, Position::new(40, 5));

        assert_eq!(event, None);
        assert_eq!(world.evacuated, 0);
        assert_eq!(world.pads.dest, Position::new(40, 10));
    }

    #[test]
    fn when_the_helicopter_shares_a_battery_cell_then_it_is_in_hazard() {
        let layout = FieldLayout::horizontal();
        let world = world_at(layout.battery_cell(7), false);

        assert!(in_hazard(&world, &layout));
    }

    #[test]
    fn when_the_helicopter_breaches_the_inner_bounds_then_it_is_in_hazard() {
        let layout = FieldLayout::horizontal();

        assert!(in_hazard(&world_at(Position::new(30, 2), false), &layout));
        assert!(in_hazard(&world_at(Position::new(30, 18), false), &layout));
    }

    #[test]
    fn when_the_helicopter_flies_inside_the_safe_area_then_hazard_stays_false() {
        let layout = FieldLayout::horizontal();
        let world = world_at(Position::new(30, 10), false);

        // Same inputs, same verdict: the check is pure.
        assert!(!in_hazard(&world, &layout));
        assert!(!in_hazard(&world, &layout));
    }

    #[test]
    fn when_the_drop_pad_sits_on_a_lethal_cell_then_the_delivery_is_still_credited_first() {
        // Preserved tie-break: objectives are evaluated before the hazard
        // check, so a delivery on a fatal cell counts before the destruction.
        let layout = FieldLayout::horizontal();
        let mut world = world_at(Position::new(40, 2), true);
        world.pads.dest = Position::new(40, 2);

        let event = advance_objectives(&mut world, Position::new(40, 9));

        assert_eq!(event, Some(CrewEvent::Delivered));
        assert_eq!(world.evacuated, 1);
        assert!(in_hazard(&world, &layout));
    }
}
