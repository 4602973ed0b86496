// Input poller: applies pending key presses under the state lock.

use std::sync::Arc;

use crate::domain::ports::{Canvas, Controls, Key};
use crate::domain::Outcome;
use crate::use_cases::world::SharedWorld;

pub async fn pilot_task(
    world: Arc<SharedWorld>,
    canvas: Arc<dyn Canvas>,
    controls: Arc<dyn Controls>,
) {
    while world.is_running() {
        // One key per poll tick, so the vehicle moves at most one cell.
        if let Some(key) = controls.read_key() {
            match key {
                Key::Up => world.nudge_helicopter(0, -1),
                Key::Down => world.nudge_helicopter(0, 1),
                Key::Left => world.nudge_helicopter(-1, 0),
                Key::Right => world.nudge_helicopter(1, 0),
                Key::Quit => {
                    if world.finish(Outcome::UserQuit) {
                        canvas.announce(Outcome::UserQuit.message());
                    }
                    return;
                }
            }
            canvas.render(&world.frame());
        }
        world.pause(world.pace.input_poll).await;
    }
}
