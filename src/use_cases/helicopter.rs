// Helicopter actor: objective and hazard evaluation loop.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::domain::ports::Canvas;
use crate::domain::systems::mission::CrewEvent;
use crate::domain::Outcome;
use crate::use_cases::world::SharedWorld;

pub async fn helicopter_task(world: Arc<SharedWorld>, canvas: Arc<dyn Canvas>) {
    while world.is_running() {
        if world.evacuated() >= world.mission_target {
            if world.finish(Outcome::MissionAccomplished) {
                canvas.announce(Outcome::MissionAccomplished.message());
            }
            break;
        }

        // Draw the candidate relocation before taking the state lock; it is
        // only applied if this tick lands a delivery.
        let coord = rand::thread_rng().gen_range(world.layout.dest_range());
        let relocated = world.layout.dest_cell(coord, world.pads().dest);
        if let Some(event) = world.advance_objectives(relocated) {
            match event {
                CrewEvent::PickedUp => debug!("evacuee aboard"),
                CrewEvent::Delivered => {
                    info!(evacuated = world.evacuated(), "evacuee delivered")
                }
            }
        }

        // Objectives strictly before the hazard check: a same-tick delivery
        // is credited even when the tick is fatal.
        if world.in_hazard() {
            if world.finish(Outcome::Destroyed) {
                canvas.announce(Outcome::Destroyed.message());
            }
            break;
        }

        canvas.render(&world.frame());
        world.pause(world.pace.helicopter_tick).await;
    }
}
