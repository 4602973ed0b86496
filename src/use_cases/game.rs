// Mission orchestration: spawn the actor set and join it before teardown.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::ports::{Canvas, Controls};
use crate::domain::Outcome;
use crate::use_cases::battery::battery_task;
use crate::use_cases::helicopter::helicopter_task;
use crate::use_cases::pilot::pilot_task;
use crate::use_cases::world::SharedWorld;

/// Run one mission to its terminal outcome.
///
/// The long-lived actors are awaited first; by then the termination flag is
/// set, so every outstanding projectile task exits within one step delay and
/// the flight registry drains before this returns.
pub async fn run_mission(
    world: Arc<SharedWorld>,
    canvas: Arc<dyn Canvas>,
    controls: Arc<dyn Controls>,
) -> Outcome {
    info!(mission_target = world.mission_target, "mission started");
    canvas.render(&world.frame());

    let actors = vec![
        tokio::spawn(helicopter_task(world.clone(), canvas.clone())),
        tokio::spawn(battery_task(world.clone(), canvas.clone(), 0)),
        tokio::spawn(battery_task(world.clone(), canvas.clone(), 1)),
        tokio::spawn(pilot_task(world.clone(), canvas.clone(), controls)),
    ];
    for actor in actors {
        if let Err(e) = actor.await {
            error!(error = ?e, "actor task failed");
        }
    }

    world.join_flights().await;

    let outcome = world.outcome().unwrap_or(Outcome::UserQuit);
    info!(?outcome, evacuated = world.evacuated(), "mission ended");
    outcome
}
