// Projectile actor: one task per shot, removing itself on any exit.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::Canvas;
use crate::domain::state::{Position, Projectile};
use crate::domain::systems::ballistics;
use crate::domain::Outcome;
use crate::use_cases::world::SharedWorld;

/// Fire a shot from `band_pos`: insert it into the shared collection and
/// spawn its flight task, tracked in the registry under the new id.
pub fn launch(world: &Arc<SharedWorld>, canvas: &Arc<dyn Canvas>, owner: u8, band_pos: i32) -> u64 {
    let id = world.allocate_projectile_id();
    let spawn = world.layout.launch_cell(band_pos);
    world.insert_projectile(Projectile {
        id,
        owner,
        pos: spawn,
    });

    let task_world = Arc::clone(world);
    let task_canvas = Arc::clone(canvas);
    world.track_flight(id, move || {
        tokio::spawn(async move {
            projectile_task(&task_world, task_canvas.as_ref(), id, spawn).await;
            task_world.forget_flight(id);
        })
    });
    id
}

async fn projectile_task(world: &SharedWorld, canvas: &dyn Canvas, id: u64, mut pos: Position) {
    while world.is_running() && ballistics::in_flight(&world.layout, pos) {
        if ballistics::impacts(pos, world.helicopter().pos) {
            if world.finish(Outcome::HitByProjectile) {
                canvas.announce(Outcome::HitByProjectile.message());
            }
            break;
        }

        pos = ballistics::advance(&world.layout, pos);
        world.relocate_projectile(id, pos);
        canvas.render(&world.frame());
        world.pause(world.pace.projectile_step).await;
    }

    // Out of bounds, impact, or game over: leave the shared collection.
    world.remove_projectile(id);
    debug!(projectile = id, "projectile retired");
}
