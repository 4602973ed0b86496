// Battery actor: fire/reload state machine on its own cadence.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::domain::ports::Canvas;
use crate::domain::state::BatteryPhase;
use crate::use_cases::projectile;
use crate::use_cases::world::SharedWorld;

pub async fn battery_task(world: Arc<SharedWorld>, canvas: Arc<dyn Canvas>, id: u8) {
    while world.is_running() {
        let ammo = world.battery(id).ammo;
        if ammo > 0 {
            let band_pos = rand::thread_rng().gen_range(world.layout.band_range());
            world.record_shot(id, band_pos);
            projectile::launch(&world, &canvas, id, band_pos);
            debug!(battery = id, band_pos, ammo = ammo - 1, "battery fired");
        } else if world.try_claim_reload_slot(id) {
            world.set_battery_phase(id, BatteryPhase::Reloading);
            info!(battery = id, "battery reloading");
            reload_cycle(&world, canvas.as_ref(), id).await;
            world.set_battery_phase(id, BatteryPhase::Firing);
            // Released even when the game ends mid-reload; the slot must
            // never outlive its holder's task.
            world.release_reload_slot(id);
        } else {
            // Sibling holds the slot: idle and re-check instead of blocking.
            world.set_battery_phase(id, BatteryPhase::WaitingForSlot);
            world.pause(world.pace.slot_backoff).await;
        }

        canvas.render(&world.frame());
        world.pause(world.settings.period_between_rounds).await;
    }
}

/// Travel to the dock, recover ammo one unit per reload interval, travel
/// back to the combat band. Every leg polls the termination flag.
async fn reload_cycle(world: &SharedWorld, canvas: &dyn Canvas, id: u8) {
    let capacity = world.settings.ammo_capacity;
    let layout = world.layout;

    let mut band_pos = world.battery(id).band_pos;
    while world.is_running() && band_pos != layout.dock_stop {
        band_pos += (layout.dock_stop - band_pos).signum();
        world.set_battery_band(id, band_pos);
        canvas.render(&world.frame());
        world.pause(world.pace.travel_step).await;
    }

    while world.is_running() && world.battery(id).ammo < capacity {
        world.pause(world.settings.reload_time).await;
        if !world.is_running() {
            break;
        }
        let ammo = world.restock_one(id);
        canvas.render(&world.frame());
        debug!(battery = id, ammo, "ammo restocked");
    }

    let home = layout.battery_home[id as usize];
    while world.is_running() && band_pos != home {
        band_pos += (home - band_pos).signum();
        world.set_battery_band(id, band_pos);
        canvas.render(&world.frame());
        world.pause(world.pace.travel_step).await;
    }
}
