// Shared world handle: the three synchronization domains and their accessors.
//
// Lock discipline: every method below takes the minimal lock for a short,
// branch-light critical section and never sleeps or awaits while holding it.
// When a caller needs both domains (the frame snapshot), the state lock is
// taken and released before the projectile lock; the two are never nested.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::error;

use crate::domain::state::{
    Battery, BatteryPhase, BatterySnapshot, Frame, Helicopter, Pads, Position, Projectile,
    WorldState,
};
use crate::domain::systems::mission::{self, CrewEvent};
use crate::domain::tuning::{DifficultySettings, FieldLayout, Pace};
use crate::domain::Outcome;

pub struct SharedWorld {
    /// State lock: helicopter, pads, batteries, counters and the outcome.
    state: Mutex<WorldState>,

    /// Projectile lock: membership of the live projectile collection.
    projectiles: Mutex<Vec<Projectile>>,

    /// Reload slot: id of the battery currently holding the token. Claim and
    /// release are separate short critical sections, so no guard ever spans
    /// the multi-second reload sequence.
    reload_slot: Mutex<Option<u8>>,

    /// Live projectile tasks keyed by projectile id, removed on completion.
    flights: Mutex<HashMap<u64, JoinHandle<()>>>,

    /// Monotonic projectile id source.
    next_projectile_id: AtomicU64,

    pub layout: FieldLayout,
    pub settings: DifficultySettings,
    pub pace: Pace,
    pub mission_target: u32,
}

impl SharedWorld {
    pub fn new(
        layout: FieldLayout,
        settings: DifficultySettings,
        pace: Pace,
        mission_target: u32,
    ) -> Arc<Self> {
        let batteries = [0u8, 1].map(|id| Battery {
            id,
            band_pos: layout.battery_home[id as usize],
            ammo: settings.ammo_capacity,
            phase: BatteryPhase::Firing,
        });

        Arc::new(Self {
            state: Mutex::new(WorldState {
                helicopter: Helicopter {
                    pos: layout.origin,
                    carrying: false,
                },
                pads: Pads {
                    origin: layout.origin,
                    dest: layout.initial_dest,
                },
                batteries,
                evacuated: 0,
                outcome: None,
            }),
            projectiles: Mutex::new(Vec::new()),
            reload_slot: Mutex::new(None),
            flights: Mutex::new(HashMap::new()),
            next_projectile_id: AtomicU64::new(1),
            layout,
            settings,
            pace,
            mission_target,
        })
    }

    fn state(&self) -> MutexGuard<'_, WorldState> {
        self.state.lock().expect("state lock poisoned")
    }

    // --- Termination ---

    pub fn is_running(&self) -> bool {
        self.state().outcome.is_none()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state().outcome
    }

    /// Write-once termination transition. The first caller wins and is the
    /// one that publishes the terminal message; later calls are ignored.
    pub fn finish(&self, outcome: Outcome) -> bool {
        let mut state = self.state();
        if state.outcome.is_none() {
            state.outcome = Some(outcome);
            true
        } else {
            false
        }
    }

    // --- Helicopter ---

    pub fn helicopter(&self) -> Helicopter {
        self.state().helicopter
    }

    pub fn pads(&self) -> Pads {
        self.state().pads
    }

    pub fn evacuated(&self) -> u32 {
        self.state().evacuated
    }

    /// Displace the helicopter, clamped to the canvas bounds.
    pub fn nudge_helicopter(&self, dx: i32, dy: i32) {
        let mut state = self.state();
        let pos = state.helicopter.pos;
        state.helicopter.pos = self.layout.clamp(Position::new(pos.x + dx, pos.y + dy));
    }

    /// Pickup/delivery transition for the current tick, under the state lock.
    pub fn advance_objectives(&self, relocated_dest: Position) -> Option<CrewEvent> {
        mission::advance_objectives(&mut self.state(), relocated_dest)
    }

    /// Battery-coincidence and inner-bounds check, under the state lock.
    pub fn in_hazard(&self) -> bool {
        mission::in_hazard(&self.state(), &self.layout)
    }

    // --- Batteries ---

    pub fn battery(&self, id: u8) -> Battery {
        self.state().batteries[id as usize]
    }

    /// Move the battery to its firing position and spend one unit of ammo.
    /// Callers must not fire with an empty magazine.
    pub fn record_shot(&self, id: u8, band_pos: i32) {
        let mut state = self.state();
        let battery = &mut state.batteries[id as usize];
        battery.band_pos = band_pos;
        battery.ammo -= 1;
    }

    pub fn set_battery_phase(&self, id: u8, phase: BatteryPhase) {
        self.state().batteries[id as usize].phase = phase;
    }

    pub fn set_battery_band(&self, id: u8, band_pos: i32) {
        self.state().batteries[id as usize].band_pos = band_pos;
    }

    /// Recover one unit of ammo, capped at capacity; returns the new count.
    pub fn restock_one(&self, id: u8) -> u32 {
        let mut state = self.state();
        let battery = &mut state.batteries[id as usize];
        battery.ammo = (battery.ammo + 1).min(self.settings.ammo_capacity);
        battery.ammo
    }

    // --- Reload slot ---

    pub fn try_claim_reload_slot(&self, id: u8) -> bool {
        let mut slot = self.reload_slot.lock().expect("reload slot poisoned");
        if slot.is_some() {
            false
        } else {
            *slot = Some(id);
            true
        }
    }

    /// Release is keyed by holder so a stray release cannot free a slot the
    /// sibling battery holds.
    pub fn release_reload_slot(&self, id: u8) {
        let mut slot = self.reload_slot.lock().expect("reload slot poisoned");
        if *slot == Some(id) {
            *slot = None;
        }
    }

    pub fn reload_slot_holder(&self) -> Option<u8> {
        *self.reload_slot.lock().expect("reload slot poisoned")
    }

    // --- Projectile collection ---

    pub fn allocate_projectile_id(&self) -> u64 {
        self.next_projectile_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn insert_projectile(&self, projectile: Projectile) {
        self.projectiles
            .lock()
            .expect("projectile lock poisoned")
            .push(projectile);
    }

    pub fn relocate_projectile(&self, id: u64, pos: Position) {
        let mut shots = self.projectiles.lock().expect("projectile lock poisoned");
        if let Some(shot) = shots.iter_mut().find(|shot| shot.id == id) {
            shot.pos = pos;
        }
    }

    /// Remove exactly the caller's entry; the monotonic id makes this an
    /// identity match even while two shots share a cell.
    pub fn remove_projectile(&self, id: u64) {
        self.projectiles
            .lock()
            .expect("projectile lock poisoned")
            .retain(|shot| shot.id != id);
    }

    pub fn live_projectiles(&self) -> Vec<Projectile> {
        self.projectiles
            .lock()
            .expect("projectile lock poisoned")
            .clone()
    }

    // --- Flight registry ---

    /// Track a projectile task. The registry lock is held across the spawn so
    /// the task's own removal cannot run before its handle is inserted.
    pub fn track_flight(&self, id: u64, spawn: impl FnOnce() -> JoinHandle<()>) {
        let mut flights = self.flights.lock().expect("flight registry poisoned");
        let handle = spawn();
        flights.insert(id, handle);
    }

    /// Drop a finished task's registry entry.
    pub fn forget_flight(&self, id: u64) {
        self.flights
            .lock()
            .expect("flight registry poisoned")
            .remove(&id);
    }

    pub fn flight_count(&self) -> usize {
        self.flights.lock().expect("flight registry poisoned").len()
    }

    /// Await every outstanding projectile task. Entries are taken out one at
    /// a time so the registry lock is never held across an await.
    pub async fn join_flights(&self) {
        loop {
            let next = {
                let mut flights = self.flights.lock().expect("flight registry poisoned");
                let id = flights.keys().next().copied();
                id.and_then(|id| flights.remove(&id))
            };
            match next {
                Some(handle) => {
                    if let Err(e) = handle.await {
                        error!(error = ?e, "projectile task failed");
                    }
                }
                None => break,
            }
        }
    }

    // --- Rendering & timing ---

    /// Full-canvas snapshot for the render port: state lock first, released,
    /// then the projectile lock.
    pub fn frame(&self) -> Frame {
        let (helicopter, pads, batteries, evacuated, outcome) = {
            let state = self.state();
            let batteries = state.batteries.map(|battery| BatterySnapshot {
                id: battery.id,
                pos: self.layout.battery_cell(battery.band_pos),
                ammo: battery.ammo,
                reloading: battery.phase == BatteryPhase::Reloading,
            });
            (
                state.helicopter,
                state.pads,
                batteries,
                state.evacuated,
                state.outcome,
            )
        };

        let projectiles = self
            .projectiles
            .lock()
            .expect("projectile lock poisoned")
            .iter()
            .map(|shot| shot.pos)
            .collect();

        Frame {
            width: self.layout.width,
            height: self.layout.height,
            evacuated,
            target: self.mission_target,
            helicopter,
            pads,
            batteries,
            dock: self.layout.dock_cell(),
            projectiles,
            outcome,
        }
    }

    /// Sleep `total` in short slices, returning early once the game stops.
    /// This bounds every actor's shutdown latency to one slice instead of one
    /// full period.
    pub async fn pause(&self, total: Duration) {
        let mut remaining = total;
        while self.is_running() && !remaining.is_zero() {
            let slice = remaining.min(self.pace.stop_poll_slice);
            tokio::time::sleep(slice).await;
            remaining -= slice;
        }
    }
}
