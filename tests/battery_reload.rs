mod support;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, timeout};

use skylift::domain::ports::Canvas;
use skylift::domain::tuning::{DifficultySettings, FieldLayout, Pace};
use skylift::domain::Outcome;
use skylift::use_cases::battery::battery_task;
use skylift::use_cases::SharedWorld;

use support::RecordingCanvas;

fn quick_pace() -> Pace {
    Pace {
        helicopter_tick: Duration::from_millis(10),
        input_poll: Duration::from_millis(5),
        projectile_step: Duration::from_millis(10),
        travel_step: Duration::from_millis(5),
        slot_backoff: Duration::from_millis(10),
        stop_poll_slice: Duration::from_millis(5),
    }
}

fn tight_settings() -> DifficultySettings {
    DifficultySettings {
        ammo_capacity: 1,
        period_between_rounds: Duration::from_millis(30),
        reload_time: Duration::from_millis(20),
    }
}

/// The vertical layout keeps the parked helicopter (x = 1) outside every
/// firing column, so no stray shot ends these tests early.
fn battery_world(settings: DifficultySettings) -> Arc<SharedWorld> {
    SharedWorld::new(FieldLayout::vertical(), settings, quick_pace(), 10)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn when_both_batteries_run_dry_together_then_the_slot_admits_one_at_a_time() {
    let world = battery_world(tight_settings());
    let canvas: Arc<dyn Canvas> = Arc::new(RecordingCanvas::new());
    let batteries =
        [0u8, 1].map(|id| tokio::spawn(battery_task(world.clone(), canvas.clone(), id)));

    // Sample consistent state snapshots while both batteries churn through
    // fire/reload cycles.
    let mut reloaded: HashSet<u8> = HashSet::new();
    for _ in 0..600 {
        let frame = world.frame();
        assert!(
            !(frame.batteries[0].reloading && frame.batteries[1].reloading),
            "both batteries held the reload slot at once"
        );
        for battery in &frame.batteries {
            assert!(battery.ammo <= tight_settings().ammo_capacity);
            if battery.reloading {
                reloaded.insert(battery.id);
            }
        }
        if reloaded.len() == 2 {
            break;
        }
        sleep(Duration::from_millis(5)).await;
    }
    // Neither battery may starve: both must get the slot within the window.
    assert_eq!(reloaded, HashSet::from([0, 1]));

    world.finish(Outcome::UserQuit);
    for battery in batteries {
        battery.await.expect("battery task should exit cleanly");
    }
    world.join_flights().await;
    assert_eq!(world.reload_slot_holder(), None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn when_the_game_ends_then_every_projectile_is_removed() {
    let settings = DifficultySettings {
        ammo_capacity: 3,
        period_between_rounds: Duration::from_millis(20),
        reload_time: Duration::from_millis(20),
    };
    let world = battery_world(settings);
    let canvas: Arc<dyn Canvas> = Arc::new(RecordingCanvas::new());
    let batteries =
        [0u8, 1].map(|id| tokio::spawn(battery_task(world.clone(), canvas.clone(), id)));

    // Let several volleys enter and cross the field.
    sleep(Duration::from_millis(500)).await;

    world.finish(Outcome::UserQuit);
    for battery in batteries {
        battery.await.expect("battery task should exit cleanly");
    }
    world.join_flights().await;

    assert!(world.live_projectiles().is_empty());
    assert_eq!(world.flight_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn when_the_game_stops_mid_period_then_batteries_exit_within_a_slice() {
    // A five second round period with a shutdown observed in milliseconds:
    // the sliced pause is what bounds the exit latency.
    let settings = DifficultySettings {
        ammo_capacity: 2,
        period_between_rounds: Duration::from_secs(5),
        reload_time: Duration::from_millis(100),
    };
    let world = battery_world(settings);
    let canvas: Arc<dyn Canvas> = Arc::new(RecordingCanvas::new());
    let batteries =
        [0u8, 1].map(|id| tokio::spawn(battery_task(world.clone(), canvas.clone(), id)));

    // Both batteries are now asleep inside their round period.
    sleep(Duration::from_millis(100)).await;
    world.finish(Outcome::UserQuit);

    for battery in batteries {
        timeout(Duration::from_millis(500), battery)
            .await
            .expect("battery should observe shutdown within one poll slice")
            .expect("battery task should exit cleanly");
    }
    world.join_flights().await;
    assert_eq!(world.flight_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn when_the_game_ends_mid_reload_then_the_slot_is_released_before_exit() {
    let world = battery_world(tight_settings());
    let canvas: Arc<dyn Canvas> = Arc::new(RecordingCanvas::new());
    let batteries =
        [0u8, 1].map(|id| tokio::spawn(battery_task(world.clone(), canvas.clone(), id)));

    // Wait until one battery is inside its reload sequence, then stop the
    // game out from under it.
    timeout(Duration::from_secs(5), async {
        loop {
            if world.reload_slot_holder().is_some() {
                return;
            }
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("expected a battery to claim the reload slot");
    world.finish(Outcome::UserQuit);

    for battery in batteries {
        battery.await.expect("battery task should exit cleanly");
    }
    assert_eq!(world.reload_slot_holder(), None);
    world.join_flights().await;
}
