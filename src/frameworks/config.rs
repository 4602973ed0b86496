use std::{env, time::Duration};

use crate::domain::tuning::Axis;

// Runtime/bootstrap knobs (gameplay tuning lives in domain::tuning).

pub fn log_file() -> Option<String> {
    env::var("LOG_FILE").ok()
}

/// Evacuees required for mission success. Zero is a configuration bug and
/// fails fast at startup.
pub fn mission_target() -> u32 {
    let target = env::var("SKYLIFT_MISSION_TARGET")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(10);
    assert!(target > 0, "SKYLIFT_MISSION_TARGET must be positive");
    target
}

pub fn layout_axis() -> Axis {
    match env::var("SKYLIFT_LAYOUT").as_deref() {
        Ok("vertical") => Axis::Vertical,
        _ => Axis::Horizontal,
    }
}

/// How long the terminal outcome message stays up before teardown.
pub const OUTCOME_HOLD: Duration = Duration::from_secs(2);
