use std::time::Duration;

/// Fixed actor cadences, independent of difficulty.
///
/// Keep this separate from runtime/bootstrap configuration (log sinks,
/// env parsing, etc.).
#[derive(Debug, Clone, Copy)]
pub struct Pace {
    /// Helicopter objective/hazard evaluation tick.
    pub helicopter_tick: Duration,

    /// Player input poll interval.
    pub input_poll: Duration,

    /// Per-cell projectile travel delay.
    pub projectile_step: Duration,

    /// Per-cell battery travel delay on reload trips.
    pub travel_step: Duration,

    /// Idle retry delay while the sibling battery holds the reload slot.
    pub slot_backoff: Duration,

    /// Slice used to poll the termination flag inside long sleeps, so every
    /// actor observes shutdown within one slice rather than one full period.
    pub stop_poll_slice: Duration,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            helicopter_tick: Duration::from_millis(100),
            input_poll: Duration::from_millis(50),
            projectile_step: Duration::from_millis(80),
            travel_step: Duration::from_millis(100),
            slot_backoff: Duration::from_millis(500),
            stop_poll_slice: Duration::from_millis(25),
        }
    }
}
