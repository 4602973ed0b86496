// Terminal events carried by the termination transition.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HitByProjectile,
    Destroyed,
    MissionAccomplished,
    UserQuit,
}

impl Outcome {
    /// Message published exactly once when the game ends.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::HitByProjectile => "Game over. Helicopter hit by projectile.",
            Outcome::Destroyed => "Game over. Helicopter was destroyed.",
            Outcome::MissionAccomplished => "Mission accomplished!",
            Outcome::UserQuit => "Mission aborted.",
        }
    }
}
