// Pure simulation rules, exercised by the actor tasks under the state lock.

pub mod ballistics;
pub mod mission;
