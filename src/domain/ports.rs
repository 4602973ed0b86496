use crate::domain::state::Frame;

// Port for the text-grid render surface.
//
// Actors call this opportunistically after their own state changes, so
// implementations must tolerate concurrent callers.
pub trait Canvas: Send + Sync {
    /// Draw a full-canvas frame snapshot.
    fn render(&self, frame: &Frame);

    /// Replace the canvas with a centered terminal message.
    fn announce(&self, message: &str);
}

// Port for the non-blocking key-read primitive.
pub trait Controls: Send + Sync {
    /// Next pending key press, if any. Absence of input is a no-op.
    fn read_key(&self) -> Option<Key>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
}
