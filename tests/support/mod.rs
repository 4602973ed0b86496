// Shared fakes implementing the terminal ports for integration tests.
#![allow(dead_code)] // not every test binary exercises every fake

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use skylift::domain::ports::{Canvas, Controls, Key};
use skylift::domain::state::Frame;

/// Canvas fake that counts frames and records announced messages.
#[derive(Default)]
pub struct RecordingCanvas {
    frames: AtomicUsize,
    announcements: Mutex<Vec<String>>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn announcements(&self) -> Vec<String> {
        self.announcements
            .lock()
            .expect("announcements mutex poisoned")
            .clone()
    }
}

impl Canvas for RecordingCanvas {
    fn render(&self, _frame: &Frame) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    fn announce(&self, message: &str) {
        self.announcements
            .lock()
            .expect("announcements mutex poisoned")
            .push(message.to_string());
    }
}

/// Controls fake that replays a scripted key sequence, then stays silent.
pub struct ScriptedControls {
    keys: Mutex<VecDeque<Key>>,
}

impl ScriptedControls {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: Mutex::new(keys.into_iter().collect()),
        }
    }

    pub fn silent() -> Self {
        Self::new([])
    }
}

impl Controls for ScriptedControls {
    fn read_key(&self) -> Option<Key> {
        self.keys.lock().expect("script mutex poisoned").pop_front()
    }
}
