// Crossterm implementation of the non-blocking key-read primitive.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::domain::ports::{Controls, Key};

pub struct TerminalControls;

impl Controls for TerminalControls {
    fn read_key(&self) -> Option<Key> {
        // Zero-timeout poll: absence of input is a no-op, and so is a failed
        // read at this layer.
        if !event::poll(Duration::ZERO).unwrap_or(false) {
            return None;
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up => Some(Key::Up),
                KeyCode::Down => Some(Key::Down),
                KeyCode::Left => Some(Key::Left),
                KeyCode::Right => Some(Key::Right),
                KeyCode::Char('q') => Some(Key::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}
