// Difficulty picker shown before a mission starts.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::domain::tuning::Difficulty;

/// Highlighted-list picker: up/down to move the cursor, enter to confirm.
pub fn choose_difficulty() -> io::Result<Difficulty> {
    let mut out = io::stdout();
    let mut selected = 1usize;

    loop {
        queue!(out, Clear(ClearType::All), MoveTo(10, 5), Print("Difficulty:"))?;
        for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
            let cursor = if index == selected { "-> " } else { "   " };
            queue!(
                out,
                MoveTo(12, 7 + index as u16),
                Print(format!("{cursor}{}", difficulty.label()))
            )?;
        }
        out.flush()?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Up => selected = selected.saturating_sub(1),
                KeyCode::Down => selected = (selected + 1).min(Difficulty::ALL.len() - 1),
                KeyCode::Enter => return Ok(Difficulty::ALL[selected]),
                _ => {}
            }
        }
    }
}
