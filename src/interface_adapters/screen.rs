// Crossterm canvas: cursor-addressed drawing of frame snapshots.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use tracing::debug;

use crate::domain::ports::Canvas;
use crate::domain::state::Frame;
use crate::domain::tuning::{Axis, FieldLayout};

/// RAII guard for the raw-mode alternate-screen session.
pub struct TerminalSession;

impl TerminalSession {
    pub fn begin() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Terminal implementation of the render port. Independent actor tasks draw
/// concurrently and serialize on the internal handle; draw failures are
/// logged and dropped, a skipped frame is invisible at these tick rates.
pub struct TerminalScreen {
    out: Mutex<Stdout>,
    layout: FieldLayout,
}

impl TerminalScreen {
    pub fn new(layout: FieldLayout) -> Self {
        Self {
            out: Mutex::new(io::stdout()),
            layout,
        }
    }
}

impl Canvas for TerminalScreen {
    fn render(&self, frame: &Frame) {
        // The terminal message owns the canvas once the game is over.
        if frame.outcome.is_some() {
            return;
        }
        let mut out = self.out.lock().expect("screen handle poisoned");
        if let Err(e) = draw_frame(&mut *out, &self.layout, frame) {
            debug!(error = %e, "frame draw failed");
        }
    }

    fn announce(&self, message: &str) {
        let mut out = self.out.lock().expect("screen handle poisoned");
        if let Err(e) = draw_announcement(&mut *out, &self.layout, message) {
            debug!(error = %e, "announcement draw failed");
        }
    }
}

fn draw_frame(out: &mut impl Write, layout: &FieldLayout, frame: &Frame) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let header = format!(
        "== Press 'q' to quit == Evacuated: {}/{} ==",
        frame.evacuated, frame.target
    );
    put(out, layout.width, 1, 1, &header)?;

    let separator = "=".repeat((layout.width - 2) as usize);
    put(out, layout.width, 1, 2, &separator)?;
    if layout.axis == Axis::Horizontal {
        put(out, layout.width, 1, layout.height - 2, &separator)?;
    }

    put(out, layout.width, frame.pads.origin.x, frame.pads.origin.y, "_")?;
    put(out, layout.width, frame.pads.dest.x, frame.pads.dest.y, "_")?;
    put(out, layout.width, frame.dock.x, frame.dock.y, "[R]")?;

    for battery in &frame.batteries {
        let marker = format!(
            "B{}({}){}",
            battery.id,
            battery.ammo,
            if battery.reloading { "R" } else { "" }
        );
        put(out, layout.width, battery.pos.x, battery.pos.y, &marker)?;
    }

    let helicopter = if frame.helicopter.carrying {
        "H[S]"
    } else {
        "H[-]"
    };
    put(
        out,
        layout.width,
        frame.helicopter.pos.x,
        frame.helicopter.pos.y,
        helicopter,
    )?;

    for shot in &frame.projectiles {
        if shot.x >= 0 && shot.x < layout.width && shot.y >= 0 && shot.y < layout.height {
            put(out, layout.width, shot.x, shot.y, "*")?;
        }
    }

    // Border last, so markers near the edge never punch through it.
    draw_border(out, layout.width, layout.height)?;
    out.flush()
}

fn draw_announcement(out: &mut impl Write, layout: &FieldLayout, message: &str) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    let x = (layout.width / 2 - message.chars().count() as i32 / 2).max(1);
    put(out, layout.width, x, layout.height / 2, message)?;
    draw_border(out, layout.width, layout.height)?;
    out.flush()
}

fn draw_border(out: &mut impl Write, width: i32, height: i32) -> io::Result<()> {
    let edge = format!("+{}+", "-".repeat((width - 2) as usize));
    queue!(out, MoveTo(0, 0), Print(&edge))?;
    queue!(out, MoveTo(0, (height - 1) as u16), Print(&edge))?;
    for y in 1..height - 1 {
        queue!(out, MoveTo(0, y as u16), Print("|"))?;
        queue!(out, MoveTo((width - 1) as u16, y as u16), Print("|"))?;
    }
    Ok(())
}

/// Print clipped to the canvas so long markers never spill past the frame.
fn put(out: &mut impl Write, width: i32, x: i32, y: i32, text: &str) -> io::Result<()> {
    if x < 0 || y < 0 || x >= width {
        return Ok(());
    }
    let room = (width - x) as usize;
    let clipped: String = text.chars().take(room).collect();
    queue!(out, MoveTo(x as u16, y as u16), Print(clipped))
}
