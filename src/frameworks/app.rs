// Framework bootstrap for the terminal game runtime.

use std::io;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::domain::ports::{Canvas, Controls};
use crate::domain::tuning::{DifficultySettings, FieldLayout, Pace};
use crate::frameworks::config;
use crate::interface_adapters::{
    choose_difficulty, TerminalControls, TerminalScreen, TerminalSession,
};
use crate::use_cases::{run_mission, SharedWorld};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    // The canvas owns stdout, so diagnostics go to a file or nowhere.
    if let Some(path) = config::log_file() {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        match std::fs::File::create(&path) {
            Ok(file) => {
                let writer = Arc::new(file);
                let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
                if json {
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_target(false)
                        .with_writer(writer)
                        .with_ansi(false)
                        .json()
                        .with_current_span(true)
                        .init();
                } else {
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_target(false)
                        .with_writer(writer)
                        .with_ansi(false)
                        .compact()
                        .init();
                }
            }
            Err(e) => eprintln!("failed to open log file {path}: {e}"),
        }
    }

    std::panic::set_hook(Box::new(|info| {
        // Hand the panic message a usable terminal before logging it.
        let _ = crossterm::execute!(
            io::stdout(),
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        let _ = crossterm::terminal::disable_raw_mode();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Process entry: difficulty menu, then one mission on its own runtime.
pub fn run() -> io::Result<()> {
    init_runtime();

    let difficulty = {
        let _menu = TerminalSession::begin()?;
        choose_difficulty()?
    };
    let settings = DifficultySettings::preset(difficulty);
    let layout = FieldLayout::from_axis(config::layout_axis());
    let mission_target = config::mission_target();
    tracing::info!(?difficulty, "difficulty selected");

    let world = SharedWorld::new(layout, settings, Pace::default(), mission_target);
    let canvas: Arc<dyn Canvas> = Arc::new(TerminalScreen::new(layout));
    let controls: Arc<dyn Controls> = Arc::new(TerminalControls);

    let runtime = tokio::runtime::Runtime::new()?;
    let _session = TerminalSession::begin()?;
    runtime.block_on(async {
        run_mission(world, canvas, controls).await;
        // Leave the terminal message up briefly before teardown.
        tokio::time::sleep(config::OUTCOME_HOLD).await;
    });

    Ok(())
}
