//! BLOCKFALL - a classic falling-block game for the terminal
//!
//! The binary is a thin host around the engine: it owns the terminal, the
//! tick timer, and the key map, and talks to the engine only through
//! `tick`, `command`, and the query surface.

mod board;
mod game;
mod piece;
mod rng;
mod score;
mod tetromino;
mod ui;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use game::{GameEngine, Move, Signal};
use ratatui::{Terminal, backend::CrosstermBackend};
use rng::RandomSource;
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Input poll granularity; ticks are timed separately at the fall interval
const FRAME_DURATION: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();

    // Log to a per-session file so tracing never writes over the UI
    let log_dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blockfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "blockfall starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    tracing::info!("blockfall shut down");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut engine = GameEngine::new(Box::new(RandomSource::new()));
    let mut tick_interval = engine.fall_interval();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::render(frame, &engine))?;

        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('n') => {
                        engine.new_game();
                        tick_interval = engine.fall_interval();
                        last_tick = Instant::now();
                    }
                    KeyCode::Char('p') => engine.command(Move::TogglePause),
                    KeyCode::Left => engine.command(Move::Left),
                    KeyCode::Right => engine.command(Move::Right),
                    KeyCode::Down => engine.command(Move::Down),
                    KeyCode::Up => engine.command(Move::Rotate),
                    _ => {}
                }
            }
        }

        // The engine owns no timer; this loop is the periodic tick source
        // and reschedules itself when the engine reports a level change.
        if last_tick.elapsed() >= tick_interval {
            for signal in engine.tick() {
                match signal {
                    Signal::LevelChanged(interval) => {
                        tracing::debug!(?interval, "rescheduling tick timer");
                        tick_interval = interval;
                    }
                    Signal::LinesCleared(_) | Signal::GameOver => {}
                }
            }
            last_tick = Instant::now();
        }
    }
}
