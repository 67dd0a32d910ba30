//! PIGSKIN - daily NFL roster trivia for the terminal
//!
//! Name a player from the team, position, and season on the card.
//! Ten rounds a day, one attempt per name.

mod app;
mod game;
mod roster;
mod storage;
mod tui;

use app::AppCoordinator;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};
use storage::Storage;
use tui::Tui;

fn main() -> io::Result<()> {
    let storage = Storage::open().map_err(io::Error::other)?;

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut coordinator = AppCoordinator::new(storage);

    // Main event loop
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        // Calculate timeout for next tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => coordinator.on_esc(),
                        KeyCode::Enter => coordinator.on_enter(),
                        KeyCode::Tab => coordinator.on_tab(),
                        KeyCode::Up => coordinator.on_up(),
                        KeyCode::Down => coordinator.on_down(),
                        KeyCode::Backspace => coordinator.on_backspace(),
                        KeyCode::Char(c) => coordinator.on_char(c),
                        _ => {}
                    }
                }
            }
        }

        // Handle timer tick
        if last_tick.elapsed() >= tick_rate {
            coordinator.tick();
            last_tick = Instant::now();
        }

        if coordinator.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
