// TUI module - Terminal User Interface
//
// Manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, redraw ticks, typewriter ticks)
// - Rendering the UI
//
// The typewriter is driven by re-arming a one-shot timer with the delay
// each tick reports; nothing in the loop ever blocks the thread.

pub mod app;
pub mod theme;
pub mod ui;

use crate::board::{store::CommentStore, CommentBoard};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::typewriter;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let board = CommentBoard::new(CommentStore::in_dir(&config.data_dir));
    let mut app = App::new(board, log_buffer);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles three kinds of wakeups:
/// 1. Keyboard input (focus, editing, commands)
/// 2. Periodic ticks (for uptime and log refresh)
/// 3. The typewriter deadline (one-shot, re-armed with each tick's delay)
///
/// tokio::select! waits on all three simultaneously and responds to
/// whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Redraw ticker (5 FPS is plenty between animation frames)
    let mut redraw_interval = tokio::time::interval(Duration::from_millis(200));

    // First typewriter tick waits out the startup delay so the rest of the
    // screen is readable before the animation begins
    let mut type_deadline = tokio::time::Instant::now() + typewriter::STARTUP_DELAY;

    loop {
        // Draw the UI
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = redraw_interval.tick() => {}

            // Typewriter animation: tick, then re-arm with the reported delay
            _ = tokio::time::sleep_until(type_deadline) => {
                let delay = app.tick_typewriter();
                type_deadline = tokio::time::Instant::now() + delay;
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: global keys, then the focused zone (form or list)
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Global: Ctrl+C always quits, Tab always cycles focus
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }
    if key_event.code == KeyCode::Tab {
        app.focus_next();
        return;
    }

    match app.focus {
        Focus::Email | Focus::Comment => handle_form_key(app, key_event),
        Focus::List => handle_list_key(app, key_event),
    }
}

/// Keys while editing a form input
fn handle_form_key(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        // Submit prevents any "default" beyond the form itself; inputs
        // reset only when the board reports success
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Backspace => {
            if let Some(input) = app.focused_input_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.focused_input_mut() {
                input.push(c);
            }
        }
        _ => {}
    }
}

/// Keys while browsing the comment list
fn handle_list_key(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        // Clear-all button
        KeyCode::Char('x') => app.clear_comments(),
        KeyCode::Char('l') => app.show_logs = !app.show_logs,
        KeyCode::Enter => app.focus = Focus::Email,
        _ => {}
    }
}
