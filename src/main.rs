//! PIECEKEEPER - a terminal piece inventory
//!
//! Take the front piece or stash it for later.

// Allow unreachable patterns due to #[non_exhaustive] enums for future compatibility
#![allow(unreachable_patterns)]

mod generator;
mod inventory;
mod menu;
mod piece;
mod queue;
mod session;
mod settings;
mod stack;
mod ui;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use menu::{Menu, MenuAction, MenuScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use session::{Command, Session, SessionStats};
use settings::Settings;
use std::{
    io::{self, stdout},
    time::Duration,
};

/// Target frame rate
const TARGET_FPS: u64 = 30;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

/// Application state
enum AppState {
    Menu(Menu),
    Inventory(Session),
}

/// Get the piecekeeper temp directory, creating it if needed
fn keeper_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("piecekeeper");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    // Setup the temp directory for logs
    let log_dir = keeper_temp_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Setup tracing to log file (the TUI owns the terminal)
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("piecekeeper=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "piecekeeper starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    // Load settings
    let mut settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app and capture result
    let result = run_app(&mut terminal, &mut settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    // Save settings (style changes made in the menu)
    if let Err(e) = settings.save() {
        eprintln!("Warning: Could not save settings: {}", e);
    }

    // Print final message
    match &result {
        Ok(Some(stats)) => {
            println!("\nThanks for keeping the pieces in order!");
            println!(
                "Played: {} | Reserved: {} | Used from reserve: {}",
                stats.played, stats.reserved, stats.used
            );
            println!("Pieces generated: {}", stats.generated);
        }
        Ok(None) => {
            println!("\nThanks for keeping the pieces in order!");
        }
        Err(_) => {}
    }

    result.map(|_| ())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &mut Settings,
) -> io::Result<Option<SessionStats>> {
    let mut state = AppState::Menu(Menu::new());
    let mut last_stats: Option<SessionStats> = None;

    loop {
        // Render
        terminal.draw(|frame| match &state {
            AppState::Menu(menu) => ui::render_menu(frame, menu),
            AppState::Inventory(session) => ui::render_inventory(frame, session, settings),
        })?;

        // Handle input
        if !event::poll(FRAME_DURATION)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // State transitions are applied after the match to avoid holding
        // the borrow across the assignment
        let mut next_state: Option<AppState> = None;

        match &mut state {
            AppState::Menu(menu) => match key.code {
                KeyCode::Up => menu.move_up(),
                KeyCode::Down => menu.move_down(),
                KeyCode::Left => menu.adjust_left(settings),
                KeyCode::Right => menu.adjust_right(settings),
                KeyCode::Enter => {
                    if let Some(action) = menu.select().cloned() {
                        match action {
                            MenuAction::StartSession => {
                                next_state = Some(AppState::Inventory(Session::new()));
                            }
                            MenuAction::GoToScreen(screen) => {
                                menu.go_to(screen, settings);
                            }
                            MenuAction::Back => {
                                menu.go_back(settings);
                            }
                            MenuAction::Quit => {
                                return Ok(last_stats);
                            }
                            _ => {}
                        }
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    if menu.screen == MenuScreen::Main {
                        return Ok(last_stats);
                    }
                    menu.go_back(settings);
                }
                _ => {}
            },
            AppState::Inventory(session) => {
                let mut leave = false;
                match key.code {
                    KeyCode::Up => session.move_up(),
                    KeyCode::Down => session.move_down(),
                    KeyCode::Enter => match session.selected_command() {
                        Some(command) => session.execute(command),
                        None => leave = true,
                    },
                    KeyCode::Char('1') => session.execute(Command::Play),
                    KeyCode::Char('2') => session.execute(Command::Reserve),
                    KeyCode::Char('3') => session.execute(Command::UseReserved),
                    KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Esc => leave = true,
                    KeyCode::Char(other) => session.invalid_option(other),
                    _ => {}
                }
                if leave {
                    let stats = session.stats();
                    tracing::info!(
                        "session ended: played={} reserved={} used={} generated={}",
                        stats.played,
                        stats.reserved,
                        stats.used,
                        stats.generated
                    );
                    last_stats = Some(stats);
                    next_state = Some(AppState::Menu(Menu::new()));
                }
            }
        }

        if let Some(next) = next_state {
            state = next;
        }
    }
}
