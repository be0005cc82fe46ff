mod app;
mod config;
mod event;
mod game;
mod input;
mod ui;

use std::fs::File;
use std::io;
use std::time::Instant;

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::consts::{LOG_FILE_NAME, TARGET_FPS};
use event::{Event, EventHandler, FrameClock};

/// Logs go to a file; the terminal belongs to the game.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let Ok(file) = File::create(&path) else { return };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn restore_terminal(enhanced_keys: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if enhanced_keys {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)
}

fn main() -> io::Result<()> {
    init_logging();
    log::info!("term-pong starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::info!("key release events: {}", if enhanced_keys { "on" } else { "off" });

    // Leave the terminal usable if an invariant check fails
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(enhanced_keys);
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    let mut app = App::new(enhanced_keys);
    let mut clock = FrameClock::new(TARGET_FPS);
    let event_handler = EventHandler::new(clock.frame_time());

    // Main loop
    while !app.should_quit {
        for event in event_handler.pending()? {
            match event {
                Event::Key(key) => app.on_key(key, Instant::now()),
            }
        }
        if app.should_quit {
            break;
        }

        let dt = clock.tick();
        app.on_frame(dt, clock.fps(), Instant::now());
        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    // Restore terminal
    restore_terminal(enhanced_keys)?;
    terminal.show_cursor()?;
    log::info!("term-pong exiting");

    Ok(())
}
