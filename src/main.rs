//! wxdash - current conditions, daily and hourly forecasts in the terminal
//!
//! A terminal UI application that fetches a Visual Crossing forecast for a
//! location and shows it in the location's own local time.

use std::fs::File;
use std::io;
use std::panic;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use wxdash::app::App;
use wxdash::cli::Cli;
use wxdash::config::StartupConfig;
use wxdash::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Installs a file-backed tracing subscriber when a log file was requested.
/// The terminal belongs to the UI, so nothing is logged otherwise.
fn setup_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::options().create(true).append(true).open(path)?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_max_level(cli.log_level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish(),
    )?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    // Resolve configuration before touching the terminal so errors print normally
    let config = StartupConfig::load(&cli)?;
    let mut app = App::with_startup_config(&config)?;
    tracing::info!(message = "starting", location = %config.location, endpoint = %config.base_url);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Trigger initial data load
    app.submit_location(&config.location);

    // Main event loop
    loop {
        // Apply any finished fetches, then render
        app.poll_fetches();
        terminal.draw(|f| ui::render(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    tracing::info!("shutdown");
    Ok(())
}
