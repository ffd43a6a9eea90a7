use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod app;
mod cli;
mod clock;
mod layout;
mod screens;
mod styles;
mod tui;
mod ui;
mod widgets;

use app::App;
use cli::Cli;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic so the terminal is
        // usable after a panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Initialize tracing with non-blocking file logging into `log_dir`.
fn init_logging(log_dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(log_dir, "timeview.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    styles::init_theme(cli.theme_type());

    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("timeview");
    let guard = init_logging(&log_dir)?;

    let mut app = App::new()?;
    let result = app.run();

    // Flush pending log lines on normal exit (panic hook handles panics)
    drop(guard);

    result
}
