//! Buddy Carousel TUI Entry Point
//!
//! Shows the buddy carousel full-screen.
//!
//! Usage:
//!   buddy-carousel
//!
//! Configuration comes from `~/.config/buddy-carousel/carousel.toml` and
//! `BUDDY_CAROUSEL_*` environment variables. Logs go to stderr and are off
//! unless `RUST_LOG` is set (redirect with `2>carousel.log`).

use std::io;
use std::panic;

use crossterm::{
    event::{EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buddy_carousel_tui::terminal::{restore_terminal, TerminalGuard};
use buddy_carousel_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: buddy-carousel requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  - Running in a non-interactive environment (CI, container)");
        eprintln!("  - SSH without -t flag");
        eprintln!("  - Piped stdin/stdout");
        std::process::exit(1);
    }

    let config = carousel_core::load_config()?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize terminal; the guard undoes all of it on any exit from here
    let guard = TerminalGuard::new();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let size = terminal.size()?;
    let mut app = App::new(config, (size.width, size.height));
    let result = app.run(&mut terminal).await;

    // Restore terminal
    drop(guard);
    terminal.show_cursor()?;

    // Propagate any errors
    result
}
