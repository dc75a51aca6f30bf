//! mediashelf - terminal catalog of films and series with favorites
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! mediashelf
//!
//! # CLI mode (for automation)
//! mediashelf search nolan
//! mediashelf fav add Parasite-2019 --json
//! mediashelf favorites
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use mediashelf::app::App;
use mediashelf::cli::{Cli, Command, ExitCode, Output};
use mediashelf::commands::{self, Context};
use mediashelf::{logging, ui};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best effort; a read-only home should not stop the app
    if let Err(e) = logging::init() {
        if !cli.quiet && cli.is_cli_mode() {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }

    let ctx = Context::from_cli(&cli);

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli, &ctx).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui(ctx).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, ctx: &Context) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Films(cmd)) => commands::films_cmd(cmd, ctx, &output).await,

        Some(Command::Series(cmd)) => commands::series_cmd(cmd, ctx, &output).await,

        Some(Command::Search(cmd)) => commands::search_cmd(cmd, ctx, &output).await,

        Some(Command::Info(cmd)) => commands::info_cmd(cmd, ctx, &output).await,

        Some(Command::Favorites(cmd)) => commands::favorites_cmd(cmd, ctx, &output).await,

        Some(Command::Fav(cmd)) => commands::fav_cmd(cmd, ctx, &output).await,

        None => {
            // Handled by the is_cli_mode check
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(ctx: Context) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::with_store(ctx.store).with_card_style(ctx.card_style);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies fetch results, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel();

    // First frame shows the home loading marker while startup runs
    app.bootstrap();
    app.home.set_loading(true);
    terminal.draw(|frame| ui::draw(frame, app))?;
    app.start().await;

    while app.running {
        app.dispatch(&tx);

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Completed fetches, in arrival order
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }
    }

    Ok(())
}
