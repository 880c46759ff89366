//! Bobita - egg storefront
//!
//! A terminal storefront for Bobiță's eggs. Pick quantities on the shop
//! screen, watch the order being processed, review the order list, and hand
//! the cart to your SMS app from the cart screen.

use std::io;
use std::time::{Duration, Instant};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use bobita::application::{App, Screen};
use bobita::domain::SmsComposer;
use bobita::infrastructure::{init_tracing, ClipboardComposer, StoreConfig};
use bobita::presentation::{render_ui, InputHandler};

/// How often the event loop wakes up to advance timers.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Entry point for the storefront.
///
/// Loads the configuration, sets up logging and the terminal interface, and
/// runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the config file is malformed, the log file cannot be
/// opened, or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::load()?;
    init_tracing(&config.log_file)?;
    tracing::info!(?config, "starting storefront");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, Instant::now());
    let composer = ClipboardComposer;
    let res = run_app(&mut terminal, &mut app, &composer);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Redraws, waits up to one tick for a key, then advances the app's timers.
/// Stops when the user presses 'q' outside of text entry.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, composer: &dyn SmsComposer) -> io::Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| render_ui(f, app, now))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if !app.editing_phone && app.screen != Screen::Splash => return Ok(()),
                        _ => InputHandler::handle_key_event(app, key.code, Instant::now(), composer),
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
}
