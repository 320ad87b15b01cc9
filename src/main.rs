//! KeyVault - keyring front-end
//!
//! Browse saved (service, username) pairs in a tree and fetch, save or
//! delete their passwords in the OS keyring.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

mod app;
mod input;
mod logging;
mod state;
mod ui;
mod vault;

use app::{App, AppConfig};
use state::SystemClipboard;
use vault::KeyringStore;

fn main() -> anyhow::Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let cache_path = args.get(1).map(PathBuf::from);

    let mut config = AppConfig::default();
    if let Some(path) = cache_path {
        config.cache_path = path;
    }

    logging::init(&config.log_path);
    info!(cache = %config.cache_path.display(), "starting keyvault");

    let mut app = App::new(
        config,
        Box::new(KeyringStore::new()),
        Box::new(SystemClipboard::new()),
    );
    app.restore().context("failed to load the account cache")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "keyvault stopped");
    } else {
        info!("keyvault closed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key)? {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
