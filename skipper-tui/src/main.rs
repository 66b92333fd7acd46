//! Terminal UI for browsing the skips offered at a location and picking one.

mod app;
mod config;
mod input;
mod logging;
mod ui;

use std::{io, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use skipper_core::{ports::SkipSource, pricing::PriceBreakdown};
use skipper_provider_wewantwaste::WeWantWasteSource;
use tracing::{error, info};

use crate::app::App;
use crate::config::Cli;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&cli.log_file)?;

    // HTTP + source setup
    let client = Client::builder().user_agent("skipper/0.1").build()?;
    let location = cli.location();
    let source = WeWantWasteSource::with_base_url(client, cli.base_url, location);
    info!(
        postcode = %source.location().postcode,
        area = %source.location().area,
        base_url = %source.base_url(),
        "starting skip selection"
    );
    let source: Arc<dyn SkipSource> = Arc::new(source);

    // App state; the listing fetch starts here
    let mut app = App::mount(source);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Unmount: a listing that has not arrived yet is discarded
    app.shutdown().await;

    if let Err(err) = &res {
        error!(error = %err, "skip selection ended with an error");
    }
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.poll_load();

        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for input (small timeout so a finished fetch shows up promptly)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
            && input::handle_key_event(key, app) == Action::Quit
        {
            break;
        }
    }

    if let Some(selected) = app.view.selected() {
        info!(
            id = %selected.id,
            size = selected.size,
            price = %PriceBreakdown::of(selected),
            "leaving with a skip selected"
        );
    }
    Ok(())
}
