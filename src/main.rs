// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use url_scout::app::App;
use url_scout::config::{self, Cli};
use url_scout::core::client::HttpScanService;
use url_scout::core::controller::ScanController;
use url_scout::core::report::render_plain;
use url_scout::theme::ThemeStore;
use url_scout::{logging, ui};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = logging::initialize_logging()?;
    info!(log = %log_path.display(), "Starting url-scout.");

    let settings = config::load_settings(&cli)?;
    let service = HttpScanService::new(&settings.backend)?;
    let controller = ScanController::new(Arc::new(service), settings.backend.ordering);

    if let Some(url) = &cli.url {
        return run_once(&controller, url).await;
    }

    let theme_path = settings.theme_file.clone().unwrap_or_else(ThemeStore::default_path);
    let app = App::new(ThemeStore::load(theme_path));

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run_tui(&mut terminal, app, &controller);

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result.map(|_| ExitCode::SUCCESS)
}

/// Submits one scan, waits for it to resolve and prints the report.
async fn run_once(controller: &ScanController, url: &str) -> Result<ExitCode> {
    controller.submit(url)?;
    let mut updates = controller.subscribe();
    let snapshot = updates.wait_for(|s| !s.state.is_loading()).await?.clone();

    print!("{}", render_plain(&snapshot.state));
    Ok(if snapshot.state.failure().is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn run_tui<B: Backend>(terminal: &mut Terminal<B>, mut app: App, controller: &ScanController) -> Result<()> {
    let mut updates = controller.subscribe();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, controller, key);
                }
            }
        }

        if updates.has_changed().unwrap_or(false) {
            app.apply(updates.borrow_and_update().clone());
        }
        app.on_tick();
    }
    Ok(())
}

fn handle_key(app: &mut App, controller: &ScanController, key: KeyEvent) {
    if app.theme_menu.is_some() {
        match key.code {
            KeyCode::Up => app.theme_menu_prev(),
            KeyCode::Down => app.theme_menu_next(),
            KeyCode::Enter => app.confirm_theme(),
            KeyCode::Esc => app.close_theme_menu(),
            _ => {}
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('t') if ctrl => app.open_theme_menu(),
        KeyCode::Char('u') if ctrl => app.clear_input(),
        KeyCode::Char(c) if !ctrl => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Enter => app.submit(controller),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}
