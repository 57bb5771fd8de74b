use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{error, info, warn};

use shelf::app::{cli::Args, config::AppConfig, inputs, App};
use shelf::library::JsonLibrary;
use shelf::{logging, theme, ui};

const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let args = Args::parse();

    if args.generate_config {
        println!("{}", AppConfig::default_config_toml());
        return Ok(());
    }

    // Logging failures must not stop the browser
    let _guard = match logging::init(&AppConfig::get_log_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            None
        }
    };

    let (config, state) = AppConfig::load();
    let library_path = args
        .library
        .clone()
        .unwrap_or_else(|| config.library_path.clone());
    let library = JsonLibrary::new(library_path);
    info!("Starting shelf with library {}", library.path().display());
    let mut app = App::new(config, state, theme::load_current_theme(), Box::new(library));

    if let Some(ref preset) = args.preset {
        if !app.select_preset(preset) {
            warn!("Unknown preset '{}'", preset);
            app.show_toast(&format!("Unknown preset: {}", preset));
        }
    }

    if args.print {
        app.refresh()?;
        let depth = app.settings.group_fields.len();
        for row in ui::plain::plain_rows(app.browser.items(), depth) {
            println!("{}", row);
        }
        return Ok(());
    }

    // A broken library is shown in the UI rather than aborting
    if let Err(e) = app.refresh() {
        error!("{:#}", e);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save state on exit
    app.persist();

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.is_running {
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(TICK).context("Failed to poll terminal events")? {
            if let Event::Key(key) = event::read()? {
                inputs::handle_event(key, app);
            }
        }

        app.on_tick(Instant::now());
    }
    Ok(())
}
