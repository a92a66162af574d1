use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::RodioEngine;

mod event_loop;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = settings::load_settings();

    // An explicit tracks directory on the command line beats the config.
    if let Some(dir) = env::args_os().nth(1) {
        settings.library.tracks_dir = PathBuf::from(dir);
    }

    if let Err(e) = startup::init_logging(&settings.logging) {
        eprintln!("jukebox: logging disabled: {e}");
    }
    info!(
        tracks_dir = %settings.library.tracks_dir.display(),
        data_file = %settings.library.data_file.display(),
        "starting"
    );

    let (store, catalog) = startup::open_library(&settings.library)?;
    let engine = RodioEngine::open_default()?;
    let mut app = App::new(store, catalog, settings.library.tracks_dir.clone(), engine);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.shutdown();
    info!("stopped");
    run_result
}
