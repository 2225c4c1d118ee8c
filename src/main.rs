use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use snapq::App;
use snapq::config::{self, Overrides};
use snapq::search::{SearchTargets, spawn_worker};
use snapq::store::StoreClient;

/// Interactive tag search for photo-sharing service libraries
#[derive(Debug, Parser)]
#[command(name = "snapq", version, about)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Document-store endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Project identifier
    #[arg(long, value_name = "ID")]
    project: Option<String>,

    /// Database identifier
    #[arg(long = "database", value_name = "ID")]
    database_id: Option<String>,

    /// Primary posts collection
    #[arg(long = "posts", value_name = "ID")]
    post_collection_id: Option<String>,

    /// Auxiliary collection searched after the posts collection (repeatable)
    #[arg(long = "collection", value_name = "ID")]
    other_collection_ids: Vec<String>,

    /// API key for server-side access
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Idle interval before suggestions are fetched
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            project: self.project.clone(),
            database_id: self.database_id.clone(),
            post_collection_id: self.post_collection_id.clone(),
            other_collection_ids: self.other_collection_ids.clone(),
            api_key: self.api_key.clone(),
            debounce_ms: self.debounce_ms,
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref(), cli.overrides())?;

    // Wire the session to the background search worker
    let client = StoreClient::new(&config.service)?;
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(
        client,
        SearchTargets::from_config(&config),
        request_rx,
        response_tx,
    );

    let mut app = App::new(&config);
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let _ = execute!(io::stdout(), EnableMouseCapture);

    let result = run(&mut terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wait for input, but never past the next debounce deadline
        if event::poll(app.tick_timeout())? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse_event(mouse);
                }
                _ => {}
            }
        }

        // Fire due debounces and drain worker responses
        app.on_tick();
    }

    Ok(())
}
