use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::sync::mpsc;

use tanzfm::config::Config;
use tanzfm::fs::{FileSystem, RealFileSystem};
use tanzfm::model::{self, Place};
use tanzfm::services::{
    spawn_transfer_service, TransferEngine, TransferOptions, TransferRequest, TransferResponse,
};
use tanzfm::utils;

mod app;
mod handlers;
mod ui;

/// Terminal file manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/tanzfm-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, g/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Directory to open (overrides start_dir from the config)
    path: Option<PathBuf>,
}

/// Appends log records to the debug log file
struct DebugLogger {
    file: Mutex<File>,
}

impl log::Log for DebugLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn init_debug_log() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Cannot open debug log {}", path.display()))?;
    log::set_boxed_logger(Box::new(DebugLogger { file: Mutex::new(file) }))
        .map_err(|e| anyhow::anyhow!("Logger already set: {}", e))?;
    log::set_max_level(log::LevelFilter::Debug);
    Ok(())
}

pub struct App {
    pub model: model::Model,

    fs: Arc<dyn FileSystem>,
    engine: TransferEngine,
    transfer_tx: mpsc::UnboundedSender<TransferRequest>,
    transfer_rx: mpsc::UnboundedReceiver<TransferResponse>,
    next_transfer_id: u64,

    /// Standard places resolved at startup
    places: Vec<Place>,
}

impl App {
    fn new(config: &Config, start: PathBuf) -> Result<Self> {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let model = model::Model::new(&start, fs.clone(), config)
            .map_err(|e| anyhow::anyhow!("Cannot open {}: {}", start.display(), e))?;

        let engine = TransferEngine::new(fs.clone(), TransferOptions::from_config(config));
        let (transfer_tx, transfer_rx) = spawn_transfer_service(engine.clone());
        let places = tanzfm::model::places::standard_places(&*fs);

        let mut app = Self {
            model,
            fs,
            engine,
            transfer_tx,
            transfer_rx,
            next_transfer_id: 1,
            places,
        };
        app.reload_listing(true);
        Ok(app)
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `None` when no config file exists anywhere; defaults apply then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/tanzfm/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("tanzfm").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        init_debug_log()?;
        log::debug!("Debug mode enabled");
    }

    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log::debug!("Loading config from: {}", path.display());
            Config::load(&path).with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let start = args
        .path
        .or_else(|| config.start_dir.clone())
        .unwrap_or_else(utils::default_start_dir);
    let start = std::env::current_dir()
        .map(|cwd| tanzfm::logic::path::resolve(&cwd, &start))
        .unwrap_or(start);

    let mut app = App::new(&config, start)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            if let Some(active) = &app.model.active_transfer {
                let _ = app.transfer_tx.send(TransferRequest::Cancel { id: active.id });
            }
            break;
        }

        // Process transfer responses (non-blocking)
        while let Ok(response) = app.transfer_rx.try_recv() {
            handlers::handle_transfer_response(app, response);
        }

        // Short poll while a transfer runs so progress stays live
        let timeout = if app.model.is_busy() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
