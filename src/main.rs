use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use vmutil::app::App;
use vmutil::config::{self, load_config, load_config_from_path};
use vmutil::event::{Event, EventHandler};
use vmutil::logging::init_file_logging;
use vmutil::ui;

const TICK_RATE: Duration = Duration::from_millis(500);

#[derive(Parser)]
#[command(
    name = "vmutil",
    about = "Terminal card showing a VM's network utilization"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Statistics snapshot (JSON) to display
    #[arg(long)]
    stats: Option<PathBuf>,

    /// VM status: running, up, down, ...
    #[arg(long)]
    status: Option<String>,

    /// Element id prefix for the card
    #[arg(long)]
    id: Option<String>,

    /// Theme: dark, light
    #[arg(long)]
    theme: Option<String>,

    /// Write logs to this file (RUST_LOG sets the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    if let Some(path) = &config.general.log_file {
        init_file_logging(path)?;
    }
    tracing::info!(
        stats = ?config.general.stats_path,
        vm_status = %config.general.vm_status,
        "vmutil v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, config).await;
    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new(TICK_RATE);

    terminal.draw(|frame| ui::draw(frame, &mut app))?;

    while app.running {
        if let Some(event) = events.next().await {
            let should_draw = match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                        true
                    } else {
                        false
                    }
                }
                Event::Tick => app.on_tick(),
                Event::Resize => true,
            };
            if should_draw {
                terminal.draw(|frame| ui::draw(frame, &mut app))?;
            }
        } else {
            break;
        }
    }

    tracing::info!("vmutil exiting");
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ref path) = cli.stats {
        config.general.stats_path = Some(path.clone());
    }
    if let Some(ref status) = cli.status {
        config.general.vm_status = status.clone();
    }
    if let Some(ref id) = cli.id {
        config.general.card_id = id.clone();
    }
    if let Some(ref theme) = cli.theme {
        config.colors.theme = theme.clone();
    }
    if let Some(ref path) = cli.log_file {
        config.general.log_file = Some(path.clone());
    }

    config
}
