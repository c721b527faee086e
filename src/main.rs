use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tickethub::commands::{AppContext, cmd_ls, cmd_path, cmd_tui};
use tickethub::config::{Config, LOG_ENV};
use tickethub::error::Result;
use tickethub::tui::Screen;
use tickethub::types::{TicketStatus, VALID_STATUSES};

/// Log file written inside the data directory
const LOG_FILE: &str = "tickethub.log";

#[derive(Parser)]
#[command(name = "tickethub")]
#[command(about = "Local ticket tracking in the terminal")]
#[command(version)]
struct Cli {
    /// Directory holding ticket data (overrides config and TICKETHUB_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard (default)
    Dashboard,

    /// Open ticket management directly
    #[command(visible_alias = "t")]
    Tickets,

    /// List tickets
    Ls {
        /// Only show tickets with this status
        #[arg(long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the ticket storage file
    Path,
}

fn parse_status(s: &str) -> std::result::Result<TicketStatus, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid status. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

/// Send logs to a file; the TUI owns the terminal
fn init_tracing(data_dir: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    std::fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_deref())?;
    init_tracing(&data_dir)?;

    let ctx = AppContext::new(config, data_dir);
    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => cmd_tui(&ctx, Screen::Dashboard).await,
        Commands::Tickets => cmd_tui(&ctx, Screen::Tickets).await,
        Commands::Ls { status, json } => cmd_ls(&ctx, status, json),
        Commands::Path => cmd_path(&ctx),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
