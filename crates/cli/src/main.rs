mod commands;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use goal_lookup_core::{CSV_URL_ENV, FETCH_TIMEOUT_ENV, env_non_empty, env_parse_with_default};
use goal_lookup_service::GoalService;
use goal_lookup_source::{FileGoalSource, GoalSource, HttpGoalSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "goal-lookup")]
#[command(about = "Look up goals from a spreadsheet CSV export", long_about = None)]
struct Cli {
    /// CSV export URL (falls back to GOAL_LOOKUP_CSV_URL)
    #[arg(long, global = true, conflicts_with = "source_file")]
    source_url: Option<String>,
    /// Local CSV file to read instead of fetching
    #[arg(long, global = true)]
    source_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Look up a goal by name (exact or fuzzy)
    Lookup {
        name: String,
        #[arg(short, long)]
        compact: bool,
    },
    /// Print every goal as JSON
    List,
    /// Print names of goals whose difficulty contains the value
    Difficulty { level: String },
    /// Print a random goal
    Random,
}

fn build_source(url: Option<String>, file: Option<PathBuf>) -> Result<Arc<dyn GoalSource>> {
    if let Some(path) = file {
        return Ok(Arc::new(FileGoalSource::new(path)));
    }
    let url = url.or_else(|| env_non_empty(CSV_URL_ENV)).ok_or_else(|| {
        anyhow::anyhow!("--source-url, --source-file or {CSV_URL_ENV} must be provided")
    })?;
    let timeout_secs: u64 = env_parse_with_default(FETCH_TIMEOUT_ENV, 0);
    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
    Ok(Arc::new(HttpGoalSource::new(url, timeout)?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = build_source(cli.source_url, cli.source_file)?;
    let service = Arc::new(GoalService::new(source));

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(service, port, host).await?,
        Commands::Lookup { name, compact } => {
            commands::query::run_lookup(&service, &name, compact).await?;
        },
        Commands::List => commands::query::run_list(&service).await?,
        Commands::Difficulty { level } => commands::query::run_difficulty(&service, &level).await?,
        Commands::Random => commands::query::run_random(&service).await?,
    }

    Ok(())
}
