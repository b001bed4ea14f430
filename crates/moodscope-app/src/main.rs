//! Moodscope - lexicon sentiment and readability analysis.
//!
//! Runs one of:
//! - `analyze`: analyze text from an argument, a file or stdin
//! - `serve`: the HTTP API server
//! - `history`: show or clear recent analyses

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moodscope_app::render::{render_history, render_result};
use moodscope_app::{select_provider, AppConfig};
use moodscope_core::TextAnalyzer;
use moodscope_server::Server;
use moodscope_storage::Database;

/// Moodscope - lexicon sentiment and readability analysis
#[derive(Parser, Debug)]
#[command(name = "moodscope", version, about)]
struct Args {
    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History database file (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze text (reads stdin when neither TEXT nor --file is given)
    Analyze {
        /// Text to analyze
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Do not record the analysis in the history
        #[arg(long)]
        no_history: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Show recent analyses
    History {
        /// Maximum number of entries to show
        #[arg(long, short, default_value_t = 10)]
        limit: usize,

        /// Delete all entries
        #[arg(long)]
        clear: bool,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "moodscope", "moodscope").map(|dirs| dirs.data_dir().join("logs"))
}

/// Initialize logging with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("moodscope={},warn", log_level)));

    if let Some(log_dir) = logs_dir() {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("moodscope")
                .filename_suffix("log")
                .build(&log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                // Console output goes to stderr so stdout stays clean for results
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .init();

                tracing::debug!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }
    }

    // Fallback: console logging only
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::warn!("File logging unavailable, using console only");
    None
}

/// Opens the history database, honoring `--db` over the config file.
fn open_database(args: &Args, config: &AppConfig) -> anyhow::Result<Database> {
    let db = match args.db.as_ref().or(config.history.db_path.as_ref()) {
        Some(path) => Database::with_path(path),
        None => Database::new(),
    }
    .context("failed to open history database")?;

    Ok(db.with_capacity(config.history.capacity))
}

fn run_analyze(
    args: &Args,
    config: &AppConfig,
    text: Option<String>,
    file: Option<PathBuf>,
    json: bool,
    no_history: bool,
) -> anyhow::Result<()> {
    let analyzer =
        TextAnalyzer::new(config.analyzer.clone()).context("failed to load lexicon")?;

    let mut provider = select_provider(text, file);
    tracing::debug!("Reading input from {}", provider.describe());
    let text = provider.transcript()?;

    if text.trim().is_empty() {
        anyhow::bail!("please enter some text");
    }

    let result = analyzer.analyze(text.as_str());

    if !no_history {
        open_database(args, config)?.record_result(&result)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_result(&result));
    }

    Ok(())
}

async fn run_serve(
    args: &Args,
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut server_config = config.server_config();
    if let Some(host) = host {
        server_config = server_config.with_host(host);
    }
    if let Some(port) = port {
        server_config = server_config.with_port(port);
    }
    if args.db.is_some() {
        server_config.db_path = args.db.clone();
    }
    if server_config.db_path.is_none() {
        server_config.db_path = Some(Database::default_db_path()?);
    }

    let analyzer =
        TextAnalyzer::new(config.analyzer.clone()).context("failed to load lexicon")?;
    let server = Server::with_analyzer(server_config, analyzer).await?;

    println!("Listening on http://{}", server.addr());
    server.run().await?;

    Ok(())
}

fn run_history(
    args: &Args,
    config: &AppConfig,
    limit: usize,
    clear: bool,
    json: bool,
) -> anyhow::Result<()> {
    let db = open_database(args, config)?;

    if clear {
        let cleared = db.clear_history()?;
        tracing::info!(cleared, "History cleared");
        println!("Cleared {} entries.", cleared);
        return Ok(());
    }

    let records = db.recent_records(limit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", render_history(&records));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args);

    let config = AppConfig::load_or_default(args.config.as_deref())?;

    match &args.command {
        Command::Analyze {
            text,
            file,
            json,
            no_history,
        } => run_analyze(
            &args,
            &config,
            text.clone(),
            file.clone(),
            *json,
            *no_history,
        ),
        Command::Serve { host, port } => run_serve(&args, &config, host.clone(), *port).await,
        Command::History { limit, clear, json } => {
            run_history(&args, &config, *limit, *clear, *json)
        }
    }
}
