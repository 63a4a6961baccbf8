//! Command-line entry point for the Opalstack API tools.
//!
//! One-shot dispatch: pick a resource, an action, and an optional JSON
//! payload; the decoded API response is pretty-printed to stdout. Logging
//! goes to stderr so the JSON output stays pipeable.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use opalskill::{
    ApplicationTools, Config, DomainTools, MariaDbTools, OsUserTools, PsqlDbTools,
};
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Opalstack API tools
#[derive(Parser, Debug)]
#[command(name = "opalskill", version, about, long_about = None)]
struct Args {
    /// Resource collection to operate on
    #[arg(value_enum)]
    resource: Resource,

    /// Action to dispatch (list, read, create, update, delete; apps also
    /// support installer_urls)
    action: String,

    /// JSON payload for the action
    payload: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Resource {
    App,
    Domain,
    Mariadb,
    Psqldb,
    Osuser,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) {
    let Some(tracing_level) = level.to_tracing_level() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("opalskill={tracing_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level);

    let payload = args
        .payload
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("payload is not valid JSON")?;

    let config = Config::from_env()?;
    let result = match args.resource {
        Resource::App => ApplicationTools::new(config).handle(&args.action, payload).await?,
        Resource::Domain => DomainTools::new(config).handle(&args.action, payload).await?,
        Resource::Mariadb => MariaDbTools::new(config).handle(&args.action, payload).await?,
        Resource::Psqldb => PsqlDbTools::new(config).handle(&args.action, payload).await?,
        Resource::Osuser => OsUserTools::new(config).handle(&args.action, payload).await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
