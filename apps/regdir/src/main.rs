//! Registry Directory
//!
//! MCP server over stdio that answers questions about UI component
//! registries, plus an offline `probe` sweep of the catalog.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use regdir_core::{branding, write_probe_reports, IndexProber};
use regdir_mcp::{
    serve_stdio, RegistryDirectoryHandler, ServerConfig, ServiceContainer, ToolDispatcher,
};

#[derive(Parser, Debug)]
#[command(
    name = "regdir",
    version,
    about = "Directory of UI component registries, served over MCP"
)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags that take precedence over `REGDIR_*` environment variables
#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Registry catalog JSON (defaults to the bundled catalog)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Pre-scraped component snapshot JSON
    #[arg(long, global = true, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Timeout for each index candidate probe, in milliseconds
    #[arg(
        long,
        global = true,
        value_name = "MS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    probe_timeout_ms: Option<u64>,

    /// Timeout for get_component_details, in milliseconds
    #[arg(
        long,
        global = true,
        value_name = "MS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    details_timeout_ms: Option<u64>,

    /// Directory for rolling log files
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl ConfigArgs {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(path) = self.catalog {
            config.catalog_path = Some(path);
        }
        if let Some(path) = self.snapshot {
            config.snapshot_path = Some(path);
        }
        if let Some(ms) = self.probe_timeout_ms {
            config.probe_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = self.details_timeout_ms {
            config.details_timeout = Duration::from_millis(ms);
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = dir;
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve MCP over stdin/stdout (the default)
    Serve,

    /// Probe every catalog registry for a public index and write a report
    Probe {
        /// Where to write the JSON report
        #[arg(short, long, default_value = "probe-results.json")]
        output: PathBuf,
    },
}

/// Initialize tracing with console and file logging
///
/// - Console: compact, on stderr (stdout carries MCP frames)
/// - File: daily rotation under `log_dir`
fn init_tracing(log_dir: &Path) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // Creates files like: regdir.2026-01-22.log
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(branding::LOG_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .context("Failed to create log file appender")?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG takes precedence
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,regdir=debug,regdir_core=debug,regdir_mcp=debug"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ServerConfig::from_env();
    cli.overrides.apply(&mut config);

    // Guard must be kept alive for the duration of the program
    let _guard = init_tracing(&config.log_dir)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %config.log_dir.display(),
        "{} starting",
        branding::DISPLAY_NAME
    );

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config).await,
        Commands::Probe { output } => probe(&config, &output).await,
    };

    if let Err(e) = &result {
        error!(error = %format!("{:#}", e), "Exited with error");
    }
    result
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let services = Arc::new(ServiceContainer::initialize(config).await?);
    let handler = RegistryDirectoryHandler::new(Arc::new(ToolDispatcher::new(services)));
    serve_stdio(handler).await
}

async fn probe(config: &ServerConfig, output: &Path) -> anyhow::Result<()> {
    let services = ServiceContainer::initialize(config).await?;
    let prober = IndexProber::new(Arc::clone(&services.resolver));

    let reports = prober.probe_all(&services.catalog).await;
    for report in &reports {
        match &report.index_url {
            Some(index_url) => info!(
                registry = %report.name,
                index_url = %index_url,
                components = report.components.len(),
                "Index found"
            ),
            None => info!(registry = %report.name, "No index found"),
        }
    }

    write_probe_reports(&reports, output)
        .await
        .with_context(|| format!("Failed to write probe report to {}", output.display()))
}
