//! Triage CLI
//!
//! Reads symptom submissions as JSON, validates them, and assigns a
//! RED / YELLOW / GREEN priority with a reason trail. Results go to stdout;
//! logs go to stderr.

use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use triage_cli::commands::{self, open_input};
use triage_cli::{Cli, Commands, LoggingConfig, TriageConfig};
use triage_core::{Clock, FixedClock, SystemClock};
use triage_engine::{describe_metrics, TriageEngine};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = TriageConfig::load(&cli.config, &cli)?;

    // Initialize tracing
    init_tracing(cli.verbose, &config.logging);

    // Initialize metrics
    let metrics_handle = if cli.metrics {
        Some(init_metrics()?)
    } else {
        None
    };
    info!("Configuration loaded");

    let stdout = std::io::stdout().lock();

    let status = match cli.command {
        Commands::Classify { input, at } => {
            let clock: Arc<dyn Clock> = match at {
                Some(at) => Arc::new(FixedClock::new(at)),
                None => Arc::new(SystemClock),
            };
            let engine = TriageEngine::new(config.rules, clock)?;
            commands::classify(&engine, open_input(&input)?, stdout)?
        }

        Commands::Validate { input } => commands::validate_only(open_input(&input)?, stdout)?,

        Commands::Rules => {
            commands::rules(&config.rules, stdout)?;
            commands::CommandStatus::Success
        }

        Commands::Summarize { input } => {
            let summary = commands::summarize(open_input(&input)?, stdout)?;
            info!(total = summary.total, "Summarized case records");
            commands::CommandStatus::Success
        }
    };

    if let Some(handle) = metrics_handle {
        eprint!("{}", handle.render());
    }

    Ok(status.exit_code())
}

/// Install the Prometheus recorder and return handle for rendering
fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    describe_metrics();
    Ok(handle)
}

/// Initialize tracing/logging on stderr
fn init_tracing(verbose: bool, logging: &LoggingConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("triage=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(logging.filter.as_deref().unwrap_or("triage=info"))
        })
    };

    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
