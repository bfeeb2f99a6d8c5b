//! Demo host wiring the structured bus logging adapter.
//!
//! # Architecture Overview
//!
//! ```text
//!   bus component
//!        │ registry.get("svc").info(..)
//!        ▼
//!   ┌──────────────┐   ┌───────────────────┐   ┌──────────────┐
//!   │ LogRegistry  │──▶│ BackendLogFactory │──▶│  BackendLog  │
//!   │   (facade)   │   │   + LogCache      │   │  (adapter)   │
//!   └──────────────┘   └───────────────────┘   └──────┬───────┘
//!                                                     │ write / is_enabled
//!                                                     ▼
//!                                             ┌──────────────┐
//!                                             │TracingLogger │──▶ tracing-subscriber
//!                                             └──────────────┘
//! ```
//!
//! This binary is the outermost wiring layer, the only place the
//! process-wide registry is used.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde_json::json;

use bus_log_adapter::adapter::{install_with, BusConfigurator};
use bus_log_adapter::config::{apply_overrides, load_config, AdapterConfig, LogFormat};
use bus_log_adapter::facade::{self, InvariantFormat, LogLevel, LogRegistry};
use bus_log_adapter::observability::logging::init_logging;
use bus_log_adapter::{BackendLogFactory, Error};

#[derive(Parser)]
#[command(name = "bus-log-demo")]
#[command(about = "Writes sample bus log records through the structured adapter", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter directive, overriding the configuration.
    #[arg(short, long)]
    filter: Option<String>,

    /// Output format, overriding the configuration.
    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Compact,
    Json,
}

impl From<Format> for LogFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Pretty => LogFormat::Pretty,
            Format::Compact => LogFormat::Compact,
            Format::Json => LogFormat::Json,
        }
    }
}

/// Stand-in for the host's bus configuration.
struct DemoBus {
    registry: &'static LogRegistry,
}

impl BusConfigurator for DemoBus {
    fn log_registry(&self) -> &LogRegistry {
        self.registry
    }
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AdapterConfig::default(),
    };
    let config = apply_overrides(config, cli.filter, cli.format.map(LogFormat::from))?;

    init_logging(&config.logging)?;
    tracing::info!(
        format = ?config.logging.format,
        context_key = %config.adapter.context_key,
        "Configuration loaded"
    );

    let bus = DemoBus {
        registry: facade::global(),
    };
    let factory = BackendLogFactory::new(None).context_key(config.adapter.context_key.clone());
    install_with(bus.log_registry(), factory);

    let log = bus.log_registry().get("demo.consumer");
    log.info(json!("consumer started"));
    log.debug_lazy(&|| json!({ "queue": "orders", "prefetch": 16 }));
    log.warn_format(
        "retrying {MessageId} after {Attempts} attempts",
        &[json!("5f1c"), json!(3)],
    );
    log.info_format_in(&InvariantFormat, "{Count} messages in {Elapsed} ms", &[json!(42), json!(12.5)]);

    let cause = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "broker closed the channel");
    log.error_with_cause(json!({ "operation": "publish", "exchange": "orders" }), &cause);
    log.log(LogLevel::Fatal, json!("bus stopped"));

    tracing::info!("Demo complete");
    Ok(())
}
