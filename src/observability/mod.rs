//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! TracingLogger writes
//!     → tracing events (severity, template, properties, error)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout (pretty, compact or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured output (JSON) available for machine parsing
//! - `RUST_LOG` takes precedence over the configured filter
//! - Only the outermost binary installs the global subscriber

pub mod logging;
