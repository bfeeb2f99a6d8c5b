//! Structured logging backend.
//!
//! # Responsibilities
//! - Define the `StructuredLogger` interface the adapter writes to
//! - Hold the process default logger, resolved at use time
//! - Bridge structured writes to `tracing` events
//!
//! # Design Decisions
//! - Values are `serde_json::Value`, so any `Serialize` type can be captured
//! - Context enrichment returns a new logger; loggers are never mutated
//! - Filtering and output formatting stay with `tracing-subscriber`

mod level;
mod logger;
pub mod template;
mod tracing_logger;

pub use level::EventLevel;
pub use logger::{default_logger, DefaultLogger, StructuredLogger};
pub use tracing_logger::TracingLogger;
