//! Structured logging adapter for a message bus.
//!
//! Binds the bus's generic logging facade (`facade::Log`) to a structured,
//! template-based backend (`backend::StructuredLogger`), with `tracing` as
//! the production backend.
//!
//! ```
//! use std::sync::Arc;
//! use bus_log_adapter::adapter::{use_backend_logging, BusConfigurator};
//! use bus_log_adapter::backend::TracingLogger;
//! use bus_log_adapter::facade::{Log, LogRegistry};
//! use serde_json::json;
//!
//! struct Bus {
//!     logs: LogRegistry,
//! }
//!
//! impl BusConfigurator for Bus {
//!     fn log_registry(&self) -> &LogRegistry {
//!         &self.logs
//!     }
//! }
//!
//! let bus = Bus { logs: LogRegistry::new() };
//! use_backend_logging(Some(&bus), Some(Arc::new(TracingLogger::new()))).unwrap();
//!
//! let log = bus.log_registry().get("orders");
//! log.info(json!("consumer started"));
//! ```

pub mod adapter;
pub mod backend;
pub mod config;
pub mod error;
pub mod facade;
pub mod observability;

pub use adapter::{use_backend_logging, BackendLog, BackendLogFactory, BusConfigurator};
pub use config::AdapterConfig;
pub use error::Error;
