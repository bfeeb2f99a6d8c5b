//! Adapter from the bus logging facade to the structured backend.
//!
//! # Data Flow
//! ```text
//! LogRegistry::get(name)
//!     → BackendLogFactory (installed by install / use_backend_logging)
//!     → LogCache hit, or base.for_context("name", name) on a miss
//!     → BackendLog
//!     → StructuredLogger::write / write_error / is_enabled
//! ```
//!
//! # Design Decisions
//! - One handle per name, kept for the life of the factory
//! - Object calls all use the `{@obj}` template with the object as its argument
//! - Lazy providers run only after the backend reports the level enabled
//! - Without an explicit base logger the process default is resolved per lookup

pub mod cache;
pub mod factory;
pub mod install;
pub mod log;

pub use cache::LogCache;
pub use factory::{BackendLogFactory, DEFAULT_CONTEXT_KEY};
pub use install::{install, install_with, use_backend_logging, BackendLoggingExt, BusConfigurator};
pub use log::{event_level, BackendLog, OBJECT_TEMPLATE};
