//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → loader.rs (command-line overrides, validated again)
//!     → AdapterConfig (validated, immutable)
//!     → observability::logging (subscriber) and BackendLogFactory (context key)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - `RUST_LOG` overrides the configured filter at subscriber init

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_overrides, load_config, parse_config, ConfigError};
pub use schema::{AdapterConfig, FacadeConfig, LogFormat, LoggingConfig};
pub use validation::{validate_config, ValidationError};
