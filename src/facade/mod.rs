//! Generic logging facade used by the message bus.
//!
//! Bus components log through `Arc<dyn Log>` handles obtained from a
//! `LogRegistry`. Which implementation sits behind those handles is decided
//! by whatever `LogFactory` the host installs.
//!
//! # Data Flow
//! ```text
//! component
//!     → LogRegistry::get(name)
//!     → active LogFactory::get(name)
//!     → Arc<dyn Log>
//!     → info / warn_lazy / error_format ...
//! ```

mod level;
mod log;
mod registry;

pub use level::LogLevel;
pub use log::{Cause, FormatProvider, InvariantFormat, Log, MessageProvider, NoOpLog};
pub use registry::{global, LogFactory, LogRegistry, NoOpLogFactory};
