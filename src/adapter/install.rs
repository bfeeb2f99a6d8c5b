//! Installing the adapter as a bus's logging implementation.

use std::sync::Arc;

use crate::adapter::factory::BackendLogFactory;
use crate::backend::StructuredLogger;
use crate::error::Error;
use crate::facade::LogRegistry;

/// The host-side bus configuration surface the adapter plugs into.
///
/// The bus decides which registry its components log through; the adapter
/// only needs to reach it.
pub trait BusConfigurator {
    /// The registry this bus's components get their logs from.
    fn log_registry(&self) -> &LogRegistry;
}

/// Make a `BackendLogFactory` over `base_logger` the registry's active
/// factory.
///
/// With no `base_logger`, the process default structured logger is resolved
/// each time a log is requested.
pub fn install(registry: &LogRegistry, base_logger: Option<Arc<dyn StructuredLogger>>) {
    install_with(registry, BackendLogFactory::new(base_logger));
}

/// Make a pre-built factory the registry's active factory.
pub fn install_with(registry: &LogRegistry, factory: BackendLogFactory) {
    tracing::debug!(factory = ?factory, "installing structured bus logging");
    registry.use_factory(factory);
}

/// Configure a bus to log through the structured backend.
///
/// Fails with `Error::MissingArgument` when no configurator is given.
pub fn use_backend_logging<C>(
    configurator: Option<&C>,
    base_logger: Option<Arc<dyn StructuredLogger>>,
) -> Result<(), Error>
where
    C: BusConfigurator + ?Sized,
{
    let configurator = configurator.ok_or(Error::MissingArgument("configurator"))?;
    install(configurator.log_registry(), base_logger);
    Ok(())
}

/// `use_backend_logging` as a method on any configurator.
pub trait BackendLoggingExt: BusConfigurator {
    fn use_backend_logging(&self, base_logger: Option<Arc<dyn StructuredLogger>>) {
        install(self.log_registry(), base_logger);
    }
}

impl<C: BusConfigurator + ?Sized> BackendLoggingExt for C {}
