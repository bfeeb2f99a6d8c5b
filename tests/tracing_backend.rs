//! TracingLogger output as observed by a tracing-subscriber layer.

use std::cell::Cell;
use std::sync::Arc;

use bus_log_adapter::adapter::install;
use bus_log_adapter::backend::{EventLevel, StructuredLogger, TracingLogger};
use bus_log_adapter::facade::{Log, LogRegistry};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;

mod common;

use common::CaptureLayer;

/// Run `f` with a scoped subscriber that keeps INFO and above.
fn capture<F: FnOnce()>(f: F) -> CaptureLayer {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(layer.clone());
    tracing::subscriber::with_default(subscriber, f);
    layer
}

#[test]
fn test_object_write_becomes_info_event() {
    let layer = capture(|| {
        let logger = TracingLogger::new().for_context("name", json!("svc"));
        logger.write(EventLevel::Information, "{@obj}", &[json!("hello")]);
    });

    let events = layer.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::INFO);
    assert_eq!(event.field("message"), "\"hello\"");
    assert_eq!(event.field("severity"), "Information");
    assert_eq!(event.field("template"), "{@obj}");
    assert_eq!(event.properties(), json!({ "name": "svc", "obj": "hello" }));
}

#[test]
fn test_fatal_with_error_is_error_event() {
    let layer = capture(|| {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "broker gone");
        TracingLogger::new().write_error(
            EventLevel::Fatal,
            &cause,
            "{Bus} stopped",
            &[json!("main")],
        );
    });

    let events = layer.events();
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field("severity"), "Fatal");
    assert_eq!(events[0].field("message"), "main stopped");
    assert!(events[0].field("error").contains("broker gone"));
}

#[test]
fn test_enabled_follows_subscriber_filter() {
    let enabled = Cell::new((true, false));
    capture(|| {
        let logger = TracingLogger::new();
        enabled.set((
            logger.is_enabled(EventLevel::Debug),
            logger.is_enabled(EventLevel::Warning),
        ));
    });

    assert_eq!(enabled.get(), (false, true));
}

#[test]
fn test_nested_context_accumulates() {
    let layer = capture(|| {
        let logger = TracingLogger::new()
            .for_context("name", json!("svc"))
            .for_context("endpoint", json!("rabbitmq://localhost/orders"));
        logger.write(EventLevel::Warning, "slow consumer", &[]);
    });

    let events = layer.events();
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(
        events[0].properties(),
        json!({ "name": "svc", "endpoint": "rabbitmq://localhost/orders" })
    );
}

#[test]
fn test_full_stack_through_registry() {
    let provider_calls = Cell::new(0);
    let layer = capture(|| {
        let registry = LogRegistry::new();
        let base: Arc<dyn StructuredLogger> = Arc::new(TracingLogger::new());
        install(&registry, Some(base));

        let log = registry.get("orders.consumer");
        log.debug_lazy(&|| {
            provider_calls.set(provider_calls.get() + 1);
            json!("not built")
        });
        log.info_format("{Count} messages", &[json!(3)]);
    });

    assert_eq!(provider_calls.get(), 0);
    let events = layer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("message"), "3 messages");
    assert_eq!(events[0].properties()["name"], json!("orders.consumer"));
}

#[test]
fn test_write_below_filter_emits_nothing() {
    let layer = capture(|| {
        let logger = TracingLogger::new().for_context("name", json!("svc"));
        let large: Vec<u32> = (0..10_000).collect();
        logger.write(EventLevel::Debug, "{@obj}", &[json!(large)]);
        logger.write(EventLevel::Verbose, "{Rows} rows", &[json!(10_000)]);
        logger.write(EventLevel::Information, "{Rows} rows", &[json!(10_000)]);
    });

    let events = layer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("message"), "10000 rows");
}
