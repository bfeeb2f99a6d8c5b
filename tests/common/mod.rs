//! Shared fakes for integration testing.

#![allow(dead_code)]

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bus_log_adapter::backend::{EventLevel, StructuredLogger};
use bus_log_adapter::facade::LogRegistry;
use bus_log_adapter::BusConfigurator;
use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

/// One write received by a `FakeLogger`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: EventLevel,
    pub template: String,
    pub args: Vec<Value>,
    pub error: Option<String>,
    pub context: Vec<(String, Value)>,
}

/// Structured logger that records writes instead of emitting them.
///
/// Loggers derived with `for_context` share the parent's record list and
/// derivation counter.
pub struct FakeLogger {
    min: EventLevel,
    context: Vec<(String, Value)>,
    records: Arc<Mutex<Vec<Record>>>,
    derived: Arc<AtomicUsize>,
}

impl FakeLogger {
    /// A logger that reports levels at or above `min` as enabled.
    pub fn at(min: EventLevel) -> Arc<Self> {
        Arc::new(Self {
            min,
            context: Vec::new(),
            records: Arc::new(Mutex::new(Vec::new())),
            derived: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// How many times `for_context` was called on this logger or its children.
    pub fn derived(&self) -> usize {
        self.derived.load(Ordering::SeqCst)
    }

    fn push(&self, level: EventLevel, error: Option<String>, template: &str, args: &[Value]) {
        self.records.lock().unwrap().push(Record {
            level,
            template: template.to_string(),
            args: args.to_vec(),
            error,
            context: self.context.clone(),
        });
    }
}

impl StructuredLogger for FakeLogger {
    fn write(&self, level: EventLevel, template: &str, args: &[Value]) {
        self.push(level, None, template, args);
    }

    fn write_error(
        &self,
        level: EventLevel,
        error: &(dyn StdError + 'static),
        template: &str,
        args: &[Value],
    ) {
        self.push(level, Some(error.to_string()), template, args);
    }

    fn is_enabled(&self, level: EventLevel) -> bool {
        level >= self.min
    }

    fn for_context(&self, key: &str, value: Value) -> Arc<dyn StructuredLogger> {
        self.derived.fetch_add(1, Ordering::SeqCst);
        let mut context = self.context.clone();
        context.push((key.to_string(), value));
        Arc::new(FakeLogger {
            min: self.min,
            context,
            records: Arc::clone(&self.records),
            derived: Arc::clone(&self.derived),
        })
    }
}

/// Minimal bus configuration owning its own registry.
#[derive(Debug, Default)]
pub struct TestBus {
    pub registry: LogRegistry,
}

impl BusConfigurator for TestBus {
    fn log_registry(&self) -> &LogRegistry {
        &self.registry
    }
}

/// A `tracing` event as seen by `CaptureLayer`.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: tracing::Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    /// The `properties` field parsed back into JSON.
    pub fn properties(&self) -> Value {
        serde_json::from_str(self.field("properties")).unwrap()
    }
}

/// Layer that stores every event it sees.
#[derive(Clone, Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}
