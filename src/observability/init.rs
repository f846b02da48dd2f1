//! Tracing initialization and subscriber setup.
//!
//! Configures the global tracing subscriber with OpenTelemetry integration,
//! wiring `tracing` macros through to a [`SpanBuffer`].

use super::span_buffer::SpanBuffer;
use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in every exported document.
pub const SERVICE_NAME: &str = "portfolio-ui";

/// Installs the global tracing subscriber.
///
/// Spans are filtered by `config.trace_level` (default `"info"`), exported
/// through OpenTelemetry and buffered as OTLP JSON lines. Returns the buffer
/// to drain, or `None` if a global subscriber was already installed.
///
/// # Example
///
/// ```rust
/// use portfolio_ui::observability::init_tracing;
/// use portfolio_ui::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// if let Some(buffer) = init_tracing(&config) {
///     tracing::debug_span!("startup").in_scope(|| {});
///     for line in buffer.drain() {
///         assert!(line.starts_with('{'));
///     }
/// }
/// ```
pub fn init_tracing(config: &Config) -> Option<SpanBuffer> {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);

    let buffer = SpanBuffer::default();
    let provider = tracer::create_tracer_provider(buffer.clone(), resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    subscriber.try_init().ok().map(|()| buffer)
}
