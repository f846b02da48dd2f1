//! OpenTelemetry tracer provider exporting into a [`SpanBuffer`].
//!
//! Every ended span is formatted as an OTLP JSON document and pushed onto
//! the buffer as a single line. The simple (unbatched) processor is used, so
//! the line is available as soon as the span closes.

use super::span_buffer::SpanBuffer;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::sync::atomic::{AtomicBool, Ordering};

struct BufferSpanExporter {
    buffer: SpanBuffer,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl BufferSpanExporter {
    const fn new(buffer: SpanBuffer, resource: Resource) -> Self {
        Self {
            buffer,
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for BufferSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        self.buffer.push(self.formatter.format_batch(&batch).to_string());
        Box::pin(std::future::ready(Ok(())))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Resource is fixed at construction.
    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for BufferSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferSpanExporter")
            .field("buffered", &self.buffer.len())
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider whose spans end up in `buffer`.
pub fn create_tracer_provider(buffer: SpanBuffer, resource: Resource) -> TracerProvider {
    let exporter = BufferSpanExporter::new(buffer, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn ended_spans_land_in_buffer() {
        let buffer = SpanBuffer::default();
        let resource = Resource::new(vec![KeyValue::new("service.name", "portfolio-ui")]);
        let provider = create_tracer_provider(buffer.clone(), resource);

        provider.tracer("test").in_span("handle_event", |_cx| {});

        let lines = buffer.drain();
        assert_eq!(lines.len(), 1);
        let doc: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(
            doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"],
            "handle_event"
        );
    }
}
