//! OpenTelemetry-based observability with in-memory trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → BufferSpanExporter → SpanBuffer
//! ```
//!
//! The host drains the [`SpanBuffer`] whenever it likes; every line is a
//! complete OTLP JSON document.
//!
//! # Configuration
//!
//! The filter directive comes from `Config::trace_level` and defaults to
//! `"info"`. Handler spans are emitted at debug level, per-render spans at
//! trace level.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with buffer export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`span_buffer`]: Bounded line buffer

mod init;
mod span_buffer;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME};
pub use span_buffer::{SpanBuffer, DEFAULT_CAPACITY};
