//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → rotating JSON file
//! ```
//!
//! Traces go to `~/.local/share/zellij/catalog-admin/catalog-admin-otlp.json`
//! (`/host/...` inside the sandbox), one OTLP document per line. The file
//! rotates at 10 MiB and keeps 3 numbered backups.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: size-rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{FileWriter, RotationPolicy};
pub use init::init_tracing;
