//! OpenTelemetry tracer provider backed by a file span exporter.
//!
//! The plugin sandbox has no network, so finished spans are written as OTLP
//! JSON lines to a rotating file instead of being sent to a collector.

use super::file_writer::{FileWriter, RotationPolicy};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one OTLP JSON line.
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(
        file_path: PathBuf,
        policy: RotationPolicy,
        resource: Resource,
        scope_name: &'static str,
    ) -> Self {
        Self {
            writer: FileWriter::new(file_path, policy),
            formatter: SpanFormatter::new(resource, scope_name),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider that exports every span synchronously to
/// `file_path`, rotating per `policy`.
pub fn create_tracer_provider(
    file_path: PathBuf,
    policy: RotationPolicy,
    resource: Resource,
    scope_name: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, policy, resource.clone(), scope_name);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use opentelemetry::KeyValue;

    fn exporter(path: PathBuf) -> FileSpanExporter {
        FileSpanExporter::new(
            path,
            RotationPolicy::default(),
            Resource::new(vec![KeyValue::new("service.name", "test")]),
            "test-scope",
        )
    }

    #[test]
    fn export_writes_one_json_line_per_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let mut exporter = exporter(path.clone());

        assert!(matches!(exporter.export(vec![]).now_or_never(), Some(Ok(()))));
        assert!(matches!(exporter.export(vec![]).now_or_never(), Some(Ok(()))));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let doc: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], "test-scope");
    }

    #[test]
    fn export_after_shutdown_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let mut exporter = exporter(path.clone());

        exporter.shutdown();

        assert!(matches!(exporter.export(vec![]).now_or_never(), Some(Err(_))));
        assert!(!path.exists());
    }
}
