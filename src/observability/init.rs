//! Tracing initialization and subscriber setup.

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` resource attribute.
const SERVICE_NAME: &str = "Catalog Admin";

/// Instrumentation scope of every exported span.
const SCOPE_NAME: &str = "catalog-admin";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` from `trace_level` feeding
/// an OpenTelemetry layer that exports to the plugin's trace file.
///
/// Does nothing if the data directory cannot be created. Only the first
/// successful call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(
        crate::infrastructure::trace_file_path(),
        RotationPolicy::default(),
        resource,
        SCOPE_NAME,
    );

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(otel_layer);

    let _ = subscriber.try_init();
}

/// Filter from `config.trace_level`, falling back to `info` when the
/// directive does not parse.
fn env_filter(config: &Config) -> EnvFilter {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(env_filter(&Config::default()).to_string(), "info");
    }

    #[test]
    fn filter_uses_configured_level() {
        let config = Config {
            trace_level: Some("catalog_admin=debug".to_string()),
            ..Config::default()
        };
        assert_eq!(env_filter(&config).to_string(), "catalog_admin=debug");
    }

    #[test]
    fn invalid_level_falls_back() {
        let config = Config {
            trace_level: Some("catalog_admin=loud".to_string()),
            ..Config::default()
        };
        assert_eq!(env_filter(&config).to_string(), "info");
    }
}
