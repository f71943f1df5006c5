//! Tracing subscriber setup.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when the configuration names none.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (default `"info"`). With a
/// `trace_dir`, spans are exported as OTLP JSON to `folio-otlp.json` inside it;
/// otherwise events are formatted to stderr.
///
/// Observability is optional: if the trace directory cannot be created nothing
/// is installed, and calling this more than once keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

    let otel_layer = match &config.trace_dir {
        Some(dir) => {
            if std::fs::create_dir_all(dir).is_err() {
                return;
            }
            let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "folio")]);
            let provider = exporter::file_tracer_provider(paths::trace_file(dir), resource);
            Some(OpenTelemetryLayer::new(provider.tracer("folio")))
        }
        None => None,
    };

    let fmt_layer = otel_layer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .with(fmt_layer)
        .try_init();
}
