// Telemetry module for structured logging, per-pipeline error logs and metrics

use crate::config::ObservabilityConfig;
use anyhow::Result;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log target of the client search pipeline
pub const CLIENT_LOG_TARGET: &str = "galac::clientes";

/// Log target of the invoice search pipeline
pub const INVOICE_LOG_TARGET: &str = "galac::facturas";

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Initialize structured logging
///
/// Sets up:
/// - a console layer (JSON or plain text) filtered by `RUST_LOG` or `log_level`
/// - one append-only file per search pipeline under `error_log_dir`, receiving
///   every event of that pipeline's target
///
/// When the log directory cannot be used the file sinks are skipped and a
/// warning is written to the console. The returned guards flush the file
/// writers on drop and must be held for the lifetime of the process.
pub fn init_logging(config: &ObservabilityConfig) -> Result<Vec<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {}", e))?;

    let console_layer: BoxedLayer = if config.json_logs {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer().with_target(true).with_filter(env_filter).boxed()
    };

    let mut layers = vec![console_layer];
    let mut guards = Vec::new();
    let mut sink_error = None;

    if let Some(dir) = &config.error_log_dir {
        let sinks = [
            (CLIENT_LOG_TARGET, config.client_log_file.as_str()),
            (INVOICE_LOG_TARGET, config.invoice_log_file.as_str()),
        ];
        for (target, file_name) in sinks {
            match pipeline_file_layer(Path::new(dir), file_name, target) {
                Ok((layer, guard)) => {
                    layers.push(layer);
                    guards.push(guard);
                }
                Err(e) => {
                    sink_error = Some(format!("{file_name}: {e}"));
                    guards.clear();
                    layers.truncate(1);
                    break;
                }
            }
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    if let Some(error) = sink_error {
        tracing::warn!(
            error = %error,
            "Could not open the error log directory, logging to console only"
        );
    }

    tracing::info!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        file_sinks = guards.len(),
        "Structured logging initialized"
    );

    Ok(guards)
}

/// Append-only file layer receiving only events of `target`.
///
/// Spans of every target pass the filter so each line carries the enclosing
/// `request{request_id=..}` context.
fn pipeline_file_layer(
    dir: &Path,
    file_name: &str,
    target: &'static str,
) -> Result<(BoxedLayer, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter_fn(move |meta| meta.is_span() || meta.target() == target))
        .boxed();

    Ok((layer, guard))
}

/// Install the Prometheus recorder and describe the service metrics
///
/// The returned handle renders the exposition text for `GET /metrics`.
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    describe_counter!(
        "galac_requests_total",
        "Search requests by endpoint and outcome"
    );
    describe_histogram!(
        "galac_store_query_duration_seconds",
        "Duration of store queries in seconds"
    );

    tracing::info!("Prometheus metrics recorder initialized");
    Ok(handle)
}

/// Count a finished search request
#[inline]
pub fn record_request(endpoint: &'static str, outcome: &'static str) {
    counter!("galac_requests_total", "endpoint" => endpoint, "outcome" => outcome).increment(1);
}

/// Record how long a store query took
#[inline]
pub fn record_query_duration(query: &'static str, duration_seconds: f64) {
    histogram!("galac_store_query_duration_seconds", "query" => query).record(duration_seconds);
}

/// Correlation id derived from the local time: `YYYYMMDDhhmmss` plus milliseconds.
pub fn new_request_id() -> String {
    chrono::Local::now().format("%Y%m%d%H%M%S%3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_shape() {
        let id = new_request_id();
        assert_eq!(id.len(), 17);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert!(id.starts_with('2'));
    }

    #[test]
    fn test_pipeline_file_layer_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = pipeline_file_layer(dir.path(), "errores_facturas.log", INVOICE_LOG_TARGET);
        assert!(result.is_ok());
        assert!(dir.path().join("errores_facturas.log").exists());
    }

    #[test]
    fn test_pipeline_file_layer_fails_on_unusable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let result = pipeline_file_layer(&blocker, "errores_clientes.log", CLIENT_LOG_TARGET);
        assert!(result.is_err());
    }

    #[test]
    fn test_pipeline_file_lines_carry_request_id() {
        let dir = tempfile::tempdir().unwrap();
        let (layer, guard) =
            pipeline_file_layer(dir.path(), "errores_facturas.log", INVOICE_LOG_TARGET).unwrap();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("request", request_id = %"20261019120000123");
            let _entered = span.enter();
            tracing::error!(target: INVOICE_LOG_TARGET, error = "boom", "{}", "count failed");
            tracing::error!(target: CLIENT_LOG_TARGET, "client pipeline event");
        });
        drop(guard);

        let contents = std::fs::read_to_string(dir.path().join("errores_facturas.log")).unwrap();
        assert!(contents.contains("count failed"));
        assert!(contents.contains("request_id=20261019120000123"));
        assert!(!contents.contains("client pipeline event"));
    }

    #[test]
    fn test_metrics_recording() {
        // No recorder installed: calls must be no-ops
        record_request("facturas", "ok");
        record_query_duration("invoice_count", 0.01);
    }
}
