//! Log subscriber setup for the hyperplanner binary
//!
//! Logs go to stderr so `query` output on stdout stays machine-readable.
//! `RUST_LOG` overrides the default level. With the `telemetry` feature and
//! `--otel`, spans are also exported over OTLP; the exporter reads
//! `OTEL_EXPORTER_OTLP_ENDPOINT` and `OTEL_SERVICE_NAME` itself.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to debug level when RUST_LOG is unset
    pub debug: bool,
    /// Export spans over OTLP (no-op without the `telemetry` feature)
    pub otel: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact();
    let registry = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(console);

    #[cfg(feature = "telemetry")]
    let registry = registry
        .with(otlp_tracer(config)?.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer)));

    registry.try_init().map_err(|err| anyhow!(err))?;

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        tracing::warn!("--otel ignored: built without the `telemetry` feature");
    }

    Ok(())
}

#[cfg(feature = "telemetry")]
fn otlp_tracer(config: &TracingConfig) -> Result<Option<opentelemetry_sdk::trace::Tracer>> {
    use opentelemetry::trace::TracerProvider as _;

    if !config.otel {
        return Ok(None);
    }

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;
    let provider = opentelemetry_sdk::trace::TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .build();
    let tracer = provider.tracer("hyperplanner");
    // The global handle keeps the batch exporter alive until shutdown_otel.
    let _ = opentelemetry::global::set_tracer_provider(provider);

    Ok(Some(tracer))
}

/// Flush pending spans before exit.
pub fn shutdown_otel() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
