//! Telemetry helpers for applications embedding `chart-dataset`.
//!
//! Dataset growth is traced at `trace` level and rejected writes at `warn`.
//! Nothing is installed implicitly: call `init_default_tracing` or wire your
//! own `tracing` subscriber.

/// Default directive used when `RUST_LOG` is absent or unparsable.
pub const DEFAULT_FILTER: &str = "chart_dataset=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host application
/// already owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
