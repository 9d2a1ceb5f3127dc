//! Telemetry helpers for applications building charts with `chartjs-config`.
//!
//! The crate only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts either call `init_default_tracing` or wire their own.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`
/// (falling back to `info`) when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
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
