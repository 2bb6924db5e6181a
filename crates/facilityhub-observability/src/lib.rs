//! FacilityHub Observability
//!
//! - Tracing to the console, rolling log files and OpenTelemetry
//! - HTTP request logging
//! - Prometheus metrics, including navigation resolution counters
//!
//! Everything beyond console logging sits behind the `observability` feature
//! (on by default). At runtime `OBSERVABILITY_ENABLED=false` turns it off as
//! well, in which case [`init_basic_console_logging`] is used instead.
//!
//! ```no_run
//! use facilityhub_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_app, metrics_middleware,
    track_access_denied, track_navigation_served, track_profile_lookup,
};

/// Log filter for our crates at `level`, with noisy dependencies held at warn.
pub(crate) fn default_filter(level: &str) -> String {
    format!(
        "facilityhub={level},facilityhub_nav={level},facilityhub_db={level},\
         facilityhub_client={level},facilityhub_cli={level},\
         tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn"
    )
}

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Stands in for the Prometheus handle; no value exists without the
    /// exporter, so [`init_metrics`] always returns `None`.
    #[derive(Debug, Clone)]
    pub enum PrometheusHandle {}

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() {
        super::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(handle: PrometheusHandle) -> Router {
        match handle {}
    }

    pub fn track_navigation_served(_tier: &str, _degraded: bool) {}
    pub fn track_profile_lookup(_outcome: &str) {}
    pub fn track_access_denied(_reason: &str) {}

}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
