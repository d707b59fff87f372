//! Telemetry metric name constants.
//!
//! Centralised metric names for evalboard operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `evalboard_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `status` — outcome: "ok", "http_error", "network_error" or "parse_error"

/// Total fetches issued against the results endpoint.
///
/// Labels: `status`.
pub const FETCHES_TOTAL: &str = "evalboard_fetches_total";

/// Fetch duration in seconds, from request start to decoded body.
pub const FETCH_DURATION_SECONDS: &str = "evalboard_fetch_duration_seconds";

/// Responses discarded because a newer fetch had started.
pub const STALE_RESPONSES_TOTAL: &str = "evalboard_stale_responses_total";

/// Triggers ignored because a fetch was already in flight.
pub const BUSY_TRIGGERS_TOTAL: &str = "evalboard_busy_triggers_total";
