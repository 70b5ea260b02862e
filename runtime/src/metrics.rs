//! Store metrics.
//!
//! Counters and histograms are emitted through the `metrics` facade. Nothing
//! is exported unless the host process installs a recorder, in which case
//! [`describe_metrics`] should be called once to register descriptions.

use metrics::{describe_counter, describe_histogram};
use std::time::Duration;

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Total actions reduced by a store, feedback actions included.
pub const ACTIONS_TOTAL: &str = "store_actions_total";

/// Effects executed, labelled by `type`.
pub const EFFECTS_EXECUTED_TOTAL: &str = "store_effects_executed_total";

/// Sends aborted because the feedback loop ran past its limit.
pub const FEEDBACK_LIMIT_EXCEEDED_TOTAL: &str = "store_feedback_limit_exceeded_total";

/// Reducer execution time.
pub const REDUCER_DURATION_SECONDS: &str = "store_reducer_duration_seconds";

/// Register descriptions for every store metric.
pub fn describe_metrics() {
    describe_counter!(
        ACTIONS_TOTAL,
        "Total number of actions reduced, including dispatched feedback actions"
    );
    describe_counter!(
        EFFECTS_EXECUTED_TOTAL,
        "Total number of effects executed, by effect type"
    );
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED_TOTAL,
        "Total number of sends aborted by the feedback limit"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time taken by a single reducer call"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record one reducer call.
    pub fn record_action(duration: Duration) {
        counter!(ACTIONS_TOTAL).increment(1);
        histogram!(REDUCER_DURATION_SECONDS).record(duration.as_secs_f64());
    }

    /// Record one executed effect of the given kind.
    pub fn record_effect(kind: &'static str) {
        counter!(EFFECTS_EXECUTED_TOTAL, "type" => kind).increment(1);
    }

    /// Record a send aborted by the feedback limit.
    pub fn record_feedback_limit() {
        counter!(FEEDBACK_LIMIT_EXCEEDED_TOTAL).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_without_recorder_is_noop() {
        describe_metrics();
        StoreMetrics::record_action(Duration::from_micros(5));
        StoreMetrics::record_effect("dispatch");
        StoreMetrics::record_feedback_limit();
    }
}
