// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Prometheus metrics for the deployment planner.
//!
//! This module provides metrics collection with the namespace prefix
//! `depplan` (prometheus-safe version of the crate name), following the same
//! `LazyLock<CounterVec>`-registered-once pattern the teacher used for its
//! reconciliation metrics, applied here to planning invocations instead of
//! resource reconciliations.
//!
//! # Example
//!
//! ```rust,no_run
//! use depplan::metrics::PlanTimer;
//!
//! let timer = PlanTimer::start();
//! depplan::metrics::record_plan_success(&timer, 3);
//! ```

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metric Name Constants
// ============================================================================

/// Namespace prefix for all planner metrics (prometheus-safe)
const METRICS_NAMESPACE: &str = "depplan";

// ============================================================================
// Global Metrics Registry
// ============================================================================

/// Global Prometheus metrics registry.
///
/// All metrics are registered here; the embedding service exposes them via
/// whatever `/metrics` endpoint it hosts (§6: the planner itself has no HTTP
/// surface).
pub static METRICS_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

// ============================================================================
// Planning Metrics
// ============================================================================

/// Total number of `compute_deployment_actions` calls by outcome.
///
/// Labels:
/// - `status`: `success` or `error`
/// - `reason`: error code (§7) when `status = error`, else `"none"`
pub static PLANS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_plans_total"),
        "Total number of planning calls by outcome and, for errors, reason",
    );
    let counter = CounterVec::new(opts, &["status", "reason"]).unwrap();
    METRICS_REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

/// Duration of planning calls in seconds, labeled by outcome.
pub static PLAN_DURATION_SECONDS: LazyLock<HistogramVec> = LazyLock::new(|| {
    let opts = HistogramOpts::new(
        format!("{METRICS_NAMESPACE}_plan_duration_seconds"),
        "Duration of compute_deployment_actions calls in seconds",
    )
    .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]);
    let histogram = HistogramVec::new(opts, &["status"]).unwrap();
    METRICS_REGISTRY.register(Box::new(histogram.clone())).unwrap();
    histogram
});

/// Number of component actions produced by the most recent successful plan,
/// grouped by operation (§4.5).
///
/// Labels:
/// - `operation`: `create`, `update`, `delete`, or `none`
pub static ACTIONS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_actions_total"),
        "Total number of per-component actions produced, by operation",
    );
    let counter = CounterVec::new(opts, &["operation"]).unwrap();
    METRICS_REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

// ============================================================================
// Helper Functions
// ============================================================================

/// Wall-clock timer for one `compute_deployment_actions` call.
///
/// `Instant::now()` is captured behind this type (rather than called
/// directly at each call site) so `src/planner.rs` never calls
/// `Instant::now()` more than once per invocation.
pub struct PlanTimer(Instant);

impl PlanTimer {
    /// Starts timing a planning call.
    #[must_use]
    pub fn start() -> Self {
        PlanTimer(Instant::now())
    }

    /// Elapsed time since [`PlanTimer::start`].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Records a successful planning call: increments [`PLANS_TOTAL`] with
/// `status = "success"`, observes [`PLAN_DURATION_SECONDS`], and increments
/// [`ACTIONS_TOTAL`] with `operation = "none"` (actual per-operation counts
/// are recorded by the caller via [`record_action`]).
pub fn record_plan_success(timer: &PlanTimer, _action_count: usize) {
    PLANS_TOTAL.with_label_values(&["success", "none"]).inc();
    PLAN_DURATION_SECONDS
        .with_label_values(&["success"])
        .observe(timer.elapsed().as_secs_f64());
}

/// Records a failed planning call.
///
/// # Arguments
/// * `timer` - the call's [`PlanTimer`]
/// * `reason` - the [`crate::errors::PlanError::code`] that caused the failure
pub fn record_plan_failure(timer: &PlanTimer, reason: &str) {
    PLANS_TOTAL.with_label_values(&["error", reason]).inc();
    PLAN_DURATION_SECONDS
        .with_label_values(&["error"])
        .observe(timer.elapsed().as_secs_f64());
}

/// Records one emitted action's operation (§4.5).
pub fn record_action(operation: crate::model::Operation) {
    let label = match operation {
        crate::model::Operation::Create => "create",
        crate::model::Operation::Update => "update",
        crate::model::Operation::Delete => "delete",
        crate::model::Operation::None => "none",
    };
    ACTIONS_TOTAL.with_label_values(&[label]).inc();
}

/// Gathers and encodes all metrics in Prometheus text format.
///
/// # Errors
///
/// Returns an error if encoding the gathered metric families fails.
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = METRICS_REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_plan_success_increments_counters() {
        let timer = PlanTimer::start();
        record_plan_success(&timer, 2);

        let counter = PLANS_TOTAL.with_label_values(&["success", "none"]);
        assert!(counter.get() > 0.0);

        let histogram = PLAN_DURATION_SECONDS.with_label_values(&["success"]);
        assert!(histogram.get_sample_count() > 0);
    }

    #[test]
    fn record_plan_failure_labels_by_reason() {
        let timer = PlanTimer::start();
        record_plan_failure(&timer, "BindingFailed");

        let counter = PLANS_TOTAL.with_label_values(&["error", "BindingFailed"]);
        assert!(counter.get() > 0.0);
    }

    #[test]
    fn record_action_labels_by_operation() {
        record_action(crate::model::Operation::Create);
        let counter = ACTIONS_TOTAL.with_label_values(&["create"]);
        assert!(counter.get() > 0.0);
    }

    #[test]
    fn gather_metrics_includes_namespace() {
        let timer = PlanTimer::start();
        record_plan_success(&timer, 1);

        let text = gather_metrics().expect("gathering metrics should succeed");
        assert!(text.contains(METRICS_NAMESPACE), "metrics should contain namespace prefix");
        assert!(text.contains("plans_total"), "metrics should contain plan counter");
    }
}
