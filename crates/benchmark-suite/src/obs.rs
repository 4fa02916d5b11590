//! Structured events for selection and export.
//!
//! Events are emitted at `info!` level with an `event` field naming them
//! (`selection.started`, `selection.finished`, `export.written`). Filter with
//! `RUST_LOG`; see [`crate::telemetry::init_tracing`].

use tracing::{debug, info};

/// RAII guard that enters an export-scoped tracing span.
pub struct ExportSpan {
    _span: tracing::span::EnteredSpan,
}

impl ExportSpan {
    /// Create and enter a span tagged with the export name.
    pub fn enter(export_name: &str) -> Self {
        let span = tracing::info_span!("benchmark_suite.export", export = %export_name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: selection started over `total_run_configs` inputs.
///
/// `target_device_ids` and `matcher_count` are `None` when the criterion is
/// absent.
pub fn emit_selection_started(
    total_run_configs: usize,
    target_device_ids: Option<usize>,
    matcher_count: Option<usize>,
) {
    info!(
        event = "selection.started",
        total_run_configs = total_run_configs,
        target_device_ids = ?target_device_ids,
        matchers = ?matcher_count,
    );
}

/// Emit event: selection finished.
pub fn emit_selection_finished(device_groups: usize, retained: usize, dropped: usize) {
    info!(
        event = "selection.finished",
        device_groups = device_groups,
        retained = retained,
        dropped = dropped,
    );
}

/// Emit event: one device group with its run config count (debug level).
pub fn emit_device_group(device_name: &str, run_configs: usize) {
    debug!(event = "selection.device_group", device_name = %device_name, run_configs = run_configs);
}

/// Emit event: export document written to `destination`.
pub fn emit_export_written(destination: &str, devices: usize, bytes: usize) {
    info!(
        event = "export.written",
        destination = %destination,
        devices = devices,
        bytes = bytes,
    );
}
