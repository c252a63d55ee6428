// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared test setup for the integration suite.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test-scoped `tracing` subscriber so `cargo test -- --nocapture`
/// shows the planner's `debug`/`info` spans alongside test output. Safe to
/// call from every test file; only the first call takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
