// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The ambient, non-persisted [`PlanContext`] carried through one planning
//! call: the renderer registry and a cancellation signal.
//!
//! A single `Arc`-friendly handle passed to every function that needs
//! shared, read-only, process-lifetime state — but it carries no business
//! data and no I/O clients of its own, since the planner itself performs no
//! I/O (§5).

use tokio_util::sync::CancellationToken;

use crate::errors::Cancelled;
use crate::renderers::Registry;

/// Shared, per-call context passed to the planner entry point and threaded
/// through to every [`crate::renderers::Renderer`] call.
///
/// Not part of the persisted data model (§3) and not serializable: it is
/// constructed fresh by the embedding service for each planning call (§2's
/// expanded control flow).
#[derive(Clone)]
pub struct PlanContext {
    /// The renderer registry configured at process start (§4.2).
    registry: Registry,
    /// Cancelled when the embedding service wants an in-flight planning
    /// call to stop (§5).
    cancellation: CancellationToken,
}

impl PlanContext {
    /// Builds a new context from a registry, with a fresh, independent
    /// cancellation token.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        PlanContext {
            registry,
            cancellation: CancellationToken::new(),
        }
    }

    /// Builds a new context sharing `cancellation` with the caller, so the
    /// caller can cancel the in-flight planning call from outside (§5).
    #[must_use]
    pub fn with_cancellation(registry: Registry, cancellation: CancellationToken) -> Self {
        PlanContext {
            registry,
            cancellation,
        }
    }

    /// The configured renderer registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A child token, cancelled whenever this context's cancellation is,
    /// suitable for handing to one renderer call without letting it retain
    /// the context itself past return (§5).
    #[must_use]
    pub fn child_cancellation(&self) -> CancellationToken {
        self.cancellation.child_token()
    }

    /// Returns [`Cancelled`] if this context has been cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if cancellation was requested.
    pub fn check_cancelled(&self) -> Result<(), Cancelled> {
        if self.cancellation.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Requests cancellation of this context and all its children.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
