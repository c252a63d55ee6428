// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#![allow(unexpected_cfgs)]

//! # depplan - Application-Model Deployment Planner
//!
//! `depplan` is the core decision engine behind an application-model
//! deployment system: given an [`Application`]'s registered component
//! revisions, the previously deployed [`Deployment`] (or nothing, on a
//! first deploy), and a desired new `Deployment`, it computes an ordered,
//! per-component set of [`Action`]s — Create, Update, Delete, or None —
//! together with the rendered workload payloads and cross-component service
//! bindings an external executor needs to realize them.
//!
//! ## Overview
//!
//! This library provides:
//!
//! - Resolution of "floating" revision references against per-component
//!   revision histories ([`revisions`]).
//! - A pluggable [`renderers::Renderer`] registry mapping component kinds to
//!   workload-rendering strategies, with a built-in container renderer.
//! - Composable trait [`renderers::decorators`] that post-process rendered
//!   workloads (Dapr sidecar injection, annotation merging).
//! - Two-pass producer/consumer service [`bindings`] resolution, symmetric
//!   even across cyclic provide/depend graphs.
//! - The [`planner::compute_deployment_actions`] diff engine tying all of
//!   the above together into one pure, synchronous planning call.
//!
//! `depplan` itself performs no I/O, no persistence, and no retries (see
//! §1/§5 of the design document): it is a pure function from
//! `(Application, Option<Deployment>, Deployment)` to
//! `(BTreeMap<ComponentName, Action>, mutated Deployment)` or a typed
//! [`errors::PlanError`]. Renderers registered by the embedding service may
//! themselves perform I/O; the planner only sequences and cancels their
//! calls.
//!
//! ## Modules
//!
//! - [`model`] - the data model: revisions, applications, deployments, actions
//! - [`revisions`] - the revision resolver
//! - [`renderers`] - the renderer registry, built-in container renderer, and decorators
//! - [`bindings`] - the two-pass service binding resolver
//! - [`planner`] - the diff engine / entry point
//! - [`context`] - the per-call [`context::PlanContext`] (registry handle + cancellation)
//! - [`errors`] - the typed error taxonomy and wire error payload
//! - [`constants`] - well-known kind/trait-kind strings and wire error codes
//! - [`metrics`] - Prometheus counters/histograms for planning invocations
//!
//! ## Example
//!
//! ```rust
//! # use depplan::context::PlanContext;
//! # use depplan::model::{Application, ComponentHistory, ComponentProperties, ComponentRevision, Deployment, DeploymentComponent};
//! # use depplan::renderers::{container::ContainerRenderer, Registry};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let registry = Registry::builder()
//!     .register("radius.dev/Container@v1alpha1", ContainerRenderer::new())
//!     .build();
//! let ctx = PlanContext::new(registry);
//!
//! let mut app = Application::new("radius/myapp");
//! app.components.insert(
//!     "A".to_string(),
//!     ComponentHistory {
//!         current: "1".into(),
//!         history: vec![ComponentRevision {
//!             kind: "radius.dev/Container@v1alpha1".to_string(),
//!             revision: "1".into(),
//!             properties: ComponentProperties::default(),
//!         }],
//!     },
//! );
//!
//! let mut newer = Deployment::from_components(vec![DeploymentComponent::new("A", "")]);
//! let actions = depplan::planner::compute_deployment_actions(&ctx, &app, None, &mut newer)
//!     .await
//!     .unwrap();
//! assert_eq!(actions["A"].operation, depplan::model::Operation::Create);
//! # }
//! ```
//!
//! ## Features
//!
//! - **Deterministic** - same inputs and deterministic renderers always
//!   produce the same actions (no shared mutable state across calls).
//! - **Cancellable** - in-flight planning honors a [`tokio_util::sync::CancellationToken`].
//! - **Typed errors** - every failure category maps to one wire error code,
//!   never a parsed string.

pub mod bindings;
pub mod constants;
pub mod context;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod planner;
pub mod renderers;
pub mod revisions;
