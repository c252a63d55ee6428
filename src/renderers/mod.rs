// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The renderer registry (§4.2): maps a component `kind` string to a
//! [`Renderer`] capable of producing workload payloads and allocating
//! service bindings for that kind.
//!
//! # Example: configuring a registry
//!
//! ```rust
//! use depplan::renderers::{container::ContainerRenderer, Registry};
//!
//! let registry = Registry::builder()
//!     .register("radius.dev/Container@v1alpha1", ContainerRenderer::new())
//!     .build();
//! assert!(registry.get("radius.dev/Container@v1alpha1").is_some());
//! ```

pub mod container;
pub mod decorators;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::context::PlanContext;
use crate::errors::{BindingError, RegistryError, RenderError};
use crate::model::{Instantiated, ServiceDeclaration, WorkloadResource};

/// A pluggable strategy for one component kind: renders workloads and
/// allocates binding properties for services the kind provides.
///
/// Implementations must be `Send + Sync` so a `Registry` can be shared
/// across concurrent planning calls (§5). `render`/`allocate` are `async`
/// because real renderers may perform I/O (e.g. cluster lookups); they must
/// honor `ctx`'s cancellation and must not retain references to `ctx` past
/// return (§5).
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Renders one component instance into one or more opaque workload
    /// resources.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] describing the failure; the planner wraps
    /// it with the component name and aborts planning (§4.5).
    async fn render(
        &self,
        ctx: &PlanContext,
        instantiated: &Instantiated,
    ) -> Result<Vec<WorkloadResource>, RenderError>;

    /// Computes the binding properties a consumer needs to reach
    /// `service`, a service this renderer's component provides.
    ///
    /// # Errors
    ///
    /// Returns a [`BindingError::AllocateFailed`]-shaped cause string; the
    /// planner wraps it with provider/reference context (§4.3).
    async fn allocate(
        &self,
        ctx: &PlanContext,
        instantiated: &Instantiated,
        service: &ServiceDeclaration,
    ) -> Result<BTreeMap<String, Value>, String>;
}

/// An immutable, shareable map from component `kind` to the [`Renderer`]
/// that handles it.
///
/// Populated once at process start via [`Registry::builder`] and never
/// mutated afterwards (§4.2, §5): this is the crate's "configuration"
/// surface, the in-process analogue of a CLI/service's config loading.
#[derive(Clone, Default)]
pub struct Registry {
    renderers: Arc<BTreeMap<String, Arc<dyn Renderer>>>,
}

impl Registry {
    /// Starts building a new, empty registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up the renderer registered for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<Arc<dyn Renderer>> {
        self.renderers.get(kind).cloned()
    }

    /// Looks up the renderer registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if no renderer is registered for `kind`
    /// (§7: wire code `"UnknownKind"`).
    pub fn require(&self, kind: &str) -> Result<Arc<dyn Renderer>, RegistryError> {
        self.get(kind).ok_or_else(|| RegistryError {
            kind: kind.to_string(),
        })
    }
}

/// Builder for [`Registry`]; see the module-level example.
#[derive(Default)]
pub struct RegistryBuilder {
    renderers: BTreeMap<String, Arc<dyn Renderer>>,
}

impl RegistryBuilder {
    /// Registers `renderer` for `kind`. Registering the same `kind` twice
    /// replaces the previous renderer.
    #[must_use]
    pub fn register(mut self, kind: impl Into<String>, renderer: impl Renderer + 'static) -> Self {
        self.renderers.insert(kind.into(), Arc::new(renderer));
        self
    }

    /// Registers an already-shared renderer for `kind`, useful when the
    /// same renderer instance backs more than one kind string.
    #[must_use]
    pub fn register_shared(mut self, kind: impl Into<String>, renderer: Arc<dyn Renderer>) -> Self {
        self.renderers.insert(kind.into(), renderer);
        self
    }

    /// Finalizes the registry. After this call the set of registered kinds
    /// never changes (§5).
    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            renderers: Arc::new(self.renderers),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
