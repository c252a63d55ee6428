// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Renderer inputs/outputs: [`Instantiated`] (what a renderer is asked to
//! render) and [`WorkloadResource`] (what it hands back).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::action::ServiceBinding;
use super::revision::{ComponentRevision, Trait};

/// One opaque, executor-ready resource produced by a [`crate::renderers::Renderer`].
///
/// The planner never interprets `resource`'s internal shape except through a
/// decorator explicitly built to recognize it (§4.2, §9: "never downcast
/// based on component kind").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadResource {
    /// Steers downstream executors and decorators, e.g. `"kubernetes"`,
    /// `"arm"`, `"dapr-component"`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// A locally-unique identifier for this resource within the component's
    /// rendered output.
    pub local_id: String,
    /// The opaque, renderer-specific payload.
    pub resource: Value,
}

impl WorkloadResource {
    /// Builds a new workload resource envelope.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, local_id: impl Into<String>, resource: Value) -> Self {
        WorkloadResource {
            resource_type: resource_type.into(),
            local_id: local_id.into(),
            resource,
        }
    }
}

/// What a [`crate::renderers::Renderer`] is asked to render or allocate a
/// binding for: one concrete instantiation of a component, plus whatever
/// service bindings its dependencies already resolved to (populated in pass
/// 1 of §4.3 before any `render` call in pass 2).
#[derive(Debug, Clone, PartialEq)]
pub struct Instantiated {
    /// The owning application's name.
    pub application_name: String,
    /// The component's name within the application.
    pub component_name: String,
    /// The resolved component definition being instantiated.
    pub workload: ComponentRevision,
    /// Traits attached to this component's definition.
    pub traits: Vec<Trait>,
    /// Service bindings already resolved for this component's `dependsOn`
    /// clauses, keyed by reference name.
    pub binding_values: BTreeMap<String, ServiceBinding>,
}
