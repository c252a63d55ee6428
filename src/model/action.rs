// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The [`Action`] model: the planner's one output directive per component.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deployment::DeploymentComponent;
use super::revision::{ComponentRevision, Trait};

/// The operation the executor should perform for one component.
///
/// Decided purely from presence/absence in the old and new deployments and
/// (when present in both) whether the resolved revision changed — see the
/// decision table in §4.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// No change: the component is present, unchanged, in both deployments.
    None,
    /// The component is newly present in the new deployment.
    Create,
    /// The component is present in both deployments at different revisions.
    Update,
    /// The component is absent from the new deployment but was present in
    /// the old one.
    Delete,
}

/// Connection information threaded from a provider component to a consumer
/// component, keyed by the consumer's [`super::revision::ServiceReference::name`]
/// on the owning [`Action::service_bindings`] map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBinding {
    /// The service reference name this binding satisfies; equal to the
    /// consumer's `ServiceReference::name`.
    pub name: String,
    /// The service kind being bound.
    pub kind: String,
    /// The name of the component that provides this service.
    pub provider: String,
    /// The binding properties returned by the provider's renderer
    /// `allocate` call.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

/// The planner's per-component output: what to do, and everything the
/// executor needs to do it.
///
/// For [`Operation::Delete`], `definition`/`instantiation` are `None` and
/// the `previous_*` fields are `Some`; for [`Operation::Create`] the
/// reverse; for [`Operation::Update`]/[`Operation::None`] both sides are
/// populated (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// What the executor should do.
    pub operation: Operation,
    /// The name of the component this action is for.
    pub component_name: String,
    /// The resolved definition in the new deployment, absent for `Delete`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<ComponentRevision>,
    /// The instantiation from the new deployment, absent for `Delete`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instantiation: Option<DeploymentComponent>,
    /// The resolved definition from the old deployment, absent for `Create`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_definition: Option<ComponentRevision>,
    /// The instantiation from the old deployment, absent for `Create`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_instantiation: Option<DeploymentComponent>,
    /// The first rendered workload resource, present for `Create`/`Update`/`None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<Value>,
    /// All rendered workload resources for this component, in render order.
    /// `workload` above is always `resources[0].resource` when non-empty;
    /// this full list carries whatever additional resources a renderer
    /// produced (§4.5), which the wire shape in §6 does not itself name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<super::workload::WorkloadResource>,
    /// The component's traits, forwarded verbatim from its definition (§4.4).
    #[serde(default)]
    pub traits: Vec<Trait>,
    /// Service bindings satisfying this component's `dependsOn` clauses,
    /// keyed by [`super::revision::ServiceReference::name`].
    #[serde(default)]
    pub service_bindings: BTreeMap<String, ServiceBinding>,
}

impl Action {
    /// Builds a `Create` action.
    #[must_use]
    pub fn create(
        component_name: impl Into<String>,
        definition: ComponentRevision,
        instantiation: DeploymentComponent,
        traits: Vec<Trait>,
    ) -> Self {
        Action {
            operation: Operation::Create,
            component_name: component_name.into(),
            definition: Some(definition),
            instantiation: Some(instantiation),
            previous_definition: None,
            previous_instantiation: None,
            workload: None,
            resources: Vec::new(),
            traits,
            service_bindings: BTreeMap::new(),
        }
    }

    /// Builds an `Update`/`None` action: both the current and previous sides
    /// are populated (§3: "for Update and None both sides are present").
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn changed(
        operation: Operation,
        component_name: impl Into<String>,
        definition: ComponentRevision,
        instantiation: DeploymentComponent,
        previous_definition: ComponentRevision,
        previous_instantiation: DeploymentComponent,
        traits: Vec<Trait>,
    ) -> Self {
        debug_assert!(matches!(operation, Operation::Update | Operation::None));
        Action {
            operation,
            component_name: component_name.into(),
            definition: Some(definition),
            instantiation: Some(instantiation),
            previous_definition: Some(previous_definition),
            previous_instantiation: Some(previous_instantiation),
            workload: None,
            resources: Vec::new(),
            traits,
            service_bindings: BTreeMap::new(),
        }
    }

    /// Builds a `Delete` action: only the `previous_*` fields are populated.
    #[must_use]
    pub fn delete(
        component_name: impl Into<String>,
        previous_definition: ComponentRevision,
        previous_instantiation: DeploymentComponent,
    ) -> Self {
        let traits = previous_definition.properties.traits.clone();
        Action {
            operation: Operation::Delete,
            component_name: component_name.into(),
            definition: None,
            instantiation: None,
            previous_definition: Some(previous_definition),
            previous_instantiation: Some(previous_instantiation),
            workload: None,
            resources: Vec::new(),
            traits,
            service_bindings: BTreeMap::new(),
        }
    }

    /// Attaches rendered resources, setting `workload` to the first one's
    /// payload per §4.5.
    pub fn with_resources(&mut self, resources: Vec<super::workload::WorkloadResource>) {
        self.workload = resources.first().map(|r| r.resource.clone());
        self.resources = resources;
    }
}

/// Returns `true` iff `actions` is empty or every action has operation
/// [`Operation::None`] (§4.5).
#[must_use]
pub fn deployment_is_no_op(actions: &BTreeMap<String, Action>) -> bool {
    actions.values().all(|a| a.operation == Operation::None)
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod action_tests;
