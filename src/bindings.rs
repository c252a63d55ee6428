// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Service binding resolution (§4.3): matches each component's declared
//! dependencies to exactly one provider in the same deployment, then asks
//! that provider's renderer to allocate connection properties.
//!
//! Runs in two passes so that two components can depend on each other's
//! services without either one needing the other's binding already
//! allocated: pass one matches every reference to its provider across the
//! whole deployment before pass two allocates anything, so the order
//! components appear in never matters and provide/depend cycles resolve
//! cleanly.

use std::collections::BTreeMap;

use tracing::debug;

use crate::context::PlanContext;
use crate::errors::{BindingError, PlanError};
use crate::model::{Application, ComponentRevision, Deployment, Instantiated, ServiceBinding};

/// Resolves every component's `dependsOn` clauses against the services
/// provided elsewhere in `deployment`, returning a map from consumer
/// component name to its resolved bindings (keyed by reference name).
///
/// Requires `deployment` to have already been through
/// [`crate::revisions::resolve`]: every `componentName` must be registered
/// in `app` and every `revision` must be present in that component's
/// history, or this function panics.
///
/// # Errors
///
/// Returns [`PlanError::Binding`] if a dependency is unsatisfied, ambiguous,
/// or its provider's `allocate` call fails; [`PlanError::Registry`] if no
/// renderer is registered for a provider's kind; [`PlanError::Cancelled`] if
/// `ctx` is cancelled mid-resolution.
pub async fn resolve(
    ctx: &PlanContext,
    app: &Application,
    deployment: &Deployment,
) -> Result<BTreeMap<String, BTreeMap<String, ServiceBinding>>, PlanError> {
    ctx.check_cancelled()?;

    let mut revisions: BTreeMap<String, ComponentRevision> = BTreeMap::new();
    let mut providers_by_reference: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();

    for component in &deployment.properties.components {
        let history = app
            .components
            .get(&component.component_name)
            .expect("component registration already validated by revisions::resolve");
        let revision = history
            .find(&component.revision)
            .expect("revision presence already validated by revisions::resolve")
            .clone();

        for service in &revision.properties.provides {
            providers_by_reference
                .entry((service.name.clone(), service.kind.clone()))
                .or_default()
                .push(component.component_name.clone());
        }

        revisions.insert(component.component_name.clone(), revision);
    }

    // Pass 1: match every reference to its provider. No allocation happens
    // here, so a cycle between two providers never deadlocks this pass.
    let mut matched = Vec::new();
    for component in &deployment.properties.components {
        let revision = &revisions[&component.component_name];
        for reference in &revision.properties.depends_on {
            let key = (reference.name.clone(), reference.kind.clone());
            let providers = providers_by_reference.get(&key).cloned().unwrap_or_default();
            match providers.as_slice() {
                [] => {
                    return Err(BindingError::Unsatisfied {
                        consumer: component.component_name.clone(),
                        reference_name: reference.name.clone(),
                        reference_kind: reference.kind.clone(),
                    }
                    .into())
                }
                [provider] => matched.push((
                    component.component_name.clone(),
                    reference.name.clone(),
                    reference.kind.clone(),
                    provider.clone(),
                )),
                _ => {
                    return Err(BindingError::Ambiguous {
                        consumer: component.component_name.clone(),
                        reference_name: reference.name.clone(),
                        reference_kind: reference.kind.clone(),
                        providers,
                    }
                    .into())
                }
            }
        }
    }

    // Pass 2: every reference now has exactly one provider, so allocation
    // order no longer matters either.
    let mut bindings: BTreeMap<String, BTreeMap<String, ServiceBinding>> = BTreeMap::new();
    for (consumer, reference_name, reference_kind, provider) in matched {
        ctx.check_cancelled()?;

        let provider_revision = &revisions[&provider];
        let service = provider_revision
            .properties
            .provides
            .iter()
            .find(|s| s.name == reference_name && s.kind == reference_kind)
            .expect("matched against this exact service in pass 1");

        let renderer = ctx.registry().require(&provider_revision.kind)?;
        let instantiated = Instantiated {
            application_name: app.name.clone(),
            component_name: provider.clone(),
            workload: provider_revision.clone(),
            traits: provider_revision.properties.traits.clone(),
            binding_values: BTreeMap::new(),
        };

        let properties = renderer
            .allocate(ctx, &instantiated, service)
            .await
            .map_err(|cause| BindingError::AllocateFailed {
                provider: provider.clone(),
                reference_name: reference_name.clone(),
                cause,
            })?;

        debug!(
            consumer = %consumer,
            provider = %provider,
            reference = %reference_name,
            "resolved service binding"
        );

        bindings.entry(consumer).or_default().insert(
            reference_name.clone(),
            ServiceBinding {
                name: reference_name,
                kind: reference_kind,
                provider,
                properties,
            },
        );
    }

    Ok(bindings)
}

#[cfg(test)]
#[path = "bindings_tests.rs"]
mod bindings_tests;
