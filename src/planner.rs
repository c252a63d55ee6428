// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The diff engine (§4.5): the planner's entry point,
//! [`compute_deployment_actions`], which ties together revision resolution
//! (§4.1), binding resolution (§4.3), and rendering (§4.2/§4.4) into one
//! per-component [`Action`] map.
//!
//! This is the orchestration layer: it does no work itself beyond
//! sequencing calls into the other modules and applying the decision
//! table, but it is where the whole contract of §1 lives.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::bindings;
use crate::context::PlanContext;
use crate::errors::PlanError;
use crate::metrics;
use crate::model::{Action, Application, ComponentRevision, Deployment, Instantiated, Operation};
use crate::renderers::decorators;
use crate::revisions;

/// Computes the per-component action set for moving from `older` (or
/// nothing, on a first deploy) to `newer`, under the component definitions
/// registered in `app` (§1, §6).
///
/// `newer` is mutated in place: every [`crate::model::DeploymentComponent`]
/// with a blank revision is resolved to its component's current revision
/// (§4.1, §9 "mutable revision in input"). On success, the returned map is
/// keyed by component name and contains exactly one [`Action`] per name in
/// `names(older) ∪ names(newer)` (§8 "completeness of union").
///
/// # Errors
///
/// Returns the first [`PlanError`] encountered; no partial action set is
/// ever returned (§4.5 "failure semantics"). Revision resolution and binding
/// resolution both run to completion before any `render` call, so a later
/// error can never follow a partially rendered component.
#[instrument(skip(ctx, app, older, newer), fields(application = %app.name))]
pub async fn compute_deployment_actions(
    ctx: &PlanContext,
    app: &Application,
    older: Option<&Deployment>,
    newer: &mut Deployment,
) -> Result<BTreeMap<String, Action>, PlanError> {
    let timer = metrics::PlanTimer::start();
    ctx.check_cancelled()?;

    match compute(ctx, app, older, newer).await {
        Ok(actions) => {
            metrics::record_plan_success(&timer, actions.len());
            for action in actions.values() {
                metrics::record_action(action.operation);
            }
            info!(
                components = actions.len(),
                no_op = crate::model::deployment_is_no_op(&actions),
                "computed deployment actions"
            );
            Ok(actions)
        }
        Err(error) => {
            metrics::record_plan_failure(&timer, error.code());
            Err(error)
        }
    }
}

async fn compute(
    ctx: &PlanContext,
    app: &Application,
    older: Option<&Deployment>,
    newer: &mut Deployment,
) -> Result<BTreeMap<String, Action>, PlanError> {
    revisions::resolve(app, newer)?;
    ctx.check_cancelled()?;

    let bindings = bindings::resolve(ctx, app, newer).await?;
    ctx.check_cancelled()?;

    let empty = Deployment::new();
    let older = older.unwrap_or(&empty);

    let older_names: BTreeSet<&str> = older
        .properties
        .components
        .iter()
        .map(|c| c.component_name.as_str())
        .collect();
    let newer_names: BTreeSet<&str> = newer
        .properties
        .components
        .iter()
        .map(|c| c.component_name.as_str())
        .collect();

    let mut actions = BTreeMap::new();

    for name in older_names.union(&newer_names) {
        ctx.check_cancelled()?;

        let older_entry = older.find(name);
        let newer_entry = newer.find(name);

        let action = match (older_entry, newer_entry) {
            (None, Some(entry)) => {
                let definition = resolved_definition(app, &entry.component_name, &entry.revision)?;
                let traits = definition.properties.traits.clone();
                let mut action = Action::create(name.to_string(), definition.clone(), entry.clone(), traits);
                render_into(ctx, app, &definition, &mut action, &bindings).await?;
                action
            }
            (Some(entry), None) => {
                let previous_definition = resolved_definition(app, &entry.component_name, &entry.revision)?;
                Action::delete(name.to_string(), previous_definition, entry.clone())
            }
            (Some(old_entry), Some(entry)) => {
                let operation = if old_entry.revision == entry.revision {
                    Operation::None
                } else {
                    Operation::Update
                };
                let definition = resolved_definition(app, &entry.component_name, &entry.revision)?;
                let previous_definition =
                    resolved_definition(app, &old_entry.component_name, &old_entry.revision)?;
                let traits = definition.properties.traits.clone();
                let mut action = Action::changed(
                    operation,
                    name.to_string(),
                    definition.clone(),
                    entry.clone(),
                    previous_definition,
                    old_entry.clone(),
                    traits,
                );
                render_into(ctx, app, &definition, &mut action, &bindings).await?;
                action
            }
            (None, None) => unreachable!("name came from the union of older and newer component names"),
        };

        actions.insert((*name).to_string(), action);
    }

    Ok(actions)
}

fn resolved_definition(
    app: &Application,
    component_name: &str,
    revision: &crate::model::Revision,
) -> Result<ComponentRevision, PlanError> {
    let history = app
        .components
        .get(component_name)
        .ok_or_else(|| crate::errors::ValidationError::ComponentNotRegistered {
            component: component_name.to_string(),
        })?;
    history
        .find(revision)
        .cloned()
        .ok_or_else(|| {
            crate::errors::ValidationError::RevisionNotFound {
                component: component_name.to_string(),
                revision: revision.0.clone(),
            }
            .into()
        })
}

async fn render_into(
    ctx: &PlanContext,
    app: &Application,
    definition: &ComponentRevision,
    action: &mut Action,
    bindings: &BTreeMap<String, BTreeMap<String, crate::model::ServiceBinding>>,
) -> Result<(), PlanError> {
    let base: Arc<dyn crate::renderers::Renderer> = ctx.registry().require(&definition.kind)?;
    let renderer = decorators::chain_for(&definition.properties.traits, base);

    let binding_values = bindings.get(&action.component_name).cloned().unwrap_or_default();
    action.service_bindings = binding_values.clone();

    let instantiated = Instantiated {
        application_name: app.name.clone(),
        component_name: action.component_name.clone(),
        workload: definition.clone(),
        traits: definition.properties.traits.clone(),
        binding_values,
    };

    let resources = renderer
        .render(ctx, &instantiated)
        .await
        .map_err(PlanError::Render)?;
    action.with_resources(resources);

    Ok(())
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod planner_tests;
