// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Revision resolution (§4.1): pins every component reference in a
//! [`Deployment`] down to a concrete, present revision, mutating the
//! deployment in place.
//!
//! This is the first step [`crate::planner::compute_deployment_actions`]
//! performs on `newer`, before any diffing or rendering happens.

use std::collections::HashSet;

use tracing::debug;

use crate::errors::ValidationError;
use crate::model::{Application, Deployment};

/// Resolves every [`crate::model::DeploymentComponent`] in `deployment`
/// against `app`'s component registry, mutating blank revisions to the
/// component's current revision in place.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in component order:
/// - [`ValidationError::ComponentNameMissing`] if a component name is empty.
/// - [`ValidationError::DuplicateComponent`] if the same name appears twice.
/// - [`ValidationError::ComponentNotRegistered`] if the name isn't in `app`.
/// - [`ValidationError::NoRevisionsExist`] if a blank revision has nothing
///   to resolve to.
/// - [`ValidationError::RevisionNotFound`] if an explicit revision isn't in
///   the component's history.
pub fn resolve(app: &Application, deployment: &mut Deployment) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(deployment.properties.components.len());

    for component in &mut deployment.properties.components {
        if component.component_name.is_empty() {
            return Err(ValidationError::ComponentNameMissing);
        }

        if !seen.insert(component.component_name.clone()) {
            return Err(ValidationError::DuplicateComponent {
                component: component.component_name.clone(),
            });
        }

        let history = app.components.get(&component.component_name).ok_or_else(|| {
            ValidationError::ComponentNotRegistered {
                component: component.component_name.clone(),
            }
        })?;

        let requested = component.revision.clone();

        if requested.is_empty() {
            if history.current.is_empty() || history.history.is_empty() {
                return Err(ValidationError::NoRevisionsExist {
                    component: component.component_name.clone(),
                });
            }
            component.revision = history.current.clone();
        } else if history.find(&requested).is_none() {
            return Err(ValidationError::RevisionNotFound {
                component: component.component_name.clone(),
                revision: requested.0,
            });
        }

        debug!(
            component = %component.component_name,
            requested = %requested,
            resolved = %component.revision,
            "resolved component revision"
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "revisions_tests.rs"]
mod revisions_tests;
