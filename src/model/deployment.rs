// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The [`Deployment`] record: a desired set of component instantiations.

use serde::{Deserialize, Serialize};

use super::revision::{Revision, Trait};

/// A reference from a deployment to a specific revision of a named
/// component.
///
/// Before planning, `revision` may be blank (floating reference to "the
/// current revision"); after [`crate::revisions::resolve`] runs, it is
/// always a concrete, non-empty revision present in that component's
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentComponent {
    /// The name of the component being instantiated.
    pub component_name: String,
    /// The requested revision; blank means "current" until resolved.
    #[serde(default)]
    pub revision: Revision,
    /// Per-deployment trait overrides, present on the wire record (§6) but
    /// not yet interpreted by the diff engine beyond being carried through
    /// to the renderer via the resolved [`super::revision::ComponentRevision`]'s
    /// own traits (§9 open question: no deep comparison is attempted here).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<Trait>,
}

impl DeploymentComponent {
    /// Creates a new, unresolved deployment component reference.
    #[must_use]
    pub fn new(component_name: impl Into<String>, revision: impl Into<Revision>) -> Self {
        DeploymentComponent {
            component_name: component_name.into(),
            revision: revision.into(),
            traits: Vec::new(),
        }
    }
}

/// A desired state: which components, at which revisions, are active.
///
/// Invariant after planning (§3): no two entries share a `componentName`;
/// every `componentName` exists in the owning [`super::application::Application`];
/// every `revision` is non-empty and present in that component's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    /// The deployment's properties; nested to match the wire record shape
    /// (§6).
    pub properties: DeploymentProperties,
}

/// The body of a [`Deployment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentProperties {
    /// The ordered list of component instantiations.
    #[serde(default)]
    pub components: Vec<DeploymentComponent>,
}

impl Deployment {
    /// Creates an empty deployment.
    #[must_use]
    pub fn new() -> Self {
        Deployment::default()
    }

    /// Creates a deployment from an ordered list of components.
    #[must_use]
    pub fn from_components(components: Vec<DeploymentComponent>) -> Self {
        Deployment {
            properties: DeploymentProperties { components },
        }
    }

    /// Looks up a component instantiation by name.
    #[must_use]
    pub fn find(&self, component_name: &str) -> Option<&DeploymentComponent> {
        self.properties
            .components
            .iter()
            .find(|c| c.component_name == component_name)
    }
}

#[cfg(test)]
#[path = "deployment_tests.rs"]
mod deployment_tests;
