// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Revisions, component definitions, and the declarative shapes that make up
//! a [`ComponentRevision`].
//!
//! A component's definition evolves over time as an ordered `history` of
//! immutable [`ComponentRevision`]s (see [`ComponentHistory`]). A deployment
//! never names a revision's *contents* directly — it names a component and,
//! optionally, a revision identifier, which [`crate::revisions::resolve`]
//! pins down to a concrete entry in that history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque, immutable identifier for a version of a component definition.
///
/// The empty revision (`Revision::default()` / `Revision(String::new())`) is
/// a sentinel meaning "the current revision of this component" — it is never
/// itself a key into a [`ComponentHistory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(pub String);

impl Revision {
    /// Returns `true` if this is the blank sentinel revision.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Revision {
    fn from(value: &str) -> Self {
        Revision(value.to_string())
    }
}

impl From<String> for Revision {
    fn from(value: String) -> Self {
        Revision(value)
    }
}

/// A declared, outbound service a component provides to others.
///
/// Matched against a consumer's [`ServiceReference`] by `name` during
/// binding resolution (see [`crate::bindings`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDeclaration {
    /// The service name, unique among this component's `provides` list.
    pub name: String,
    /// The service kind (e.g. `"http"`, `"mongo.com/Mongo"`).
    pub kind: String,
    /// The container port this service is exposed on, if applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_port: Option<u16>,
    /// Renderer-specific additional properties, opaque to the planner.
    #[serde(default)]
    pub additional: BTreeMap<String, Value>,
}

/// A declared dependency on another component's service.
///
/// `name` is matched against a provider's [`ServiceDeclaration::name`]; `kind`
/// must also match. See [`crate::bindings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReference {
    /// The name of the service this component depends on.
    pub name: String,
    /// The expected kind of the dependency.
    pub kind: String,
    /// Renderer-specific additional properties, opaque to the planner.
    #[serde(default)]
    pub additional: BTreeMap<String, Value>,
}

/// Declarative metadata attached to a component revision.
///
/// Traits are forwarded verbatim onto the emitted [`crate::model::action::Action`]
/// and are read by [`crate::renderers::decorators`] to decide whether to
/// engage; unknown trait kinds are silently forwarded to the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    /// The trait kind, e.g. `"dapr.io/App@v1alpha1"`.
    pub kind: String,
    /// Trait-specific properties, opaque except to decorators that recognize
    /// `kind`.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

/// The full declarative payload of one component revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProperties {
    /// Build-time inputs, opaque to the planner.
    #[serde(default)]
    pub build: BTreeMap<String, Value>,
    /// Run-time inputs, opaque to the planner except where a renderer (e.g.
    /// the built-in container renderer) reads well-known keys such as
    /// `container.image`/`container.env`.
    #[serde(default)]
    pub run: BTreeMap<String, Value>,
    /// Services this component provides, in declaration order.
    #[serde(default)]
    pub provides: Vec<ServiceDeclaration>,
    /// Services this component depends on, in declaration order.
    #[serde(default)]
    pub depends_on: Vec<ServiceReference>,
    /// Traits attached to this revision, in declaration order (decorator
    /// composition order, §4.4, follows this order).
    #[serde(default)]
    pub traits: Vec<Trait>,
    /// Free-form configuration, opaque to the planner.
    #[serde(default)]
    pub config: BTreeMap<String, Value>,
}

/// One immutable, historical version of a component's definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRevision {
    /// The component kind, e.g. `"radius.dev/Container@v1alpha1"`. Used to
    /// look up a [`crate::renderers::Renderer`] in the registry.
    pub kind: String,
    /// This revision's identifier. Never blank once placed in history.
    pub revision: Revision,
    /// The declarative payload for this revision.
    pub properties: ComponentProperties,
}

/// The revision history for one named component.
///
/// Invariant: `current` equals some entry's `revision` in `history`, unless
/// `current` is empty and `history` is empty (a component registered but
/// never yet given a revision).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHistory {
    /// The revision a blank reference resolves to.
    pub current: Revision,
    /// All known revisions, oldest first.
    #[serde(default, rename = "revisionHistory")]
    pub history: Vec<ComponentRevision>,
}

impl ComponentHistory {
    /// Finds a revision by identifier.
    #[must_use]
    pub fn find(&self, revision: &Revision) -> Option<&ComponentRevision> {
        self.history.iter().find(|r| &r.revision == revision)
    }
}
