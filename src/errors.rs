// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed error taxonomy for the deployment planner (§7).
//!
//! Each failure category is its own `thiserror`-derived enum carrying
//! structured fields — never just a formatted string — so a REST-layer
//! caller can build the `{ code, message, target?, details? }` wire payload
//! (§6) from fields instead of parsing `Display` output. [`PlanError`]
//! composes all five categories into the one error type
//! [`crate::planner::compute_deployment_actions`] returns.

use thiserror::Error;

/// Malformed input detectable before any renderer is invoked: empty names,
/// duplicate components, missing components, missing or unknown revisions.
///
/// Surfaces as wire code `"Invalid"` / HTTP 400-class.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A `DeploymentComponent` entry had an empty `componentName`.
    #[error("component name missing")]
    ComponentNameMissing,

    /// The named component is not registered with the application.
    #[error("component {component} not registered")]
    ComponentNotRegistered {
        /// The unregistered component's name.
        component: String,
    },

    /// The named component's history is empty and no revision was
    /// requested, so there is nothing for a blank reference to resolve to.
    #[error("no revisions exist for component {component}")]
    NoRevisionsExist {
        /// The component with no revision history.
        component: String,
    },

    /// The requested revision is not present in the named component's
    /// history.
    #[error("revision {revision} of component {component} not found")]
    RevisionNotFound {
        /// The component whose history was searched.
        component: String,
        /// The revision that was requested but not found.
        revision: String,
    },

    /// The same component name appeared more than once in one deployment.
    #[error("duplicate component {component}")]
    DuplicateComponent {
        /// The component name that appeared more than once.
        component: String,
    },
}

/// A dependency could not be resolved, was ambiguous, or a renderer's
/// `allocate` call itself failed.
///
/// Surfaces as wire code `"BindingFailed"`.
#[derive(Error, Debug, Clone)]
pub enum BindingError {
    /// No provider in the deployment declares a matching service.
    #[error("component {consumer} depends on {reference_name} ({reference_kind}) but no component provides it")]
    Unsatisfied {
        /// The component with the unmet dependency.
        consumer: String,
        /// The unmet service reference's name.
        reference_name: String,
        /// The unmet service reference's kind.
        reference_kind: String,
    },

    /// More than one component in the deployment provides a matching
    /// service.
    #[error("component {consumer} depends on {reference_name} ({reference_kind}) but {providers:?} all provide it")]
    Ambiguous {
        /// The component with the ambiguous dependency.
        consumer: String,
        /// The ambiguous service reference's name.
        reference_name: String,
        /// The ambiguous service reference's kind.
        reference_kind: String,
        /// The names of every component that provides a match.
        providers: Vec<String>,
    },

    /// The provider's renderer reported an error from `allocate`.
    #[error("allocating binding {reference_name} from provider {provider} failed: {cause}")]
    AllocateFailed {
        /// The provider component whose `allocate` call failed.
        provider: String,
        /// The consumer's service reference name being allocated.
        reference_name: String,
        /// The renderer-reported cause.
        cause: String,
    },
}

/// A renderer reported an error while rendering a component's workload.
///
/// Surfaces as wire code `"RenderFailed"`.
#[derive(Error, Debug, Clone)]
#[error("rendering component {component} failed: {cause}")]
pub struct RenderError {
    /// The component whose render call failed.
    pub component: String,
    /// The renderer-reported cause.
    pub cause: String,
}

/// No renderer is registered for a component's `kind`.
///
/// Surfaces as wire code `"UnknownKind"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no renderer registered for kind {kind}")]
pub struct RegistryError {
    /// The unregistered kind string.
    pub kind: String,
}

/// The caller's context was cancelled before planning completed.
///
/// Surfaces as wire code `"Cancelled"`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("planning was cancelled")]
pub struct Cancelled;

/// The single error type the planner's entry point returns.
///
/// Each variant wraps one of the five categories from §7 and exposes
/// [`PlanError::code`] returning the exact wire code named for that
/// category, so the `{ code, message, target?, details? }` payload of §6 can
/// be assembled without string-matching `Display` output.
#[derive(Error, Debug, Clone)]
pub enum PlanError {
    /// See [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// See [`BindingError`].
    #[error(transparent)]
    Binding(#[from] BindingError),
    /// See [`RenderError`].
    #[error(transparent)]
    Render(#[from] RenderError),
    /// See [`RegistryError`].
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// See [`Cancelled`].
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl PlanError {
    /// The wire error code (§6, §7) for this error's category.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::Validation(_) => "Invalid",
            PlanError::Binding(_) => "BindingFailed",
            PlanError::Render(_) => "RenderFailed",
            PlanError::Registry(_) => "UnknownKind",
            PlanError::Cancelled(_) => "Cancelled",
        }
    }

    /// The component or reference name this error names, if any, suitable
    /// for the wire payload's `target` field.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            PlanError::Validation(ValidationError::ComponentNotRegistered { component }
            | ValidationError::NoRevisionsExist { component }
            | ValidationError::RevisionNotFound { component, .. }
            | ValidationError::DuplicateComponent { component }) => Some(component),
            PlanError::Binding(
                BindingError::Unsatisfied { consumer, .. }
                | BindingError::Ambiguous { consumer, .. }
                | BindingError::AllocateFailed { provider: consumer, .. },
            ) => Some(consumer),
            PlanError::Render(RenderError { component, .. }) => Some(component),
            PlanError::Registry(RegistryError { kind }) => Some(kind),
            PlanError::Validation(ValidationError::ComponentNameMissing) | PlanError::Cancelled(_) => None,
        }
    }
}

/// Serializable `{ code, message, target?, details? }` error payload
/// surfaced at a REST layer (§6).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// The wire error code (§7).
    pub code: String,
    /// A human-readable message, from the error's `Display` impl.
    pub message: String,
    /// The component or reference name this error concerns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl From<&PlanError> for ErrorPayload {
    fn from(error: &PlanError) -> Self {
        ErrorPayload {
            code: error.code().to_string(),
            message: error.to_string(),
            target: error.target().map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
