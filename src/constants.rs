// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the deployment planner.
//!
//! This module contains the well-known kind and trait-kind strings the
//! planner and its built-in renderer/decorators recognize by name (§3,
//! §4.2, §4.4, §4.6). Constants are organized by category for easy
//! maintenance, the same layout the teacher used for its own `constants.rs`.

// ============================================================================
// Built-in Component Kinds
// ============================================================================

/// Kind string for the built-in container renderer (§4.2, §4.6).
pub const KIND_CONTAINER: &str = "radius.dev/Container@v1alpha1";

// ============================================================================
// Built-in Trait Kinds
// ============================================================================

/// Trait kind recognized by [`crate::renderers::decorators::dapr`] (§4.4, §8
/// seed scenario 8).
pub const TRAIT_DAPR_APP: &str = "dapr.io/App@v1alpha1";

/// Trait kind recognized by [`crate::renderers::decorators::annotations`].
pub const TRAIT_ANNOTATIONS: &str = "radius.dev/Annotations@v1alpha1";

// ============================================================================
// Workload Resource Type Tags
// ============================================================================

/// Resource envelope type tag for ARM-style resources (§6 "Workload resource
/// envelope").
pub const RESOURCE_TYPE_ARM: &str = "arm";

/// Resource envelope type tag for Kubernetes-style resources.
pub const RESOURCE_TYPE_KUBERNETES: &str = "kubernetes";

/// Resource envelope type tag for Dapr component resources.
pub const RESOURCE_TYPE_DAPR_COMPONENT: &str = "dapr-component";

// ============================================================================
// Rendered Workload Shape (§4.6)
// ============================================================================

/// `kind` of the rendered container workload record.
pub const WORKLOAD_KIND_CONTAINER: &str = "Container";

/// `apiVersion` of the rendered container workload record.
pub const WORKLOAD_API_VERSION: &str = "radius.dev/v1alpha1";

// ============================================================================
// Wire Error Codes (§7)
// ============================================================================

/// Wire code for [`crate::errors::ValidationError`].
pub const ERROR_CODE_INVALID: &str = "Invalid";

/// Wire code for [`crate::errors::BindingError`].
pub const ERROR_CODE_BINDING_FAILED: &str = "BindingFailed";

/// Wire code for [`crate::errors::RenderError`].
pub const ERROR_CODE_RENDER_FAILED: &str = "RenderFailed";

/// Wire code for [`crate::errors::RegistryError`].
pub const ERROR_CODE_UNKNOWN_KIND: &str = "UnknownKind";

/// Wire code for [`crate::errors::Cancelled`].
pub const ERROR_CODE_CANCELLED: &str = "Cancelled";
