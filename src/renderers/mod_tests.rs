// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use super::*;
use crate::renderers::container::ContainerRenderer;

#[test]
fn empty_registry_resolves_nothing() {
    let registry = Registry::builder().build();
    assert!(registry.get("radius.dev/Container@v1alpha1").is_none());
}

#[test]
fn registered_kind_is_resolvable() {
    let registry = Registry::builder()
        .register("radius.dev/Container@v1alpha1", ContainerRenderer::new())
        .build();
    assert!(registry.get("radius.dev/Container@v1alpha1").is_some());
}

#[test]
fn require_errors_on_unknown_kind() {
    let registry = Registry::builder().build();
    let err = registry.require("radius.dev/Unknown@v1alpha1").unwrap_err();
    assert_eq!(err.kind, "radius.dev/Unknown@v1alpha1");
}

#[test]
fn registering_the_same_kind_twice_replaces_the_renderer() {
    let registry = Registry::builder()
        .register("radius.dev/Container@v1alpha1", ContainerRenderer::new())
        .register("radius.dev/Container@v1alpha1", ContainerRenderer::new())
        .build();
    assert!(registry.get("radius.dev/Container@v1alpha1").is_some());
}

#[test]
fn register_shared_reuses_one_instance_for_two_kinds() {
    let shared: std::sync::Arc<dyn Renderer> = std::sync::Arc::new(ContainerRenderer::new());
    let registry = Registry::builder()
        .register_shared("radius.dev/Container@v1alpha1", shared.clone())
        .register_shared("radius.dev/ContainerAlias@v1alpha1", shared)
        .build();
    assert!(registry.get("radius.dev/Container@v1alpha1").is_some());
    assert!(registry.get("radius.dev/ContainerAlias@v1alpha1").is_some());
}
