// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn find_returns_matching_component() {
    let deployment =
        Deployment::from_components(vec![DeploymentComponent::new("A", "1"), DeploymentComponent::new("B", "2")]);

    let found = deployment.find("B").expect("B present");
    assert_eq!(found.revision, Revision::from("2"));
}

#[test]
fn find_returns_none_for_missing_component() {
    let deployment = Deployment::from_components(vec![DeploymentComponent::new("A", "1")]);
    assert!(deployment.find("Z").is_none());
}

#[test]
fn new_deployment_has_no_components() {
    let deployment = Deployment::new();
    assert!(deployment.properties.components.is_empty());
}
