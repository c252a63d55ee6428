// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use super::*;
use crate::model::revision::ComponentProperties;

fn revision(rev: &str) -> ComponentRevision {
    ComponentRevision {
        kind: "radius.dev/Container@v1alpha1".to_string(),
        revision: rev.into(),
        properties: ComponentProperties::default(),
    }
}

#[test]
fn create_action_has_no_previous_fields() {
    let action = Action::create(
        "A",
        revision("1"),
        DeploymentComponent::new("A", "1"),
        Vec::new(),
    );
    assert_eq!(action.operation, Operation::Create);
    assert!(action.previous_definition.is_none());
    assert!(action.previous_instantiation.is_none());
    assert!(action.definition.is_some());
}

#[test]
fn delete_action_has_no_current_fields() {
    let action = Action::delete("A", revision("1"), DeploymentComponent::new("A", "1"));
    assert_eq!(action.operation, Operation::Delete);
    assert!(action.definition.is_none());
    assert!(action.instantiation.is_none());
    assert!(action.previous_definition.is_some());
    assert!(action.previous_instantiation.is_some());
}

#[test]
fn delete_action_carries_previous_traits() {
    let mut def = revision("1");
    def.properties.traits.push(Trait {
        kind: "dapr.io/App@v1alpha1".to_string(),
        properties: BTreeMap::new(),
    });
    let action = Action::delete("A", def, DeploymentComponent::new("A", "1"));
    assert_eq!(action.traits.len(), 1);
}

#[test]
fn with_resources_sets_first_as_workload() {
    let mut action = Action::create(
        "A",
        revision("1"),
        DeploymentComponent::new("A", "1"),
        Vec::new(),
    );
    let resources = vec![
        super::workload::WorkloadResource::new("kubernetes", "Resource0", serde_json::json!({"a": 1})),
        super::workload::WorkloadResource::new("dapr-component", "Resource1", serde_json::json!({"b": 2})),
    ];
    action.with_resources(resources);
    assert_eq!(action.workload, Some(serde_json::json!({"a": 1})));
    assert_eq!(action.resources.len(), 2);
}

#[test]
fn deployment_is_no_op_true_when_empty() {
    let actions: BTreeMap<String, Action> = BTreeMap::new();
    assert!(deployment_is_no_op(&actions));
}

#[test]
fn deployment_is_no_op_false_when_any_action_changes() {
    let mut actions = BTreeMap::new();
    actions.insert(
        "A".to_string(),
        Action::create("A", revision("1"), DeploymentComponent::new("A", "1"), Vec::new()),
    );
    assert!(!deployment_is_no_op(&actions));
}

#[test]
fn deployment_is_no_op_true_when_all_none() {
    let mut actions = BTreeMap::new();
    actions.insert(
        "A".to_string(),
        Action::changed(
            Operation::None,
            "A",
            revision("1"),
            DeploymentComponent::new("A", "1"),
            Vec::new(),
        ),
    );
    assert!(deployment_is_no_op(&actions));
}
