// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::model::{ComponentProperties, ComponentRevision};
use crate::renderers::container::ContainerRenderer;
use crate::renderers::Registry;

fn instantiated() -> Instantiated {
    let mut run = BTreeMap::new();
    run.insert("container".to_string(), json!({ "image": "ghcr.io/example/app:latest" }));

    Instantiated {
        application_name: "radius/myapp".to_string(),
        component_name: "backend".to_string(),
        workload: ComponentRevision {
            kind: "radius.dev/Container@v1alpha1".to_string(),
            revision: "1".into(),
            properties: ComponentProperties {
                run,
                ..Default::default()
            },
        },
        traits: Vec::new(),
        binding_values: BTreeMap::new(),
    }
}

#[tokio::test]
async fn merges_string_properties_onto_pod_annotations() {
    let ctx = PlanContext::new(Registry::builder().build());
    let inner: Arc<dyn Renderer> = Arc::new(ContainerRenderer::new());
    let trait_ = Trait {
        kind: TRAIT_KIND.to_string(),
        properties: serde_json::from_value(json!({ "team": "platform" })).unwrap(),
    };
    let decorator = AnnotationsDecorator::new(inner, trait_);

    let resources = decorator.render(&ctx, &instantiated()).await.unwrap();
    let annotations = &resources[1].resource["spec"]["template"]["metadata"]["annotations"];
    assert_eq!(annotations["team"], "platform");
}

#[tokio::test]
async fn stringifies_non_string_properties() {
    let ctx = PlanContext::new(Registry::builder().build());
    let inner: Arc<dyn Renderer> = Arc::new(ContainerRenderer::new());
    let trait_ = Trait {
        kind: TRAIT_KIND.to_string(),
        properties: serde_json::from_value(json!({ "replicas": 3 })).unwrap(),
    };
    let decorator = AnnotationsDecorator::new(inner, trait_);

    let resources = decorator.render(&ctx, &instantiated()).await.unwrap();
    let annotations = &resources[1].resource["spec"]["template"]["metadata"]["annotations"];
    assert_eq!(annotations["replicas"], "3");
}
