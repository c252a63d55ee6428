// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::*;
use crate::errors::RenderError;
use crate::model::{ComponentHistory, ComponentProperties, ServiceDeclaration, ServiceReference};
use crate::renderers::{Registry, Renderer};

const KIND: &str = "test.dev/Echo@v1alpha1";

struct EchoRenderer;

#[async_trait]
impl Renderer for EchoRenderer {
    async fn render(&self, _ctx: &PlanContext, _instantiated: &Instantiated) -> Result<Vec<crate::model::WorkloadResource>, RenderError> {
        unimplemented!("bindings::resolve never calls render")
    }

    async fn allocate(
        &self,
        _ctx: &PlanContext,
        instantiated: &Instantiated,
        service: &ServiceDeclaration,
    ) -> Result<BTreeMap<String, Value>, String> {
        let mut properties = BTreeMap::new();
        properties.insert("host".to_string(), json!(instantiated.component_name));
        properties.insert("service".to_string(), json!(service.name));
        Ok(properties)
    }
}

struct FailingRenderer;

#[async_trait]
impl Renderer for FailingRenderer {
    async fn render(&self, _ctx: &PlanContext, _instantiated: &Instantiated) -> Result<Vec<crate::model::WorkloadResource>, RenderError> {
        unimplemented!()
    }

    async fn allocate(
        &self,
        _ctx: &PlanContext,
        _instantiated: &Instantiated,
        _service: &ServiceDeclaration,
    ) -> Result<BTreeMap<String, Value>, String> {
        Err("connection pool exhausted".to_string())
    }
}

fn provider_component(name: &str, service_name: &str) -> (Application, Deployment) {
    let mut app = Application::new("radius/myapp");
    app.components.insert(
        name.to_string(),
        ComponentHistory {
            current: "1".into(),
            history: vec![ComponentRevision {
                kind: KIND.to_string(),
                revision: "1".into(),
                properties: ComponentProperties {
                    provides: vec![ServiceDeclaration {
                        name: service_name.to_string(),
                        kind: "http".to_string(),
                        container_port: Some(80),
                        additional: BTreeMap::new(),
                    }],
                    ..Default::default()
                },
            }],
        },
    );
    let deployment = Deployment::from_components(vec![crate::model::DeploymentComponent::new(name, "1")]);
    (app, deployment)
}

fn consumer_component(name: &str, depends_on: &str) -> crate::model::DeploymentComponent {
    crate::model::DeploymentComponent::new(name, "1")
}

fn with_consumer(mut app: Application, mut deployment: Deployment, name: &str, reference_name: &str) -> (Application, Deployment) {
    app.components.insert(
        name.to_string(),
        ComponentHistory {
            current: "1".into(),
            history: vec![ComponentRevision {
                kind: KIND.to_string(),
                revision: "1".into(),
                properties: ComponentProperties {
                    depends_on: vec![ServiceReference {
                        name: reference_name.to_string(),
                        kind: "http".to_string(),
                        additional: BTreeMap::new(),
                    }],
                    ..Default::default()
                },
            }],
        },
    );
    deployment.properties.components.push(consumer_component(name, reference_name));
    (app, deployment)
}

fn registry() -> Registry {
    Registry::builder().register(KIND, EchoRenderer).build()
}

#[tokio::test]
async fn resolves_a_single_dependency() {
    let (app, deployment) = provider_component("db", "sql");
    let (app, deployment) = with_consumer(app, deployment, "api", "sql");
    let ctx = PlanContext::new(registry());

    let bindings = resolve(&ctx, &app, &deployment).await.unwrap();
    let binding = &bindings["api"]["sql"];
    assert_eq!(binding.provider, "db");
    assert_eq!(binding.properties["host"], "db");
}

#[tokio::test]
async fn unsatisfied_dependency_is_an_error() {
    let app = Application::new("radius/myapp");
    let (app, deployment) = with_consumer(app, Deployment::new(), "api", "sql");
    let ctx = PlanContext::new(registry());

    let err = resolve(&ctx, &app, &deployment).await.unwrap_err();
    assert_eq!(err.code(), "BindingFailed");
}

#[tokio::test]
async fn ambiguous_dependency_is_an_error() {
    let (mut app, mut deployment) = provider_component("db-a", "sql");
    let (other_app, _) = provider_component("db-b", "sql");
    for (name, history) in other_app.components {
        app.components.insert(name.clone(), history);
        deployment
            .properties
            .components
            .push(crate::model::DeploymentComponent::new(name, "1"));
    }
    let (app, deployment) = with_consumer(app, deployment, "api", "sql");
    let ctx = PlanContext::new(registry());

    let err = resolve(&ctx, &app, &deployment).await.unwrap_err();
    assert_eq!(err.code(), "BindingFailed");
}

#[tokio::test]
async fn allocate_failure_is_wrapped_with_provider_context() {
    let (app, deployment) = provider_component("db", "sql");
    let (app, deployment) = with_consumer(app, deployment, "api", "sql");
    let ctx = PlanContext::new(Registry::builder().register(KIND, FailingRenderer).build());

    let err = resolve(&ctx, &app, &deployment).await.unwrap_err();
    assert_eq!(err.code(), "BindingFailed");
    assert_eq!(err.target(), Some("db"));
}

#[tokio::test]
async fn missing_renderer_surfaces_registry_error() {
    let (app, deployment) = provider_component("db", "sql");
    let (app, deployment) = with_consumer(app, deployment, "api", "sql");
    let ctx = PlanContext::new(Registry::builder().build());

    let err = resolve(&ctx, &app, &deployment).await.unwrap_err();
    assert_eq!(err.code(), "UnknownKind");
}

#[tokio::test]
async fn symmetric_dependency_cycle_resolves_both_sides() {
    // `a` provides `svc-a` and depends on `svc-b`; `b` provides `svc-b` and
    // depends on `svc-a`. Neither can render without the other's binding,
    // but allocation alone does not require rendering, so this resolves.
    let mut app = Application::new("radius/myapp");
    app.components.insert(
        "a".to_string(),
        ComponentHistory {
            current: "1".into(),
            history: vec![ComponentRevision {
                kind: KIND.to_string(),
                revision: "1".into(),
                properties: ComponentProperties {
                    provides: vec![ServiceDeclaration {
                        name: "svc-a".to_string(),
                        kind: "http".to_string(),
                        container_port: None,
                        additional: BTreeMap::new(),
                    }],
                    depends_on: vec![ServiceReference {
                        name: "svc-b".to_string(),
                        kind: "http".to_string(),
                        additional: BTreeMap::new(),
                    }],
                    ..Default::default()
                },
            }],
        },
    );
    app.components.insert(
        "b".to_string(),
        ComponentHistory {
            current: "1".into(),
            history: vec![ComponentRevision {
                kind: KIND.to_string(),
                revision: "1".into(),
                properties: ComponentProperties {
                    provides: vec![ServiceDeclaration {
                        name: "svc-b".to_string(),
                        kind: "http".to_string(),
                        container_port: None,
                        additional: BTreeMap::new(),
                    }],
                    depends_on: vec![ServiceReference {
                        name: "svc-a".to_string(),
                        kind: "http".to_string(),
                        additional: BTreeMap::new(),
                    }],
                    ..Default::default()
                },
            }],
        },
    );
    let deployment = Deployment::from_components(vec![
        crate::model::DeploymentComponent::new("a", "1"),
        crate::model::DeploymentComponent::new("b", "1"),
    ]);
    let ctx = PlanContext::new(registry());

    let bindings = resolve(&ctx, &app, &deployment).await.unwrap();
    assert_eq!(bindings["a"]["svc-b"].provider, "b");
    assert_eq!(bindings["b"]["svc-a"].provider, "a");
}
