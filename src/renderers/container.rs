// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The built-in renderer for kind `"radius.dev/Container@v1alpha1"` (§4.6).
//!
//! Ships with the crate so the planner is independently testable without a
//! caller-supplied registry. Embedding services register additional
//! kind-specific renderers (volumes, secret stores, message queues, ...)
//! the same way.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::context::PlanContext;
use crate::errors::RenderError;
use crate::model::{Instantiated, ServiceDeclaration, WorkloadResource};

use super::Renderer;

/// Renders a container-kind component into a `"Container"` workload record
/// (§4.6) plus a Kubernetes Deployment-shaped resource, and allocates
/// `host`/`port` binding properties for its declared services.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerRenderer;

impl ContainerRenderer {
    /// Builds a new container renderer. Stateless: one instance can back
    /// every application that uses this kind.
    #[must_use]
    pub fn new() -> Self {
        ContainerRenderer
    }

    fn image(instantiated: &Instantiated) -> Result<String, RenderError> {
        instantiated
            .workload
            .properties
            .run
            .get("container")
            .and_then(|c| c.get("image"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| RenderError {
                component: instantiated.component_name.clone(),
                cause: "run.container.image is required".to_string(),
            })
    }

    fn env(instantiated: &Instantiated) -> Vec<Value> {
        instantiated
            .workload
            .properties
            .run
            .get("container")
            .and_then(|c| c.get("env"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl Renderer for ContainerRenderer {
    async fn render(
        &self,
        _ctx: &PlanContext,
        instantiated: &Instantiated,
    ) -> Result<Vec<WorkloadResource>, RenderError> {
        let image = Self::image(instantiated)?;
        let env = Self::env(instantiated);
        let namespace = instantiated.application_name.rsplit('/').next().unwrap_or(&instantiated.application_name);

        debug!(
            component = %instantiated.component_name,
            image = %image,
            "rendering container workload"
        );

        let container_workload = json!({
            "kind": "Container",
            "apiVersion": "radius.dev/v1alpha1",
            "metadata": {
                "name": instantiated.component_name,
                "namespace": namespace,
            },
            "spec": {
                "container": {
                    "image": image,
                    "env": env,
                },
            },
        });

        let ports: Vec<Value> = instantiated
            .workload
            .properties
            .provides
            .iter()
            .filter_map(|svc| {
                svc.container_port.map(|port| {
                    json!({ "name": svc.name, "containerPort": port })
                })
            })
            .collect();

        let env_vars: Vec<Value> = env
            .iter()
            .map(|e| {
                json!({
                    "name": e.get("name").cloned().unwrap_or(Value::Null),
                    "value": e.get("value").cloned().unwrap_or(Value::Null),
                })
            })
            .collect();

        let kubernetes_deployment = json!({
            "kind": "Deployment",
            "apiVersion": "apps/v1",
            "metadata": {
                "name": instantiated.component_name,
                "namespace": namespace,
            },
            "spec": {
                "replicas": 1,
                "template": {
                    "metadata": {
                        "annotations": {},
                    },
                    "spec": {
                        "containers": [{
                            "name": instantiated.component_name,
                            "image": image,
                            "env": env_vars,
                            "ports": ports,
                        }],
                    },
                },
            },
        });

        Ok(vec![
            WorkloadResource::new("arm", "Resource0", container_workload),
            WorkloadResource::new("kubernetes", "Resource1", kubernetes_deployment),
        ])
    }

    async fn allocate(
        &self,
        _ctx: &PlanContext,
        instantiated: &Instantiated,
        service: &ServiceDeclaration,
    ) -> Result<BTreeMap<String, Value>, String> {
        let mut properties = BTreeMap::new();
        properties.insert(
            "host".to_string(),
            json!(format!("{}.{}", instantiated.component_name, instantiated.application_name.rsplit('/').next().unwrap_or(""))),
        );
        if let Some(port) = service.container_port {
            properties.insert("port".to_string(), json!(port));
        }
        Ok(properties)
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod container_tests;
