// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The Dapr trait decorator, ported from the original `dapr` workload
//! decorator: annotates a component's Kubernetes pod template so the Dapr
//! sidecar injector picks it up.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::context::PlanContext;
use crate::errors::RenderError;
use crate::model::{Instantiated, ServiceDeclaration, Trait, WorkloadResource};

use super::super::Renderer;

/// The trait kind this decorator recognizes.
pub const TRAIT_KIND: &str = "dapr.io/App@v1alpha1";

const ANNOTATION_ENABLED: &str = "dapr.io/enabled";
const ANNOTATION_APP_ID: &str = "dapr.io/app-id";
const ANNOTATION_APP_PORT: &str = "dapr.io/app-port";
const ANNOTATION_CONFIG: &str = "dapr.io/config";
const ANNOTATION_PROTOCOL: &str = "dapr.io/protocol";

/// Wraps a renderer to annotate its Kubernetes workload resources with the
/// Dapr sidecar-injector annotations declared by a `dapr.io/App@v1alpha1`
/// trait.
///
/// If `appId` is blank in the trait's properties, the component's own name
/// is used, matching the original decorator's default.
pub struct DaprDecorator {
    inner: Arc<dyn Renderer>,
    trait_: Trait,
}

impl DaprDecorator {
    /// Wraps `inner` with Dapr annotation behavior configured by `trait_`.
    #[must_use]
    pub fn new(inner: Arc<dyn Renderer>, trait_: Trait) -> Self {
        DaprDecorator { inner, trait_ }
    }

    fn app_id(&self, component_name: &str) -> String {
        match self.trait_.properties.get("appId").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => component_name.to_string(),
        }
    }

    fn annotate(&self, component_name: &str, resource: &mut WorkloadResource) {
        if resource.resource_type != "kubernetes" {
            return;
        }

        let app_id = self.app_id(component_name);
        let properties = &self.trait_.properties;

        let annotations = resource
            .resource
            .pointer_mut("/spec/template/metadata/annotations")
            .and_then(Value::as_object_mut);

        if let Some(annotations) = annotations {
            annotations.insert(ANNOTATION_ENABLED.to_string(), Value::String("true".to_string()));
            annotations.insert(ANNOTATION_APP_ID.to_string(), Value::String(app_id));

            if let Some(port) = properties.get("appPort").and_then(Value::as_u64) {
                if port != 0 {
                    annotations.insert(ANNOTATION_APP_PORT.to_string(), Value::String(port.to_string()));
                }
            }
            if let Some(config) = properties.get("config").and_then(Value::as_str) {
                if !config.is_empty() {
                    annotations.insert(ANNOTATION_CONFIG.to_string(), Value::String(config.to_string()));
                }
            }
            if let Some(protocol) = properties.get("protocol").and_then(Value::as_str) {
                if !protocol.is_empty() {
                    annotations.insert(ANNOTATION_PROTOCOL.to_string(), Value::String(protocol.to_string()));
                }
            }
        }

        // HACK ported from the original decorator: App-kind resources on the
        // k8se GVK need an explicit minimum replica count or the scaler
        // leaves them at zero.
        if resource.resource.get("kind").and_then(Value::as_str) == Some("App")
            && resource.resource.get("apiVersion").and_then(Value::as_str) == Some("k8se.microsoft.com/v1alpha1")
        {
            if let Some(spec) = resource.resource.pointer_mut("/spec").and_then(Value::as_object_mut) {
                let scale_options = spec
                    .entry("scaleOptions".to_string())
                    .or_insert_with(|| Value::Object(serde_json::Map::new()));
                if let Some(scale_options) = scale_options.as_object_mut() {
                    scale_options.insert("minReplicaCount".to_string(), Value::from(1));
                }
            }
        }
    }
}

#[async_trait]
impl Renderer for DaprDecorator {
    async fn render(
        &self,
        ctx: &PlanContext,
        instantiated: &Instantiated,
    ) -> Result<Vec<WorkloadResource>, RenderError> {
        let mut resources = self.inner.render(ctx, instantiated).await?;
        for resource in &mut resources {
            self.annotate(&instantiated.component_name, resource);
        }
        Ok(resources)
    }

    async fn allocate(
        &self,
        ctx: &PlanContext,
        instantiated: &Instantiated,
        service: &ServiceDeclaration,
    ) -> Result<BTreeMap<String, Value>, String> {
        self.inner.allocate(ctx, instantiated, service).await
    }
}

#[cfg(test)]
#[path = "dapr_tests.rs"]
mod dapr_tests;
