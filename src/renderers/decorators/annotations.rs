// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `radius.dev/Annotations@v1alpha1` trait decorator: copies arbitrary
//! caller-supplied key/value pairs onto every Kubernetes resource's pod
//! template annotations.
//!
//! Not present in the original decorator package; added because the trait
//! system (§4.2) is explicitly pluggable and a generic passthrough
//! annotator is the simplest second decorator to validate composition order
//! (§4.4) against something other than Dapr's more involved rules.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::context::PlanContext;
use crate::errors::RenderError;
use crate::model::{Instantiated, ServiceDeclaration, Trait, WorkloadResource};

use super::super::Renderer;

/// The trait kind this decorator recognizes.
pub const TRAIT_KIND: &str = "radius.dev/Annotations@v1alpha1";

/// Wraps a renderer to merge the trait's `properties` onto every Kubernetes
/// resource's pod template annotations. Non-string values are serialized
/// with their `Display`-equivalent JSON representation.
pub struct AnnotationsDecorator {
    inner: Arc<dyn Renderer>,
    trait_: Trait,
}

impl AnnotationsDecorator {
    /// Wraps `inner` with the annotation merge behavior configured by
    /// `trait_`.
    #[must_use]
    pub fn new(inner: Arc<dyn Renderer>, trait_: Trait) -> Self {
        AnnotationsDecorator { inner, trait_ }
    }

    fn annotate(&self, resource: &mut WorkloadResource) {
        if resource.resource_type != "kubernetes" {
            return;
        }

        if let Some(annotations) = resource
            .resource
            .pointer_mut("/spec/template/metadata/annotations")
            .and_then(Value::as_object_mut)
        {
            for (key, value) in &self.trait_.properties {
                let rendered = match value.as_str() {
                    Some(s) => Value::String(s.to_string()),
                    None => Value::String(value.to_string()),
                };
                annotations.insert(key.clone(), rendered);
            }
        }
    }
}

#[async_trait]
impl Renderer for AnnotationsDecorator {
    async fn render(
        &self,
        ctx: &PlanContext,
        instantiated: &Instantiated,
    ) -> Result<Vec<WorkloadResource>, RenderError> {
        let mut resources = self.inner.render(ctx, instantiated).await?;
        for resource in &mut resources {
            self.annotate(resource);
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
#[path = "annotations_tests.rs"]
mod annotations_tests;
