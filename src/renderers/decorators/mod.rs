// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Trait decorators (§4.2): renderers that wrap another renderer to mutate
//! its output based on a trait attached to the component, without the inner
//! renderer knowing the trait exists.
//!
//! Decorators compose by delegation, not inheritance: each one holds an
//! `Arc<dyn Renderer>` for the renderer it wraps and forwards `allocate`
//! unchanged, only touching `render`'s output. [`chain_for`] builds the
//! wrapping chain for one component's trait list in declaration order
//! (§4.4, resolving the open question in §9 on composition order).

pub mod annotations;
pub mod dapr;

use std::sync::Arc;

use crate::model::Trait;

use super::Renderer;

/// Wraps `inner` with a decorator for every trait in `traits` that this
/// crate recognizes, in declaration order, so the first trait in the list
/// becomes the innermost wrapper and the last becomes the outermost.
///
/// Unrecognized trait kinds are forwarded to the executor verbatim (§3) and
/// contribute no wrapping here.
#[must_use]
pub fn chain_for(traits: &[Trait], inner: Arc<dyn Renderer>) -> Arc<dyn Renderer> {
    traits.iter().fold(inner, |renderer, trait_| match trait_.kind.as_str() {
        dapr::TRAIT_KIND => Arc::new(dapr::DaprDecorator::new(renderer, trait_.clone())),
        annotations::TRAIT_KIND => Arc::new(annotations::AnnotationsDecorator::new(renderer, trait_.clone())),
        _ => renderer,
    })
}
