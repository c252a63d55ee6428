// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use super::*;
use crate::renderers::Registry;

#[test]
fn fresh_context_is_not_cancelled() {
    let ctx = PlanContext::new(Registry::builder().build());
    assert!(ctx.check_cancelled().is_ok());
}

#[test]
fn cancel_propagates_to_check() {
    let ctx = PlanContext::new(Registry::builder().build());
    ctx.cancel();
    assert!(ctx.check_cancelled().is_err());
}

#[test]
fn child_cancellation_follows_parent() {
    let ctx = PlanContext::new(Registry::builder().build());
    let child = ctx.child_cancellation();
    assert!(!child.is_cancelled());
    ctx.cancel();
    assert!(child.is_cancelled());
}

#[test]
fn shared_cancellation_token_cancels_both_contexts() {
    let token = CancellationToken::new();
    let registry = Registry::builder().build();
    let a = PlanContext::with_cancellation(registry.clone(), token.clone());
    let b = PlanContext::with_cancellation(registry, token.clone());
    a.cancel();
    assert!(b.check_cancelled().is_err());
}
