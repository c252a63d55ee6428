// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The data model (§3): revisions, applications, deployments, and actions.
//!
//! Every wire-facing type here derives `serde::{Serialize, Deserialize}`
//! with `camelCase` field names, so a REST layer built on top of this crate
//! can deserialize request bodies directly into these types and serialize
//! planner output directly back out.

pub mod action;
pub mod application;
pub mod deployment;
pub mod revision;
pub mod workload;

pub use action::{deployment_is_no_op, Action, Operation, ServiceBinding};
pub use application::Application;
pub use deployment::{Deployment, DeploymentComponent, DeploymentProperties};
pub use revision::{
    ComponentHistory, ComponentProperties, ComponentRevision, Revision, ServiceDeclaration,
    ServiceReference, Trait,
};
pub use workload::{Instantiated, WorkloadResource};
