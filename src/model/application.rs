// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The [`Application`] record: an application's name and the revision
//! history of every component registered with it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::revision::ComponentHistory;

/// A named collection of components and their revision histories.
///
/// Component names are expected to be unique, non-empty, and stable for the
/// life of the application; the planner does not itself enforce uniqueness
/// beyond what the underlying `BTreeMap` already guarantees (a duplicate
/// insert simply overwrites), since component registration happens upstream
/// of the planner (§1: persistence is out of scope).
///
/// Components are stored in a `BTreeMap` rather than a hash map so that
/// iteration order — and therefore log and metrics output — is
/// deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// The application's fully qualified name, e.g. `"radius/myapp"`. The
    /// last `/`-separated segment is used as the rendered workload's
    /// namespace (§4.6).
    pub name: String,
    /// All components registered with this application, keyed by component
    /// name.
    #[serde(default)]
    pub components: BTreeMap<String, ComponentHistory>,
}

impl Application {
    /// Creates an empty application with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Application {
            name: name.into(),
            components: BTreeMap::new(),
        }
    }

    /// Returns the last `/`-separated segment of [`Application::name`], used
    /// as a rendered workload's namespace (§4.6).
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
#[path = "application_tests.rs"]
mod application_tests;
