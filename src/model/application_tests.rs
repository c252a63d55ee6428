// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn short_name_takes_last_segment() {
    let app = Application::new("radius/myapp");
    assert_eq!(app.short_name(), "myapp");
}

#[test]
fn short_name_falls_back_to_whole_name_without_slash() {
    let app = Application::new("myapp");
    assert_eq!(app.short_name(), "myapp");
}

#[test]
fn short_name_handles_trailing_slash() {
    let app = Application::new("radius/nested/myapp/");
    assert_eq!(app.short_name(), "");
}

#[test]
fn new_application_has_no_components() {
    let app = Application::new("radius/myapp");
    assert!(app.components.is_empty());
}
