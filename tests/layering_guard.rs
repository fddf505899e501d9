//! Layering guardrails for the workspace crates.
//!
//! `sol25_core` is a pure vocabulary crate and must not pick up dependencies, and the syntax crate must not reach
//! back into the driver crate. These tests scan the member manifests and fail if either rule is broken.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/sol25_core/Cargo.toml");
    assert!(
        dependencies(manifest).is_empty(),
        "sol25_core must stay dependency-free, found {:?}",
        dependencies(manifest)
    );
}

#[test]
fn syntax_crate_does_not_depend_on_driver() {
    let manifest = include_str!("../crates/sol25_syntax/Cargo.toml");
    let deps = dependencies(manifest);
    assert!(deps.iter().any(|d| d == "sol25_core"));
    assert!(!deps.iter().any(|d| d == "sol25"), "sol25_syntax must not depend on the sol25 crate");
}
