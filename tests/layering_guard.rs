//! Layering guardrails to keep the predicate crate free of CLI concerns.
//!
//! `truthy_core` holds only the predicates and the value model. Argument parsing, logging and diagnostics
//! rendering belong to the `truthy` crate. This test scans `crates/truthy_core/Cargo.toml` and fails if one of
//! those crates appears in its `[dependencies]`.

const CLI_ONLY: &[&str] = &["clap", "miette", "thiserror", "tracing", "tracing-subscriber", "serde"];

fn dependency_names(manifest: &str) -> Vec<String> {
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
fn core_does_not_depend_on_cli_crates() {
    let manifest = include_str!("../crates/truthy_core/Cargo.toml");
    for name in dependency_names(manifest) {
        assert!(
            !CLI_ONLY.contains(&name.as_str()),
            "`{name}` must not appear in truthy_core's [dependencies]; it belongs to the `truthy` crate"
        );
    }
}

#[test]
fn core_keeps_json_support_optional() {
    let manifest = include_str!("../crates/truthy_core/Cargo.toml");
    let line = manifest
        .lines()
        .find(|line| line.trim_start().starts_with("serde_json"))
        .expect("serde_json dependency");
    assert!(line.contains("optional = true"), "serde_json must stay optional: {line}");
}
