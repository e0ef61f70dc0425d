//! Integration Test: Headless Core
//!
//! **Policy**: `carousel-core` owns the rotation model and must stay usable
//! without a terminal. Rendering crates belong to the TUI only.

use std::fs;

use architectural_enforcement::{production_lines, workspace_root};

const TERMINAL_CRATES: [&str; 2] = ["ratatui", "crossterm"];

#[test]
fn test_core_sources_do_not_use_terminal_crates() {
    let violations: Vec<_> = production_lines("carousel/core/src")
        .into_iter()
        .filter(|line| {
            TERMINAL_CRATES
                .iter()
                .any(|krate| line.code.contains(&format!("{krate}::")))
        })
        .collect();

    assert!(
        violations.is_empty(),
        "core imports terminal crates:\n{}",
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn test_core_manifest_does_not_depend_on_terminal_crates() {
    let manifest = fs::read_to_string(workspace_root().join("carousel/core/Cargo.toml"))
        .expect("core manifest should be readable");

    for krate in TERMINAL_CRATES {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(krate)),
            "carousel-core depends on {krate}"
        );
    }
}

#[test]
fn test_tui_drives_rotation_through_core() {
    // The TUI must not keep its own rotation index
    let offenders: Vec<_> = production_lines("tui/src")
        .into_iter()
        .filter(|l| l.code.contains("rem_euclid") || l.code.contains("% len"))
        .collect();

    assert!(offenders.is_empty(), "index arithmetic in TUI: {offenders:?}");
}
