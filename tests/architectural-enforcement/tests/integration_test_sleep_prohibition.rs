//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. Rotation is driven
//! by `tokio::time::interval`, and everything else waits on events.
//! **Exceptions**: Frame pacing in `tui/src/app.rs`, test code

use architectural_enforcement::{production_lines, SourceLine};

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let mut violations: Vec<SourceLine> = Vec::new();

    // Core: no exceptions
    violations.extend(production_lines("carousel/core/src").into_iter().filter(is_sleep));

    // TUI: frame pacing only
    let tui = production_lines("tui/src");
    for (idx, line) in tui.iter().enumerate() {
        if is_sleep(line) && !is_frame_pacing(&tui, idx) {
            violations.push(line.clone());
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ ACCEPTABLE sleep uses:");
        eprintln!("  - Frame pacing in tui/src/app.rs while a slide is running");
        eprintln!("  - Test code");
        eprintln!("\n❌ FORBIDDEN:");
        eprintln!("  - Sleep as a rotation timer (use tokio::time::interval)");
        eprintln!("  - Sleep to 'wait' for events");

        panic!(
            "\nFound {} sleep violation(s) in production code.",
            violations.len()
        );
    }
}

fn is_sleep(line: &SourceLine) -> bool {
    line.code.contains("::sleep(") || line.code.contains(".sleep(")
}

/// Sleep in app.rs with frame pacing mentioned within a few lines
fn is_frame_pacing(lines: &[SourceLine], idx: usize) -> bool {
    let line = &lines[idx];
    if !line.path.ends_with("tui/src/app.rs") {
        return false;
    }

    let start = idx.saturating_sub(5);
    let end = (idx + 3).min(lines.len());
    lines[start..end]
        .iter()
        .filter(|l| l.path == line.path)
        .any(|l| {
            let code = l.code.to_lowercase();
            code.contains("frame") || code.contains("fps")
        })
}
