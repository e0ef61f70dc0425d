//! Architectural Enforcement Integration Tests
//!
//! Source scans that keep the workspace honest:
//! - No sleep() in production code (the rotation is driven by an interval)
//! - The carousel core stays headless (no terminal crates)
//!
//! The helpers live here so each test file stays a list of rules.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, resolved from this crate's manifest directory
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// A line of Rust source outside any `#[cfg(test)]` module
#[derive(Debug, Clone)]
pub struct SourceLine {
    /// File the line came from
    pub path: PathBuf,
    /// 1-based line number
    pub number: usize,
    /// Line with any `//` comment stripped
    pub code: String,
}

/// Every production line under `dir` (relative to the workspace root)
///
/// Everything from a file's first `#[cfg(test)]` onwards is skipped, as are
/// comments.
#[must_use]
pub fn production_lines(dir: &str) -> Vec<SourceLine> {
    let root = workspace_root().join(dir);
    let mut lines = Vec::new();

    for entry in walkdir::WalkDir::new(&root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
    {
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        lines.extend(strip_tests(entry.path(), &content));
    }

    lines
}

/// Production lines of a single file's contents
#[must_use]
pub fn strip_tests(path: &Path, content: &str) -> Vec<SourceLine> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .map(|(idx, line)| SourceLine {
            path: path.to_path_buf(),
            number: idx + 1,
            code: line.split("//").next().unwrap_or(line).to_string(),
        })
        .filter(|l| !l.code.trim().is_empty())
        .collect()
}

impl std::fmt::Display for SourceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.number, self.code.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tests_stops_at_test_module() {
        let src = "fn a() {}\n// note\nfn b() {} // trailing\n#[cfg(test)]\nmod tests {}\n";
        let lines = strip_tests(Path::new("x.rs"), src);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].number, 3);
        assert_eq!(lines[1].code.trim(), "fn b() {}");
    }

    #[test]
    fn test_workspace_root_has_both_crates() {
        let root = workspace_root();
        assert!(root.join("carousel/core/src/lib.rs").exists());
        assert!(root.join("tui/src/app.rs").exists());
    }
}
