//! Source hygiene budgets for the compositor crate.
//!
//! Scans the compositor's production sources for patterns that either crash
//! the widget (panics), lose errors the UI is supposed to surface, or pull
//! browser APIs into a crate that must stay testable natively. Each pattern
//! has a budget; the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with `?` or map to ExportError" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with `?` or map to ExportError" },
    Budget { pattern: "panic!(", max: 0, why: "the widget must never abort" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the state instead" },
    Budget { pattern: "todo!(", max: 0, why: "no stubs in shipped code" },
    Budget { pattern: "unimplemented!(", max: 0, why: "no stubs in shipped code" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "export failures must reach the user" },
    Budget { pattern: ".ok()", max: 0, why: "export failures must reach the user" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
    Budget { pattern: "web_sys", max: 0, why: "browser glue belongs to the host crate" },
    Budget { pattern: "println!(", max: 0, why: "report through return values" },
];

/// Production `.rs` files under `src/`, skipping `_test.rs` siblings.
fn source_files() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn sources_are_found() {
    assert!(!source_files().is_empty(), "hygiene scan found no sources; run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
                (count > 0).then(|| format!("  {}: {count}", path.display()))
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|line| line.contains(budget.pattern)).count())
            .sum();
        if total > budget.max {
            failures.push(format!(
                "`{}` budget exceeded: found {total}, max {} ({})\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                hits.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
