//! Source hygiene checks for the client crate.
//!
//! Each pattern has a budget over production sources in `src/` (sibling
//! `_test.rs` files are skipped). Budgets only ratchet down. The `let _ =` and
//! `.ok()` allowances cover the non-hydrate stubs and optional browser APIs.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

/// Panics and unfinished code.
const CRASHES: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

/// Errors dropped without inspection.
const DISCARDS: &[Budget] = &[Budget { pattern: "let _ =", max: 11 }, Budget { pattern: ".ok()", max: 15 }];

/// Output that bypasses the browser console logger.
const STRAY_OUTPUT: &[Budget] = &[
    Budget { pattern: "println!(", max: 0 },
    Budget { pattern: "eprintln!(", max: 0 },
    Budget { pattern: "dbg!(", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn check(budgets: &[Budget]) {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut failures = Vec::new();
    for budget in budgets {
        let hits: Vec<(&str, usize)> = files
            .iter()
            .map(|(path, content)| {
                (path.as_str(), content.lines().filter(|line| line.contains(budget.pattern)).count())
            })
            .filter(|(_, count)| *count > 0)
            .collect();
        let found: usize = hits.iter().map(|(_, count)| count).sum();
        if found > budget.max {
            let detail: Vec<String> = hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect();
            failures.push(format!("`{}`: found {found}, max {}\n{}", budget.pattern, budget.max, detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn crash_budget() {
    check(CRASHES);
}

#[test]
fn discard_budget() {
    check(DISCARDS);
}

#[test]
fn stray_output_budget() {
    check(STRAY_OUTPUT);
}
