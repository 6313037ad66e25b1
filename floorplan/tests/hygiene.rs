//! Source hygiene for the floor-plan core.
//!
//! Scans `floorplan/src/` for patterns that crash the editor or swallow
//! errors. Every pattern has a budget of zero; the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

// Panics crash the editor mid-gesture and lose the wall being drawn.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, hint: "propagate with `?` or handle the None/Err arm" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, hint: "propagate with `?`" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, hint: "return an EditorError" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, hint: "restructure the match" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, hint: "finish the stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" };

// Silent loss.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, hint: "inspect the result" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, hint: "match on the error" };

// The core logs through `tracing`; stdout is not visible in the browser.
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, hint: "use tracing::debug!" };
const EPRINTLN: Budget = Budget { pattern: "eprintln!(", max: 0, hint: "use tracing::warn!" };

const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the unused item" };

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the floorplan crate root");
    let found = hits(&files, budget.pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        count <= budget.max,
        "`{}` budget exceeded: found {count}, max {} ({}).\n{listing}",
        budget.pattern,
        budget.max,
        budget.hint
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn println_budget() {
    check(&PRINTLN);
}

#[test]
fn eprintln_budget() {
    check(&EPRINTLN);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
