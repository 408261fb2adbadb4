//! Hygiene: coding standards enforced at test time.
//!
//! Scans the client crate's production sources for patterns that crash the
//! browser tab, silently drop errors, or bypass the `log` facade. Every
//! budget is zero. A new exception means fixing an old one first.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics abort the wasm module and take the page with them.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "explicit panic" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "explicit panic" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "unfinished stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" };

// Silent loss.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "drops a value unread" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "throws the error away" };

// Output goes through `log`, which `console_log` routes to the console.
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, why: "bypasses the log facade" };
const EPRINTLN: Budget = Budget { pattern: "eprintln!(", max: 0, why: "bypasses the log facade" };

// The browser has one thread; blocking it freezes the page.
const THREAD_SLEEP: Budget = Budget { pattern: "thread::sleep", max: 0, why: "blocks the event loop" };

const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" };

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`. Sibling `*_test.rs` files are skipped.
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
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.file_name().is_some_and(|n| n.to_string_lossy().ends_with("_test.rs"));
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the client crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(budget.pattern)).count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect();
    let total: usize = hits.iter().map(|(_, c)| c).sum();

    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        total <= budget.max,
        "`{}` budget exceeded ({}): found {total}, max {}.\n{listing}",
        budget.pattern,
        budget.why,
        budget.max,
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
fn thread_sleep_budget() {
    check(&THREAD_SLEEP);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}
