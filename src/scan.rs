//! Scan runner: traversal, per-line rule evaluation, and aggregation.
//!
//! Produces a `ScanReport` plus a list of diagnostic strings for tolerated
//! errors (missing roots, unreadable files). Files are scanned in parallel,
//! but issues are reassembled in the deterministic traversal/line/rule order
//! regardless of execution order.

use crate::config::Effective;
use crate::models::{Issue, ScanReport, Summary};
use crate::rules::RuleSet;
use crate::walk;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Scan a single file line by line, 1-based numbering.
///
/// Fails locally when the file cannot be read or is not valid UTF-8; the
/// caller records the error as a diagnostic and moves on. The file handle is
/// scoped to the read and released either way.
pub fn scan_file(path: &Path, display: &str, rules: &RuleSet) -> Result<Vec<Issue>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {}", display, e))?;
    let mut issues = Vec::new();
    for (i, line) in data.lines().enumerate() {
        for rule in rules.evaluate(line) {
            issues.push(Issue {
                file: display.to_string(),
                line: i + 1,
                rule: rule.name.clone(),
                message: rule.message.clone(),
                content: line.trim().to_string(),
            });
        }
    }
    Ok(issues)
}

/// Run the full scan across the configured roots.
///
/// Never fails: per-file and per-root errors are isolated into the returned
/// diagnostics and the run completes. The caller decides the exit code (the
/// gate is advisory and reports success even with issues).
pub fn run_scan(eff: &Effective, rules: &RuleSet) -> (ScanReport, Vec<String>) {
    let mut diagnostics: Vec<String> = Vec::new();
    let mut targets: Vec<PathBuf> = Vec::new();
    for root in &eff.roots {
        let abs = eff.repo_root.join(root);
        if !abs.is_dir() {
            diagnostics.push(format!(
                "source root not found, skipping: {}",
                abs.to_string_lossy()
            ));
            continue;
        }
        targets.extend(walk::collect_files(&abs, &eff.exclude_dirs, &eff.extensions));
    }

    // Repo-relative display paths keep the report portable across machines.
    let labeled: Vec<(PathBuf, String)> = targets
        .into_iter()
        .map(|p| {
            let display = pathdiff::diff_paths(&p, &eff.repo_root)
                .unwrap_or_else(|| p.clone())
                .to_string_lossy()
                .to_string();
            (p, display)
        })
        .collect();

    // Indexed collect preserves input order, so the per-file/per-line/per-rule
    // reporting contract holds no matter how the work is scheduled.
    let per_file: Vec<Result<Vec<Issue>, String>> = labeled
        .par_iter()
        .map(|(path, display)| scan_file(path, display, rules))
        .collect();

    let mut issues: Vec<Issue> = Vec::new();
    let mut files = 0usize;
    let mut skipped = 0usize;
    for res in per_file {
        match res {
            Ok(mut found) => {
                files += 1;
                issues.append(&mut found);
            }
            Err(e) => {
                skipped += 1;
                diagnostics.push(e);
            }
        }
    }

    let report = ScanReport {
        summary: Summary {
            issues: issues.len(),
            files,
            skipped,
        },
        issues,
    };
    (report, diagnostics)
}
