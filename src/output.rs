//! Output rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form serializes
//! the report as-is: per-issue fields plus a top-level summary. Diagnostics
//! for tolerated errors always go to stderr, in both modes, so they ride
//! alongside the report instead of replacing it.

use crate::models::ScanReport;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

/// Print scan results in the requested format.
pub fn print_scan(report: &ScanReport, output: &str, diagnostics: &[String]) {
    for d in diagnostics {
        eprintln!("{} {}", utils::note_prefix(), d);
    }
    match output {
        "json" => match serde_json::to_string_pretty(&compose_scan_json(report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} failed to serialize report: {}", utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            if report.issues.is_empty() {
                let msg = "No issues found. Codebase looks clean.";
                if color {
                    println!("{} {}", "✔".green().bold(), msg);
                } else {
                    println!("✔ {}", msg);
                }
            } else {
                let head = format!(
                    "Found {} potential issue(s) (advisory, non-blocking):",
                    report.summary.issues
                );
                if color {
                    println!("{} {}", "▲".yellow().bold(), head.bold());
                } else {
                    println!("▲ {}", head);
                }
                for is in &report.issues {
                    let loc = format!("{}:{}", is.file, is.line);
                    if color {
                        println!("  • {} ❲{}❳", loc.bold(), is.rule.yellow());
                    } else {
                        println!("  • {} ❲{}❳", loc, is.rule);
                    }
                    println!("    {}", is.message);
                    println!("    Code: {}\n", is.content);
                }
            }
            let summary = format!(
                "— Summary — issues={} files={} skipped={}",
                report.summary.issues, report.summary.files, report.summary.skipped
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            if !report.issues.is_empty() {
                println!("Build proceeding (review mode only).");
            }
        }
    }
}

/// Compose scan JSON object (pure) for testing purposes.
pub fn compose_scan_json(report: &ScanReport) -> JsonVal {
    // Directly serialize ScanReport as JSON, keeping stable shape
    serde_json::to_value(report).unwrap_or(JsonVal::Null)
}
