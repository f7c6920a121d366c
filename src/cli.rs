//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "patlint",
    version,
    about = "Patlint — rule-based line-level code scanner",
    long_about = "Patlint — a tiny, fast advisory scanner for heuristic anti-pattern checks.\n\nWalks the configured source roots, applies a fixed set of line-level regex rules, and reports findings without failing the build.\n\nConfiguration precedence: CLI > patlint.toml > defaults.",
    after_help = "Examples:\n  patlint scan\n  patlint scan --root src/main/java --root src/test/java\n  patlint scan --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current patlint version.")]
    Version,
    /// Scan source roots with the built-in rule set
    #[command(
        about = "Run the advisory scan",
        long_about = "Scan every accepted file under the source roots with the built-in rules. Findings never fail the run; the exit code is 0 on any completed scan.",
        after_help = "Examples:\n  patlint scan\n  patlint scan --root lib/src --ext java --ext kt --output json"
    )]
    Scan {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long = "root", help = "Source root, relative to the repo root (repeatable)")]
        roots: Vec<String>,
        #[arg(long = "exclude", help = "Directory name to prune during traversal (repeatable)")]
        exclude_dirs: Vec<String>,
        #[arg(long = "ext", help = "Accepted file extension, without dot (repeatable)")]
        extensions: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
