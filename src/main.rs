//! Patlint CLI binary entry point.
//! Delegates to modules for scanning and prints results.

mod cli;
mod config;
mod models;
mod output;
mod rules;
mod scan;
mod utils;
mod walk;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Scan {
            repo_root,
            roots,
            exclude_dirs,
            extensions,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                &roots,
                &exclude_dirs,
                &extensions,
                output.as_deref(),
            );
            // Friendly note if no patlint config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No patlint.toml found; using defaults."
                );
            }
            // Configuration errors abort the run before any scanning
            let ruleset = match rules::RuleSet::compile(rules::default_rules()) {
                Ok(rs) => rs,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            // Missing roots are tolerated individually, but a scan with no
            // valid root at all cannot start.
            if !eff.roots.iter().any(|r| eff.repo_root.join(r).is_dir()) {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "no valid source roots under {} (looked for: {})",
                        eff.repo_root.to_string_lossy(),
                        eff.roots.join(", ")
                    )
                );
                std::process::exit(2);
            }
            let (report, diagnostics) = scan::run_scan(&eff, &ruleset);
            output::print_scan(&report, &eff.output, &diagnostics);
            // Advisory gate: findings never fail the caller. Exit 0 on any
            // completed scan, even with issues present.
        }
    }
}
