//! Configuration discovery and effective settings resolution.
//!
//! Patlint reads `patlint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Rules are never read from the config file; only where to scan and how to
//! print can be overridden. Defaults (embedded):
//! - `roots`: `["app/src/main/java"]`
//! - `exclude_dirs`: `["build", "generated"]`
//! - `extensions`: `["java", "kt"]`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `patlint.toml|yaml`.
pub struct PatlintConfig {
    pub roots: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration passed into the scan engine.
pub struct Effective {
    pub repo_root: PathBuf,
    pub roots: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub extensions: Vec<String>,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `patlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("patlint.toml").exists()
            || cur.join("patlint.yaml").exists()
            || cur.join("patlint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PatlintConfig` from `patlint.toml` or `patlint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<PatlintConfig> {
    let toml_path = root.join("patlint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: PatlintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["patlint.yaml", "patlint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: PatlintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_roots: &[String],
    cli_exclude_dirs: &[String],
    cli_extensions: &[String],
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let roots = if !cli_roots.is_empty() {
        cli_roots.to_vec()
    } else {
        cfg.roots
            .unwrap_or_else(|| vec!["app/src/main/java".to_string()])
    };
    let exclude_dirs = if !cli_exclude_dirs.is_empty() {
        cli_exclude_dirs.to_vec()
    } else {
        cfg.exclude_dirs
            .unwrap_or_else(|| vec!["build".to_string(), "generated".to_string()])
    };
    let extensions = if !cli_extensions.is_empty() {
        cli_extensions.to_vec()
    } else {
        cfg.extensions
            .unwrap_or_else(|| vec!["java".to_string(), "kt".to_string()])
    };
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        roots,
        exclude_dirs,
        extensions,
        output,
    }
}
