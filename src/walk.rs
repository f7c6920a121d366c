//! Source-tree traversal with directory pruning and extension filtering.
//!
//! Excluded directories are pruned during descent via `filter_entry`, so they
//! are neither visited nor descended into. Entries are sorted by file name at
//! each level, making traversal order deterministic across filesystems.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect accepted files under one root.
///
/// A root that does not exist (or is not a directory) yields an empty vector;
/// the caller decides whether to surface a diagnostic. Unreadable
/// subdirectories are skipped rather than failing the walk.
pub fn collect_files(root: &Path, exclude_dirs: &[String], extensions: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Never prune the root itself, even if its name is excluded.
            e.depth() == 0
                || !(e.file_type().is_dir()
                    && e.file_name()
                        .to_str()
                        .map(|n| exclude_dirs.iter().any(|x| x == n))
                        .unwrap_or(false))
        })
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && has_accepted_extension(e.path(), extensions))
        .map(|e| e.into_path())
        .collect()
}

fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x == e))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x\n").unwrap();
    }

    fn rel_set(root: &Path, files: &[PathBuf]) -> BTreeSet<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_extension_filter() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("A.java"));
        touch(&root.join("B.kt"));
        touch(&root.join("C.xml"));
        touch(&root.join("README"));
        let files = collect_files(root, &strs(&[]), &strs(&["java", "kt"]));
        assert_eq!(
            rel_set(root, &files),
            ["A.java", "B.kt"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn test_excluded_dirs_are_pruned_not_post_filtered() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("ok/Keep.java"));
        touch(&root.join("build/Gen.java"));
        // Excluded name as an ancestor deeper in the tree must also be pruned.
        touch(&root.join("ok/generated/sub/Deep.java"));
        let files = collect_files(root, &strs(&["build", "generated"]), &strs(&["java"]));
        let rel = rel_set(root, &files);
        assert_eq!(
            rel,
            ["ok/Keep.java"].iter().map(|s| s.to_string()).collect()
        );
        assert!(rel.iter().all(|p| !p.contains("build") && !p.contains("generated")));
    }

    #[test]
    fn test_root_with_excluded_name_is_still_walked() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("build");
        touch(&root.join("Root.java"));
        let files = collect_files(&root, &strs(&["build"]), &strs(&["java"]));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let dir = tempdir().unwrap();
        let files = collect_files(&dir.path().join("nope"), &strs(&[]), &strs(&["java"]));
        assert!(files.is_empty());
    }

    #[test]
    fn test_traversal_is_sorted_and_stable() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("b/Two.java"));
        touch(&root.join("a/One.java"));
        touch(&root.join("Zero.java"));
        let first = collect_files(root, &strs(&[]), &strs(&["java"]));
        let second = collect_files(root, &strs(&[]), &strs(&["java"]));
        assert_eq!(first, second);
        let rel: Vec<String> = first
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(rel, vec!["Zero.java", "a/One.java", "b/Two.java"]);
    }
}
