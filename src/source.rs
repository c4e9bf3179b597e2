//! Source enumeration for analysis passes.
//!
//! Yields candidate Go files under a repository root with the following skip
//! policy, applied in order:
//! 1. Hard internal ignores: directories named `vendor`, `.git`,
//!    `node_modules`, `mock`, `mocks` are pruned
//! 2. Non-Go files, `_test.go` files and paths carrying a mock marker
//! 3. Caller-supplied exclude globs
//!
//! Walk order is lexical by file name within each directory, so two runs over
//! an unchanged tree enumerate the same files in the same order.

use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::analyzer::AnalyzeError;

/// Directories that are never descended into.
const INTERNAL_IGNORE_DIRS: &[&str] = &["vendor", ".git", "node_modules", "mock", "mocks"];

/// Path fragments that mark generated mocks.
const MOCK_MARKERS: &[&str] = &["/mock", "_mock"];

const GO_EXTENSION: &str = ".go";
const GO_TEST_SUFFIX: &str = "_test.go";

/// A candidate source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as walked (root joined with the relative path)
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated
    pub relative_path: String,
    /// Directory part of `relative_path`; `.` for files at the root
    pub package_dir: String,
}

impl SourceFile {
    fn new(root: &Path, path: &Path) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let mut relative_path = relative.to_string_lossy().replace('\\', "/");
        if relative_path.is_empty() {
            // Root itself is a file
            relative_path = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        let package_dir = match relative_path.rfind('/') {
            Some(idx) => relative_path[..idx].to_string(),
            None => ".".to_string(),
        };

        Self {
            path: path.to_path_buf(),
            relative_path,
            package_dir,
        }
    }
}

/// Caller-supplied enumeration filters.
///
/// The default filter excludes nothing beyond the built-in skip policy.
#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    exclude_patterns: Vec<GlobMatcher>,
}

impl SourceFilter {
    /// Create a filter from exclude globs, relative to the root with `/` separators
    pub fn new(exclude_patterns: &[String]) -> Result<Self, AnalyzeError> {
        let exclude_patterns = exclude_patterns
            .iter()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(|glob| glob.compile_matcher())
                    .map_err(|source| AnalyzeError::InvalidGlob {
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { exclude_patterns })
    }

    /// Whether a root-relative path matches one of the exclude globs
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|matcher| matcher.is_match(relative_path))
    }
}

/// Whether a directory name is pruned from the walk
pub fn is_ignored_dir(name: &str) -> bool {
    INTERNAL_IGNORE_DIRS.contains(&name)
}

/// Whether a root-relative path is a Go source file worth analyzing
pub fn is_go_source(relative_path: &str) -> bool {
    if !relative_path.ends_with(GO_EXTENSION) || relative_path.ends_with(GO_TEST_SUFFIX) {
        return false;
    }

    let rooted = format!("/{}", relative_path);
    !MOCK_MARKERS.iter().any(|marker| rooted.contains(marker))
}

fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_ignored_dir(&entry.file_name().to_string_lossy())
}

/// Enumerate candidate Go files under `root`.
///
/// # Returns
/// Files in walk order
///
/// # Errors
/// Any walk failure (missing root, unreadable directory) aborts enumeration
/// with [`AnalyzeError::Enumeration`].
pub fn enumerate_sources(root: &Path, filter: &SourceFilter) -> Result<Vec<SourceFile>, AnalyzeError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let pruned = is_pruned(entry);
            if pruned {
                tracing::debug!(path = %entry.path().display(), "skipping ignored directory");
            }
            !pruned
        });

    for entry in walker {
        let entry = entry.map_err(|source| AnalyzeError::Enumeration {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let file = SourceFile::new(root, entry.path());
        if !is_go_source(&file.relative_path) || filter.is_excluded(&file.relative_path) {
            continue;
        }
        files.push(file);
    }

    tracing::debug!(root = %root.display(), count = files.len(), "enumerated source files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package x\n").unwrap();
    }

    fn relative_paths(files: &[SourceFile]) -> Vec<&str> {
        files.iter().map(|f| f.relative_path.as_str()).collect()
    }

    #[test]
    fn test_is_go_source() {
        assert!(is_go_source("main.go"));
        assert!(is_go_source("internal/service/user.go"));
        assert!(!is_go_source("internal/service/user_test.go"));
        assert!(!is_go_source("README.md"));
        assert!(!is_go_source("internal/service/user_mock.go"));
        assert!(!is_go_source("internal/mockery/gen.go"));
        assert!(!is_go_source("mockgen/gen.go"));
        assert!(is_go_source("internal/hammock.go"));
    }

    #[test]
    fn test_internal_ignore_dirs() {
        assert!(is_ignored_dir("vendor"));
        assert!(is_ignored_dir(".git"));
        assert!(is_ignored_dir("node_modules"));
        assert!(is_ignored_dir("mocks"));
        assert!(!is_ignored_dir("service"));
    }

    #[test]
    fn test_enumerate_applies_skip_policy_in_walk_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        touch(root, "main.go");
        touch(root, "internal/service/user.go");
        touch(root, "internal/service/user_test.go");
        touch(root, "internal/handler/http.go");
        touch(root, "vendor/lib/lib.go");
        touch(root, "node_modules/pkg/x.go");
        touch(root, "internal/mocks/store.go");
        touch(root, "internal/store/store_mock.go");
        fs::write(root.join("README.md"), "docs").unwrap();

        let files = enumerate_sources(root, &SourceFilter::default()).unwrap();
        assert_eq!(
            relative_paths(&files),
            vec!["internal/handler/http.go", "internal/service/user.go", "main.go"]
        );
        assert_eq!(files[0].package_dir, "internal/handler");
        assert_eq!(files[2].package_dir, ".");
        assert_eq!(files[1].path, root.join("internal/service/user.go"));
    }

    #[test]
    fn test_exclude_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        touch(root, "internal/service/user.go");
        touch(root, "gen/proto/user.pb.go");

        let filter = SourceFilter::new(&["gen/**".to_string()]).unwrap();
        let files = enumerate_sources(root, &filter).unwrap();
        assert_eq!(relative_paths(&files), vec!["internal/service/user.go"]);
    }

    #[test]
    fn test_invalid_glob_is_rejected() {
        let err = SourceFilter::new(&["[unclosed".to_string()]).unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidGlob { .. }));
    }

    #[test]
    fn test_missing_root_is_an_enumeration_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = enumerate_sources(&missing, &SourceFilter::default()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Enumeration { .. }));
    }
}
