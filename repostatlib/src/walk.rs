//! Directory traversal and project-area grouping.
//!
//! The walker prunes excluded directories, routes eligible files to the
//! analyzer, and buckets the resulting records by project area. All
//! grammar knowledge lives in the classifier; this module only decides
//! which files are in scope and which group they belong to.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::analyze::analyze_file;
use crate::error::RepostatError;
use crate::stats::{FileStats, ProjectStats};
use crate::Result;

/// Directories that are never descended into, on top of the
/// hidden-directory rule. Build products, IDE/vendor output, and the
/// asset catalogs by their literal names. The list is a fixed policy,
/// not a pattern: an asset catalog not named here is walked.
const SKIP_DIRS: &[&str] = &[
    "build",
    "DerivedData",
    "Pods",
    "node_modules",
    "__pycache__",
    "xcuserdata",
    "xcshareddata",
    "Assets.xcassets",
    "WatchAssets.xcassets",
    "MacAssets.xcassets",
    "Preview Content",
    "Screenshots",
];

/// Whether a directory should be pruned from the walk.
///
/// Hidden directories are skipped, with one deliberate exception:
/// `.github` is re-admitted so CI configuration is counted.
fn should_skip_dir(name: &str) -> bool {
    if name == ".github" {
        return false;
    }
    name.starts_with('.') || SKIP_DIRS.contains(&name)
}

/// Glob-based include/exclude filtering on relative paths.
///
/// An empty config admits every in-scope file. Excludes are checked
/// before includes; with at least one include pattern, a file must match
/// one of them.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(parse_pattern(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(parse_pattern(pattern)?);
        Ok(self)
    }

    /// Check whether a relative path passes the filter.
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }
        if self.include.is_empty() {
            return true;
        }
        self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn parse_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| RepostatError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Rules mapping a file's relative path to its project-area name.
///
/// The default grouping is by first path component, with files directly
/// under the root going to "Root" and a few well-known directories
/// renamed (".github" becomes "CI/CD", "docs" becomes "Documentation",
/// "scripts" becomes "Scripts"). Callers can add their own renames and
/// mark components whose immediate subdirectory should be part of the
/// label (e.g. splitting an Android tree into app and core areas).
#[derive(Debug, Clone)]
pub struct GroupRules {
    renames: Vec<(String, String)>,
    splits: Vec<String>,
}

impl Default for GroupRules {
    fn default() -> Self {
        Self {
            renames: vec![
                (".github".to_string(), "CI/CD".to_string()),
                ("docs".to_string(), "Documentation".to_string()),
                ("scripts".to_string(), "Scripts".to_string()),
            ],
            splits: Vec::new(),
        }
    }
}

impl GroupRules {
    /// Default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename a top-level directory to a friendlier area name.
    pub fn rename(mut self, component: &str, area: &str) -> Self {
        self.renames.push((component.to_string(), area.to_string()));
        self
    }

    /// Split a top-level directory into one area per immediate
    /// subdirectory ("dir/sub" becomes area "dir sub"; files directly
    /// inside get "dir (misc)").
    pub fn split(mut self, component: &str) -> Self {
        self.splits.push(component.to_string());
        self
    }

    /// Determine the project area for a path relative to the root.
    pub fn project_area(&self, rel: &Path) -> String {
        let mut components = rel.components().filter_map(|c| match c {
            std::path::Component::Normal(os) => os.to_str(),
            _ => None,
        });

        let first = match components.next() {
            Some(name) => name,
            None => return "Root".to_string(),
        };
        let second = components.next();

        // A bare file name at the top level belongs to the root area.
        if second.is_none() && rel.extension().is_some() {
            return "Root".to_string();
        }

        if self.splits.iter().any(|s| s == first) {
            return match second {
                // The second component is a file, not a subdirectory.
                Some(name) if components.next().is_none() && Path::new(name).extension().is_some() => {
                    format!("{} (misc)", first)
                }
                Some(sub) => format!("{} {}", first, sub),
                None => format!("{} (misc)", first),
            };
        }

        for (component, area) in &self.renames {
            if component == first {
                return area.clone();
            }
        }

        first.to_string()
    }
}

/// Options controlling a tree walk.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Glob include/exclude filters
    pub filter: FilterConfig,
    /// Project-area grouping rules
    pub groups: GroupRules,
}

impl WalkOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set the grouping rules.
    pub fn groups(mut self, groups: GroupRules) -> Self {
        self.groups = groups;
        self
    }
}

/// Walk a project tree and collect statistics bucketed by project area.
///
/// Fails only when the root is missing or not a directory; unreadable
/// or out-of-scope files inside the tree are silently skipped. Paths in
/// the returned records are relative to the root. Re-running over the
/// same tree yields identical statistics.
pub fn walk_project(root: impl AsRef<Path>, options: &WalkOptions) -> Result<ProjectStats> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(RepostatError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RepostatError::NotADirectory(root.to_path_buf()));
    }

    let mut stats = ProjectStats::new(root);

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let rel: PathBuf = match path.strip_prefix(root) {
            Ok(r) => r.to_path_buf(),
            Err(_) => path.to_path_buf(),
        };
        if !options.filter.matches(&rel) {
            continue;
        }

        // Unsupported or unreadable files produce no record.
        let file = match analyze_file(path) {
            Some(f) => f,
            None => continue,
        };
        let area = options.groups.project_area(&rel);
        stats.add_file(&area, FileStats::new(rel, file.language, file.counts));
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn sample_tree(root: &Path) {
        write(root, "iOS/App.swift", "struct App {}\n");
        write(root, "iOS/Views/Detail.swift", "/// doc\nstruct Detail {}\n");
        write(root, "Android/app/Main.kt", "fun main() {}\n");
        write(root, "Android/core/Lib.kt", "class Lib\n");
        write(root, "docs/guide.md", "# Guide\n\ntext\n");
        write(root, "scripts/deploy.py", "# deploy\nrun()\n");
        write(root, ".github/workflows/ci.yml", "# ci\non: push\n");
        write(root, "README.md", "# Readme\n");
        write(root, "build/generated.swift", "let x = 1\n");
        write(root, ".hidden/secret.swift", "let y = 2\n");
        write(root, "iOS/notes.txt", "not counted\n");
    }

    #[test]
    fn walk_groups_by_first_component() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let stats = walk_project(temp.path(), &WalkOptions::new()).unwrap();

        assert!(stats.groups.contains_key("iOS"));
        assert!(stats.groups.contains_key("Android"));
        assert_eq!(stats.groups["iOS"].file_count(), 2);
        assert_eq!(stats.groups["Android"].file_count(), 2);
    }

    #[test]
    fn walk_renames_well_known_dirs() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let stats = walk_project(temp.path(), &WalkOptions::new()).unwrap();

        assert!(stats.groups.contains_key("Documentation"));
        assert!(stats.groups.contains_key("Scripts"));
        assert!(stats.groups.contains_key("CI/CD"));
        assert!(stats.groups.contains_key("Root"));
    }

    #[test]
    fn walk_prunes_hidden_and_build_dirs() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let stats = walk_project(temp.path(), &WalkOptions::new()).unwrap();

        for file in stats.all_files() {
            let s = file.path.to_string_lossy().to_string();
            assert!(!s.contains(".hidden"), "hidden dir not pruned: {}", s);
            assert!(!s.starts_with("build"), "build dir not pruned: {}", s);
        }
    }

    #[test]
    fn walk_prunes_asset_catalogs_by_name_only() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "iOS/Assets.xcassets/Contents.json",
            "{\"info\": {}}\n",
        );
        write(
            temp.path(),
            "iOS/Other.xcassets/Contents.json",
            "{\"info\": {}}\n",
        );

        let stats = walk_project(temp.path(), &WalkOptions::new()).unwrap();
        let paths: Vec<String> = stats
            .all_files()
            .map(|f| f.path.to_string_lossy().to_string())
            .collect();

        assert!(!paths.iter().any(|p| p.contains("Assets.xcassets")));
        assert!(paths.iter().any(|p| p.contains("Other.xcassets")));
    }

    #[test]
    fn walk_readmits_dot_github() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let stats = walk_project(temp.path(), &WalkOptions::new()).unwrap();
        let ci = &stats.groups["CI/CD"];
        assert_eq!(ci.file_count(), 1);
        assert_eq!(ci.files[0].language, Language::Yaml);
    }

    #[test]
    fn walk_skips_unsupported_extensions() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let stats = walk_project(temp.path(), &WalkOptions::new()).unwrap();
        assert!(stats.all_files().all(|f| f.path.extension().is_some()
            && f.path.extension().unwrap() != "txt"));
    }

    #[test]
    fn walk_with_split_rule() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let options = WalkOptions::new().groups(GroupRules::new().split("Android"));
        let stats = walk_project(temp.path(), &options).unwrap();

        assert!(stats.groups.contains_key("Android app"));
        assert!(stats.groups.contains_key("Android core"));
        assert!(!stats.groups.contains_key("Android"));
    }

    #[test]
    fn walk_with_exclude_filter() {
        let temp = tempdir().unwrap();
        sample_tree(temp.path());

        let filter = FilterConfig::new().exclude("iOS/**").unwrap();
        let options = WalkOptions::new().filter(filter);
        let stats = walk_project(temp.path(), &options).unwrap();

        assert!(!stats.groups.contains_key("iOS"));
        assert!(stats.groups.contains_key("Android"));
    }

    #[test]
    fn walk_invalid_root_is_fatal() {
        let err = walk_project("/no/such/dir", &WalkOptions::new()).unwrap_err();
        assert!(matches!(err, RepostatError::PathNotFound(_)));
    }

    #[test]
    fn walk_file_root_is_fatal() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("lone.swift");
        fs::write(&file, "let x = 1\n").unwrap();

        let err = walk_project(&file, &WalkOptions::new()).unwrap_err();
        assert!(matches!(err, RepostatError::NotADirectory(_)));
    }

    #[test]
    fn walk_empty_tree_yields_empty_stats() {
        let temp = tempdir().unwrap();
        let stats = walk_project(temp.path(), &WalkOptions::new()).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn invalid_glob_pattern() {
        let result = FilterConfig::new().include("[invalid");
        assert!(matches!(
            result,
            Err(RepostatError::InvalidGlob { .. })
        ));
    }

    #[test]
    fn project_area_for_root_file() {
        let rules = GroupRules::new();
        assert_eq!(rules.project_area(Path::new("README.md")), "Root");
        assert_eq!(rules.project_area(Path::new("iOS/App.swift")), "iOS");
        assert_eq!(rules.project_area(Path::new(".github/ci.yml")), "CI/CD");
    }

    #[test]
    fn project_area_with_custom_rename() {
        let rules = GroupRules::new().rename("Shared", "Shared (Apple)");
        assert_eq!(
            rules.project_area(Path::new("Shared/Model.swift")),
            "Shared (Apple)"
        );
    }

    #[test]
    fn project_area_split_with_direct_file() {
        let rules = GroupRules::new().split("Android");
        assert_eq!(
            rules.project_area(Path::new("Android/settings.kts")),
            "Android (misc)"
        );
        assert_eq!(
            rules.project_area(Path::new("Android/app/src/Main.kt")),
            "Android app"
        );
    }
}
