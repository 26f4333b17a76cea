//! Core data structures for per-file and per-group statistics.

use crate::classify::LineCounts;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Statistics for a single file.
///
/// Created once per scan and never mutated; the four category counters
/// inside `counts` partition the file's lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path relative to the scanned root
    pub path: PathBuf,
    /// Logical language tag
    pub language: Language,
    /// Classified line counts
    pub counts: LineCounts,
}

impl FileStats {
    /// Create new file stats
    pub fn new(path: PathBuf, language: Language, counts: LineCounts) -> Self {
        Self {
            path,
            language,
            counts,
        }
    }

    /// Total line count of the file
    pub fn total_lines(&self) -> u64 {
        self.counts.total()
    }

    /// Whether this file counts as source code
    pub fn is_source(&self) -> bool {
        self.language.is_source()
    }

    /// Whether this file is documentation
    pub fn is_doc(&self) -> bool {
        self.language.is_doc()
    }
}

/// Aggregated statistics for one project area (platform, app target,
/// docs tree, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Group name (e.g. "iOS", "Documentation", "CI/CD")
    pub name: String,
    /// Per-file records, in scan order
    pub files: Vec<FileStats>,
}

impl GroupStats {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// Append a file record. Records are only ever appended, never
    /// replaced.
    pub fn add_file(&mut self, file: FileStats) {
        self.files.push(file);
    }

    /// Number of files in the group
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Summed line counts over all files
    pub fn totals(&self) -> LineCounts {
        self.files
            .iter()
            .fold(LineCounts::new(), |acc, f| acc + f.counts)
    }

    /// Summed line counts over source files only
    pub fn source_totals(&self) -> LineCounts {
        self.source_files()
            .into_iter()
            .fold(LineCounts::new(), |acc, f| acc + f.counts)
    }

    /// Source-code files in this group
    pub fn source_files(&self) -> Vec<&FileStats> {
        self.files.iter().filter(|f| f.is_source()).collect()
    }

    /// Whether any file in the group carries code, comment, or doc
    /// lines. A group of purely blank files has no content and is left
    /// out of the platform summary.
    pub fn has_content(&self) -> bool {
        let totals = self.totals();
        totals.code > 0 || totals.comments > 0 || totals.docs > 0
    }

    /// Total lines across all files
    pub fn total_lines(&self) -> u64 {
        self.totals().total()
    }

    /// Sorted file lengths, for percentile queries
    pub fn file_lengths(&self) -> Vec<u64> {
        let mut lengths: Vec<u64> = self.files.iter().map(|f| f.total_lines()).collect();
        lengths.sort_unstable();
        lengths
    }

    /// Mean file length, 0.0 when the group is empty
    pub fn avg_file_length(&self) -> f64 {
        if self.files.is_empty() {
            return 0.0;
        }
        self.total_lines() as f64 / self.files.len() as f64
    }
}

/// All statistics collected from one tree walk, bucketed by project
/// area. This is the single accumulating collection in the system; it
/// is append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    /// The scanned root
    pub root: PathBuf,
    /// Project areas, keyed and iterated in name order
    pub groups: BTreeMap<String, GroupStats>,
}

impl ProjectStats {
    /// Create an empty collection for the given root
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            groups: BTreeMap::new(),
        }
    }

    /// Append a file record to the named group, creating the group on
    /// first use.
    pub fn add_file(&mut self, group: &str, file: FileStats) {
        self.groups
            .entry(group.to_string())
            .or_insert_with(|| GroupStats::new(group))
            .add_file(file);
    }

    /// True when no eligible file was found anywhere
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every file record across all groups
    pub fn all_files(&self) -> impl Iterator<Item = &FileStats> {
        self.groups.values().flat_map(|g| g.files.iter())
    }
}
