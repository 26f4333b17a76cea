//! JSON document: a mapping from project-area name to its aggregate
//! counts and per-file records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::stats::{GroupStats, ProjectStats};

/// One file entry in a group's `file_list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFileRecord {
    pub path: String,
    pub language: Language,
    pub total: u64,
    pub code: u64,
    pub comments: u64,
    pub docstrings: u64,
    pub blank: u64,
}

/// Aggregates for one project area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonGroup {
    pub files: u64,
    pub total_lines: u64,
    pub code_lines: u64,
    pub comment_lines: u64,
    pub docstring_lines: u64,
    pub blank_lines: u64,
    pub avg_file_length: f64,
    pub file_list: Vec<JsonFileRecord>,
}

impl JsonGroup {
    fn from_group(group: &GroupStats) -> Self {
        let totals = group.totals();
        Self {
            files: group.file_count() as u64,
            total_lines: totals.total(),
            code_lines: totals.code,
            comment_lines: totals.comments,
            docstring_lines: totals.docs,
            blank_lines: totals.blank,
            avg_file_length: round1(group.avg_file_length()),
            file_list: group
                .files
                .iter()
                .map(|f| JsonFileRecord {
                    path: f.path.to_string_lossy().to_string(),
                    language: f.language,
                    total: f.total_lines(),
                    code: f.counts.code,
                    comments: f.counts.comments,
                    docstrings: f.counts.docs,
                    blank: f.counts.blank,
                })
                .collect(),
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Build the JSON document for the whole project, groups in name order.
pub fn json_report(stats: &ProjectStats) -> BTreeMap<String, JsonGroup> {
    stats
        .groups
        .iter()
        .map(|(name, group)| (name.clone(), JsonGroup::from_group(group)))
        .collect()
}
