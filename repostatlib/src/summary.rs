//! Derived aggregates: per-language totals, percentiles, size
//! histograms, documentation coverage.
//!
//! Everything here is computed from collected [`ProjectStats`] records;
//! sums and collections are commutative over files, so results do not
//! depend on scan order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::LineCounts;
use crate::language::Language;
use crate::stats::{FileStats, ProjectStats};

/// Per-language totals over source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub language: Language,
    pub files: u64,
    pub counts: LineCounts,
}

/// Aggregate line counts by language, source files only, sorted by
/// total lines descending.
pub fn language_breakdown(stats: &ProjectStats) -> Vec<LanguageSummary> {
    let mut by_language: BTreeMap<Language, (u64, LineCounts)> = BTreeMap::new();

    for file in stats.all_files().filter(|f| f.is_source()) {
        let entry = by_language
            .entry(file.language)
            .or_insert((0, LineCounts::new()));
        entry.0 += 1;
        entry.1 += file.counts;
    }

    let mut summaries: Vec<LanguageSummary> = by_language
        .into_iter()
        .map(|(language, (files, counts))| LanguageSummary {
            language,
            files,
            counts,
        })
        .collect();
    summaries.sort_by_key(|s| std::cmp::Reverse(s.counts.total()));
    summaries
}

/// The p-th percentile of a sorted list of file lengths, nearest-rank
/// with truncation. Returns 0 for an empty list.
pub fn percentile(sorted_lengths: &[u64], p: u64) -> u64 {
    if sorted_lengths.is_empty() {
        return 0;
    }
    let idx = (sorted_lengths.len() as u64 * p / 100) as usize;
    sorted_lengths[idx.min(sorted_lengths.len() - 1)]
}

/// One bin of the file-size histogram.
#[derive(Debug, Clone, Copy)]
pub struct SizeBucket {
    pub low: u64,
    pub high: u64,
    pub label: &'static str,
}

/// Histogram bins for file lengths. Buckets are half-open `(low, high]`
/// except the first, which starts at one line.
pub const SIZE_BUCKETS: [SizeBucket; 7] = [
    SizeBucket {
        low: 0,
        high: 50,
        label: "1-50 lines",
    },
    SizeBucket {
        low: 50,
        high: 100,
        label: "51-100 lines",
    },
    SizeBucket {
        low: 100,
        high: 200,
        label: "101-200 lines",
    },
    SizeBucket {
        low: 200,
        high: 300,
        label: "201-300 lines",
    },
    SizeBucket {
        low: 300,
        high: 500,
        label: "301-500 lines",
    },
    SizeBucket {
        low: 500,
        high: 1000,
        label: "501-1000 lines",
    },
    SizeBucket {
        low: 1000,
        high: u64::MAX,
        label: "1000+ lines",
    },
];

/// Count files whose length falls into the bucket.
pub fn bucket_count(files: &[&FileStats], bucket: &SizeBucket) -> usize {
    files
        .iter()
        .filter(|f| {
            let n = f.total_lines();
            if bucket.low == 0 {
                n <= bucket.high
            } else {
                n > bucket.low && n <= bucket.high
            }
        })
        .count()
}

/// All source files across every group.
pub fn source_files(stats: &ProjectStats) -> Vec<&FileStats> {
    stats.all_files().filter(|f| f.is_source()).collect()
}

/// All documentation files, sorted by length descending.
pub fn doc_files(stats: &ProjectStats) -> Vec<&FileStats> {
    let mut files: Vec<&FileStats> = stats.all_files().filter(|f| f.is_doc()).collect();
    files.sort_by_key(|f| std::cmp::Reverse(f.total_lines()));
    files
}

/// The longest source files across all groups, length descending.
pub fn longest_files(stats: &ProjectStats, top_n: usize) -> Vec<&FileStats> {
    let mut files = source_files(stats);
    files.sort_by_key(|f| std::cmp::Reverse(f.total_lines()));
    files.truncate(top_n);
    files
}

/// Documentation coverage for a set of counts: doc lines per code line.
/// `None` when there is no code to cover.
pub fn doc_coverage(counts: &LineCounts) -> Option<f64> {
    if counts.code == 0 {
        None
    } else {
        Some(counts.docs as f64 / counts.code as f64)
    }
}
