//! # repostatlib
//!
//! Source-code statistics for multi-platform repositories.
//!
//! The library walks a project tree, classifies each file's lines into
//! code, comments, documentation, and blanks using a small per-grammar
//! scanner, buckets the results by logical project area (platform, docs
//! tree, CI configuration, ...), and derives report-ready aggregates:
//! per-language totals, file-length percentiles, size histograms, and
//! documentation coverage ratios.
//!
//! ## Overview
//!
//! - [`classify`]: per-grammar line classifiers, the only part of the
//!   system with state-machine behavior. Each scanner partitions a
//!   file's lines into exactly four categories.
//! - [`language`]: the registry mapping file extensions to languages
//!   and languages to grammars.
//! - [`analyze`] / [`walk`]: file reading and tree traversal.
//! - [`summary`]: percentiles, histograms, per-language breakdowns.
//! - [`report`]: JSON and Markdown documents.
//!
//! The classifiers are line-oriented pattern scanners, not parsers:
//! they track multi-line comment and docstring spans but do not
//! understand string literals, and accept the resulting imprecision.
//!
//! ## Example
//!
//! ```rust
//! use repostatlib::{walk_project, WalkOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("iOS")).unwrap();
//! fs::write(
//!     dir.path().join("iOS/App.swift"),
//!     "/// Entry point\nstruct App {}\n",
//! )
//! .unwrap();
//!
//! let stats = walk_project(dir.path(), &WalkOptions::new()).unwrap();
//! let ios = &stats.groups["iOS"];
//! assert_eq!(ios.totals().code, 1);
//! assert_eq!(ios.totals().docs, 1);
//! ```

pub mod analyze;
pub mod classify;
pub mod error;
pub mod language;
pub mod report;
pub mod stats;
pub mod summary;
pub mod walk;

pub use analyze::{analyze_file, analyze_source};
pub use classify::{classify_lines, Grammar, LineCounts};
pub use error::RepostatError;
pub use language::Language;
pub use report::{generate_markdown, json_report, JsonFileRecord, JsonGroup};
pub use stats::{FileStats, GroupStats, ProjectStats};
pub use summary::{
    bucket_count, doc_coverage, doc_files, language_breakdown, longest_files, percentile,
    source_files, LanguageSummary, SizeBucket, SIZE_BUCKETS,
};
pub use walk::{walk_project, FilterConfig, GroupRules, WalkOptions};

/// Result type for repostatlib operations
pub type Result<T> = std::result::Result<T, RepostatError>;
