//! Per-file analysis: read, decode, classify.

use std::fs;
use std::path::Path;

use crate::classify::{classify_lines, LineCounts};
use crate::language::Language;
use crate::stats::FileStats;

/// Analyze a single file and return its statistics.
///
/// Returns `None` when the file is out of scope (unrecognized
/// extension) or cannot be read; neither case is an error, the file is
/// simply excluded from all aggregates. Undecodable bytes are replaced
/// lossily and never abort the scan.
pub fn analyze_file(path: impl AsRef<Path>) -> Option<FileStats> {
    let path = path.as_ref();
    let language = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)?;

    let bytes = fs::read(path).ok()?;
    let text = String::from_utf8_lossy(&bytes);
    let counts = analyze_source(language, &text);

    Some(FileStats::new(path.to_path_buf(), language, counts))
}

/// Classify source text under a language's grammar.
///
/// This is the string-level entry point used by [`analyze_file`] and by
/// tests that do not want to touch the filesystem.
pub fn analyze_source(language: Language, text: &str) -> LineCounts {
    classify_lines(language.grammar(), text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn analyzes_swift_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("View.swift");
        fs::write(&path, "/// Doc\nstruct View {}\n\n// note\n").unwrap();

        let stats = analyze_file(&path).unwrap();
        assert_eq!(stats.language, Language::Swift);
        assert_eq!(stats.counts.docs, 1);
        assert_eq!(stats.counts.code, 1);
        assert_eq!(stats.counts.blank, 1);
        assert_eq!(stats.counts.comments, 1);
        assert_eq!(stats.total_lines(), 4);
    }

    #[test]
    fn unsupported_extension_is_skipped() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("binary.obj");
        fs::write(&path, "whatever").unwrap();

        assert!(analyze_file(&path).is_none());
    }

    #[test]
    fn missing_file_is_skipped() {
        assert!(analyze_file("/no/such/file.swift").is_none());
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latin1.py");
        // "# caf\xe9\nx = 1\n" with a latin-1 byte that is invalid UTF-8
        fs::write(&path, b"# caf\xe9\nx = 1\n").unwrap();

        let stats = analyze_file(&path).unwrap();
        assert_eq!(stats.counts.comments, 1);
        assert_eq!(stats.counts.code, 1);
        assert_eq!(stats.total_lines(), 2);
    }

    #[test]
    fn rescan_is_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.kt");
        fs::write(&path, "/**\ndoc\n*/\nfun main() {}\n").unwrap();

        let first = analyze_file(&path).unwrap();
        let second = analyze_file(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn analyze_source_matches_grammar() {
        let counts = analyze_source(Language::Markdown, "# Title\n\ntext\n");
        assert_eq!(counts.docs, 2);
        assert_eq!(counts.blank, 1);
    }
}
