//! Per-grammar line classification.
//!
//! This module is the core of the library: a family of small stateful
//! scanners, one per grammar, that partition a file's lines into four
//! mutually exclusive categories: code, comments, documentation, blank.
//!
//! The scanners are line-oriented pattern matchers, not real parsers.
//! They track multi-line comment and docstring spans across line
//! boundaries but make no attempt to understand string literals, so a
//! comment delimiter embedded in a string will be miscounted. That
//! imprecision is accepted.
//!
//! Every scanner upholds the same contract: the decision for a line
//! depends only on the scanner state left by earlier lines and the
//! line's own text, a whitespace-only line is always blank (even inside
//! an open comment block), and the four counters always sum to the
//! number of input lines.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// The classification strategy for a file's lines.
///
/// Grammars form a closed set; dispatch is an explicit `match`, with
/// [`Grammar::Generic`] as the fallback for in-scope file types that
/// have no dedicated scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grammar {
    /// `/* */`, `/** */`, `//`, `///` delimiters (Swift, Kotlin)
    Brace,
    /// `#` comments plus triple-quoted docstrings
    Python,
    /// `<!-- -->` comments, no documentation category (XML)
    Markup,
    /// Every non-blank line is documentation (Markdown)
    Prose,
    /// `#` line comments, no multi-line state (YAML)
    HashLine,
    /// `#` or `//` line comments, no multi-line state
    Generic,
}

/// Line counts for one file: a partition of its lines into four
/// categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    /// Executable/content lines
    pub code: u64,
    /// Ordinary comment lines
    pub comments: u64,
    /// Documentation lines (doc comments, docstrings, prose)
    pub docs: u64,
    /// Whitespace-only lines
    pub blank: u64,
}

impl LineCounts {
    /// Create a new LineCounts with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines; always equals the number of lines classified.
    pub fn total(&self) -> u64 {
        self.code + self.comments + self.docs + self.blank
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            docs: self.docs + other.docs,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.docs += other.docs;
        self.blank += other.blank;
    }
}

/// Classify a sequence of raw lines under the given grammar.
///
/// Lines are consumed in file order. The scan never fails: any input,
/// including empty, classifies to a valid partition. Scanner state is
/// local to this call, so concurrent scans of different files cannot
/// interfere.
pub fn classify_lines<'a, I>(grammar: Grammar, lines: I) -> LineCounts
where
    I: IntoIterator<Item = &'a str>,
{
    match grammar {
        Grammar::Brace => classify_brace(lines),
        Grammar::Python => classify_python(lines),
        Grammar::Markup => classify_markup(lines),
        Grammar::Prose => classify_prose(lines),
        Grammar::HashLine => classify_hash(lines),
        Grammar::Generic => classify_generic(lines),
    }
}

/// Brace-comment grammars (Swift, Kotlin, Gradle KTS).
///
/// Opener precedence is `/**` > `/*` > `///` > `//` > code; the order is
/// observable because the prefixes overlap.
fn classify_brace<'a>(lines: impl IntoIterator<Item = &'a str>) -> LineCounts {
    // Block state held across lines; at most one of the two is set.
    #[derive(Default)]
    struct State {
        in_comment: bool,
        in_doc: bool,
    }

    let mut counts = LineCounts::new();
    let mut state = State::default();

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            counts.blank += 1;
            continue;
        }

        if state.in_comment || state.in_doc {
            if state.in_doc {
                counts.docs += 1;
            } else {
                counts.comments += 1;
            }
            // The closing line still counts toward the open span.
            if trimmed.contains("*/") {
                state = State::default();
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("/**") {
            counts.docs += 1;
            // Single-line /** ... */ does not open a span.
            state.in_doc = !rest.contains("*/");
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("/*") {
            counts.comments += 1;
            state.in_comment = !rest.contains("*/");
            continue;
        }

        if trimmed.starts_with("///") {
            counts.docs += 1;
            continue;
        }

        if trimmed.starts_with("//") {
            counts.comments += 1;
            continue;
        }

        counts.code += 1;
    }

    counts
}

/// Python grammar: `#` comments plus triple-quoted docstrings.
fn classify_python<'a>(lines: impl IntoIterator<Item = &'a str>) -> LineCounts {
    let mut counts = LineCounts::new();
    // The specific delimiter that opened the current docstring; only the
    // matching one may close it.
    let mut docstring: Option<&'static str> = None;

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            counts.blank += 1;
            continue;
        }

        if let Some(delim) = docstring {
            counts.docs += 1;
            if trimmed.contains(delim) {
                docstring = None;
            }
            continue;
        }

        let delim = if trimmed.starts_with("\"\"\"") {
            Some("\"\"\"")
        } else if trimmed.starts_with("'''") {
            Some("'''")
        } else {
            None
        };

        if let Some(delim) = delim {
            counts.docs += 1;
            // Open and close on one line: second occurrence of the same
            // delimiter, and the line is longer than the delimiter alone.
            let single_line = trimmed.matches(delim).count() >= 2 && trimmed.len() > delim.len();
            if !single_line {
                docstring = Some(delim);
            }
            continue;
        }

        if trimmed.starts_with('#') {
            counts.comments += 1;
            continue;
        }

        counts.code += 1;
    }

    counts
}

/// Markup grammar (XML): `<!-- -->` comments only, no documentation
/// category.
fn classify_markup<'a>(lines: impl IntoIterator<Item = &'a str>) -> LineCounts {
    let mut counts = LineCounts::new();
    let mut in_comment = false;

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            counts.blank += 1;
            continue;
        }

        if in_comment {
            counts.comments += 1;
            if trimmed.contains("-->") {
                in_comment = false;
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("<!--") {
            counts.comments += 1;
            in_comment = !rest.contains("-->");
            continue;
        }

        counts.code += 1;
    }

    counts
}

/// Prose grammar (Markdown): every non-blank line is documentation.
fn classify_prose<'a>(lines: impl IntoIterator<Item = &'a str>) -> LineCounts {
    let mut counts = LineCounts::new();

    for line in lines {
        if line.trim().is_empty() {
            counts.blank += 1;
        } else {
            counts.docs += 1;
        }
    }

    counts
}

/// Hash-comment grammar (YAML): `#` line comments, no multi-line state.
fn classify_hash<'a>(lines: impl IntoIterator<Item = &'a str>) -> LineCounts {
    let mut counts = LineCounts::new();

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            counts.blank += 1;
        } else if trimmed.starts_with('#') {
            counts.comments += 1;
        } else {
            counts.code += 1;
        }
    }

    counts
}

/// Generic fallback: `//` or `#` line comments, everything else is code.
fn classify_generic<'a>(lines: impl IntoIterator<Item = &'a str>) -> LineCounts {
    let mut counts = LineCounts::new();

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            counts.blank += 1;
        } else if trimmed.starts_with("//") || trimmed.starts_with('#') {
            counts.comments += 1;
        } else {
            counts.code += 1;
        }
    }

    counts
}
