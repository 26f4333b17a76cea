//! Report generation from collected statistics.
//!
//! Two document renderers live in the library: the JSON document and
//! the Markdown document. Both are pure functions over [`ProjectStats`]
//! with no I/O and no styling. Terminal rendering (which needs a tty
//! and styling decisions) belongs to the CLI.
//!
//! [`ProjectStats`]: crate::stats::ProjectStats

pub mod json;
pub mod markdown;

pub use json::{json_report, JsonFileRecord, JsonGroup};
pub use markdown::generate_markdown;

/// Format a count with thousands separators ("12,345").
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a part/whole ratio as a percentage with one decimal.
pub fn pct(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", 100.0 * part as f64 / whole as f64)
}
