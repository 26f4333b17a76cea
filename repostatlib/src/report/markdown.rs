//! Markdown document: the full report as a fixed sequence of tables.

use crate::report::{pct, thousands};
use crate::stats::ProjectStats;
use crate::summary::{
    bucket_count, doc_coverage, doc_files, longest_files, percentile, source_files,
    language_breakdown, SIZE_BUCKETS,
};

/// Column alignment for [`md_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Build a Markdown table from headers and string rows.
fn md_table(headers: &[&str], rows: &[Vec<String>], alignments: &[Align]) -> String {
    let sep: Vec<&str> = alignments
        .iter()
        .map(|a| match a {
            Align::Left => ":---",
            Align::Right => "---:",
            Align::Center => ":---:",
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("| {} |", headers.join(" | ")));
    lines.push(format!("| {} |", sep.join(" | ")));
    for row in rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.join("\n")
}

fn right_aligned(columns: usize) -> Vec<Align> {
    let mut alignments = vec![Align::Left];
    alignments.extend(std::iter::repeat(Align::Right).take(columns - 1));
    alignments
}

/// Generate the full Markdown report.
///
/// `date` is the generation stamp (e.g. "2026-08-29"); it is passed in
/// so the renderer stays a pure function.
pub fn generate_markdown(stats: &ProjectStats, top_n: usize, date: &str) -> String {
    let mut sections = Vec::new();

    sections.push("# Code Statistics".to_string());
    sections.push(format!("*Generated: {}*\n", date));

    sections.push("## Platform / Project Summary\n".to_string());
    sections.push(platform_summary_table(stats));

    sections.push("\n## Language Breakdown\n".to_string());
    sections.push(language_table(stats));

    sections.push("\n## Documentation Coverage\n".to_string());
    sections.push("Ratio of docstring/doc-comment lines to code lines per platform.\n".to_string());
    sections.push(coverage_table(stats));

    sections.push("\n## Documentation Files (.md)\n".to_string());
    sections.push(doc_files_section(stats));

    sections.push("\n## File Length Statistics\n".to_string());
    sections
        .push("Percentile distribution of source file lengths (in lines) per platform.\n".to_string());
    sections.push(length_table(stats));

    sections.push("\n## File Size Distribution\n".to_string());
    sections.push(histogram_table(stats));

    sections.push(format!("\n## Top {} Longest Source Files\n", top_n));
    sections.push(longest_table(stats, top_n));

    sections.push(String::new());
    sections.join("\n\n")
}

fn platform_summary_table(stats: &ProjectStats) -> String {
    let headers = [
        "Platform",
        "Files",
        "Total",
        "Code",
        "Comments",
        "Docstrings",
        "Blank",
        "Code %",
    ];
    let mut rows = Vec::new();
    let mut grand_files = 0u64;
    let mut grand = crate::classify::LineCounts::new();

    for group in stats.groups.values() {
        if !group.has_content() {
            continue;
        }
        let src = group.source_files();
        if src.is_empty() {
            continue;
        }
        let totals = group.source_totals();
        rows.push(vec![
            group.name.clone(),
            src.len().to_string(),
            thousands(totals.total()),
            thousands(totals.code),
            thousands(totals.comments),
            thousands(totals.docs),
            thousands(totals.blank),
            pct(totals.code, totals.total()),
        ]);
        grand_files += src.len() as u64;
        grand += totals;
    }

    rows.push(vec![
        "**TOTAL**".to_string(),
        format!("**{}**", grand_files),
        format!("**{}**", thousands(grand.total())),
        format!("**{}**", thousands(grand.code)),
        format!("**{}**", thousands(grand.comments)),
        format!("**{}**", thousands(grand.docs)),
        format!("**{}**", thousands(grand.blank)),
        format!("**{}**", pct(grand.code, grand.total())),
    ]);

    md_table(&headers, &rows, &right_aligned(headers.len()))
}

fn language_table(stats: &ProjectStats) -> String {
    let headers = [
        "Language",
        "Files",
        "Total",
        "Code",
        "Comments",
        "Docstrings",
        "Blank",
        "Code %",
    ];
    let rows: Vec<Vec<String>> = language_breakdown(stats)
        .iter()
        .map(|s| {
            vec![
                s.language.name().to_string(),
                s.files.to_string(),
                thousands(s.counts.total()),
                thousands(s.counts.code),
                thousands(s.counts.comments),
                thousands(s.counts.docs),
                thousands(s.counts.blank),
                pct(s.counts.code, s.counts.total()),
            ]
        })
        .collect();

    md_table(&headers, &rows, &right_aligned(headers.len()))
}

fn coverage_table(stats: &ProjectStats) -> String {
    let headers = ["Platform", "Code Lines", "Docstring Lines", "Ratio"];
    let mut rows = Vec::new();

    for group in stats.groups.values() {
        if group.source_files().is_empty() {
            continue;
        }
        let totals = group.source_totals();
        let ratio = match doc_coverage(&totals) {
            Some(r) => format!("{:.2}", r),
            None => "N/A".to_string(),
        };
        rows.push(vec![
            group.name.clone(),
            thousands(totals.code),
            thousands(totals.docs),
            ratio,
        ]);
    }

    md_table(&headers, &rows, &right_aligned(headers.len()))
}

fn doc_files_section(stats: &ProjectStats) -> String {
    let docs = doc_files(stats);
    if docs.is_empty() {
        return "No documentation files found.".to_string();
    }

    let total: u64 = docs.iter().map(|f| f.total_lines()).sum();
    let content: u64 = docs.iter().map(|f| f.counts.docs).sum();
    let blank: u64 = docs.iter().map(|f| f.counts.blank).sum();

    let mut out = String::new();
    out.push_str(&format!("- **Total files:** {}\n", docs.len()));
    out.push_str(&format!("- **Total lines:** {}\n", thousands(total)));
    out.push_str(&format!("- **Content lines:** {}\n", thousands(content)));
    out.push_str(&format!("- **Blank lines:** {}\n\n", thousands(blank)));

    let rows: Vec<Vec<String>> = docs
        .iter()
        .map(|f| {
            vec![
                format!("`{}`", f.path.display()),
                thousands(f.total_lines()),
            ]
        })
        .collect();
    out.push_str(&md_table(&["File", "Lines"], &rows, &[Align::Left, Align::Right]));
    out
}

fn length_table(stats: &ProjectStats) -> String {
    let headers = [
        "Platform", "Files", "Min", "P25", "Median", "Avg", "P75", "P90", "Max",
    ];
    let mut rows = Vec::new();

    for group in stats.groups.values() {
        let src = group.source_files();
        if src.is_empty() {
            continue;
        }
        let mut lengths: Vec<u64> = src.iter().map(|f| f.total_lines()).collect();
        lengths.sort_unstable();
        let avg = lengths.iter().sum::<u64>() as f64 / lengths.len() as f64;
        rows.push(vec![
            group.name.clone(),
            lengths.len().to_string(),
            lengths[0].to_string(),
            percentile(&lengths, 25).to_string(),
            percentile(&lengths, 50).to_string(),
            format!("{:.1}", avg),
            percentile(&lengths, 75).to_string(),
            percentile(&lengths, 90).to_string(),
            lengths[lengths.len() - 1].to_string(),
        ]);
    }

    md_table(&headers, &rows, &right_aligned(headers.len()))
}

fn histogram_table(stats: &ProjectStats) -> String {
    let src = source_files(stats);
    if src.is_empty() {
        return "No source files found.".to_string();
    }

    let total = src.len();
    let rows: Vec<Vec<String>> = SIZE_BUCKETS
        .iter()
        .map(|bucket| {
            let count = bucket_count(&src, bucket);
            let share = 100.0 * count as f64 / total as f64;
            let bar = "\u{2588}".repeat((share / 2.0) as usize);
            vec![
                bucket.label.to_string(),
                count.to_string(),
                format!("{:.1}%", share),
                bar,
            ]
        })
        .collect();

    md_table(
        &["Range", "Count", "%", ""],
        &rows,
        &[Align::Left, Align::Right, Align::Right, Align::Left],
    )
}

fn longest_table(stats: &ProjectStats, top_n: usize) -> String {
    let headers = ["File", "Lines", "Code", "Doc", "Comments", "Blank"];
    let rows: Vec<Vec<String>> = longest_files(stats, top_n)
        .iter()
        .map(|f| {
            vec![
                format!("`{}`", f.path.display()),
                f.total_lines().to_string(),
                f.counts.code.to_string(),
                f.counts.docs.to_string(),
                f.counts.comments.to_string(),
                f.counts.blank.to_string(),
            ]
        })
        .collect();

    md_table(&headers, &rows, &right_aligned(headers.len()))
}
