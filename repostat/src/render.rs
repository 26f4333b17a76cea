//! Terminal rendering of the statistics report.
//!
//! Builds the whole report as a `String`; `console` handles styling and
//! disables it automatically when stdout is not a terminal.

use std::fmt::Write;

use console::style;
use repostatlib::report::{pct, thousands};
use repostatlib::summary::{
    bucket_count, doc_coverage, doc_files, language_breakdown, longest_files, percentile,
    source_files, SIZE_BUCKETS,
};
use repostatlib::ProjectStats;

const WIDTH: usize = 120;

fn divider(out: &mut String, c: char) {
    let _ = writeln!(out, "{}", c.to_string().repeat(WIDTH));
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style(title).bold());
    divider(out, '═');
}

fn num(n: u64) -> String {
    format!("{:>8}", thousands(n))
}

/// Render the full report.
pub fn render_report(stats: &ProjectStats, top_n: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style("Code Statistics").bold());
    let _ = writeln!(out, "  Root: {}", stats.root.display());
    divider(&mut out, '═');

    platform_summary(&mut out, stats);
    language_section(&mut out, stats);
    coverage_section(&mut out, stats);
    documentation_section(&mut out, stats);
    length_section(&mut out, stats);
    distribution_section(&mut out, stats);
    longest_section(&mut out, stats, top_n);

    let _ = writeln!(out);
    out
}

fn platform_summary(out: &mut String, stats: &ProjectStats) {
    section(out, "PLATFORM / PROJECT SUMMARY");
    let _ = writeln!(
        out,
        "  {:<20} {:>6} {:>8} {:>8} {:>8} {:>10} {:>8} {:>7}",
        "Platform", "Files", "Total", "Code", "Comments", "Docstrings", "Blank", "Code %"
    );
    divider(out, '─');

    let mut grand_files = 0u64;
    let mut grand = repostatlib::LineCounts::new();

    for group in stats.groups.values() {
        if !group.has_content() {
            continue;
        }
        let src = group.source_files();
        if src.is_empty() {
            continue;
        }
        let totals = group.source_totals();
        let _ = writeln!(
            out,
            "  {:<20} {:>6} {} {} {} {:>10} {} {:>7}",
            group.name,
            src.len(),
            num(totals.total()),
            num(totals.code),
            num(totals.comments),
            thousands(totals.docs),
            num(totals.blank),
            pct(totals.code, totals.total()),
        );
        grand_files += src.len() as u64;
        grand += totals;
    }

    divider(out, '─');
    let _ = writeln!(
        out,
        "  {:<20} {:>6} {} {} {} {:>10} {} {:>7}",
        "TOTAL",
        grand_files,
        num(grand.total()),
        num(grand.code),
        num(grand.comments),
        thousands(grand.docs),
        num(grand.blank),
        pct(grand.code, grand.total()),
    );
}

fn language_section(out: &mut String, stats: &ProjectStats) {
    section(out, "LANGUAGE BREAKDOWN (source code only)");
    let _ = writeln!(
        out,
        "  {:<15} {:>6} {:>8} {:>8} {:>8} {:>10} {:>8} {:>7}",
        "Language", "Files", "Total", "Code", "Comments", "Docstrings", "Blank", "Code %"
    );
    divider(out, '─');

    for summary in language_breakdown(stats) {
        let c = summary.counts;
        let _ = writeln!(
            out,
            "  {:<15} {:>6} {} {} {} {:>10} {} {:>7}",
            summary.language.name(),
            summary.files,
            num(c.total()),
            num(c.code),
            num(c.comments),
            thousands(c.docs),
            num(c.blank),
            pct(c.code, c.total()),
        );
    }
}

fn coverage_section(out: &mut String, stats: &ProjectStats) {
    section(out, "DOCUMENTATION COVERAGE (docstring lines / code lines)");
    let _ = writeln!(
        out,
        "  {:<20} {:>10} {:>15} {:>8}",
        "Platform", "Code Lines", "Docstring Lines", "Ratio"
    );
    divider(out, '─');

    for group in stats.groups.values() {
        if group.source_files().is_empty() {
            continue;
        }
        let totals = group.source_totals();
        let ratio = match doc_coverage(&totals) {
            Some(r) => format!("{:.2}", r),
            None => "N/A".to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<20} {:>10} {:>15} {:>8}",
            group.name,
            thousands(totals.code),
            thousands(totals.docs),
            ratio
        );
    }
}

fn documentation_section(out: &mut String, stats: &ProjectStats) {
    section(out, "DOCUMENTATION FILES (.md)");

    let docs = doc_files(stats);
    if docs.is_empty() {
        let _ = writeln!(out, "  No documentation files found.");
        return;
    }

    let total: u64 = docs.iter().map(|f| f.total_lines()).sum();
    let content: u64 = docs.iter().map(|f| f.counts.docs).sum();
    let blank: u64 = docs.iter().map(|f| f.counts.blank).sum();

    let _ = writeln!(out, "  Total documentation files: {}", docs.len());
    let _ = writeln!(out, "  Total lines:              {}", thousands(total));
    let _ = writeln!(out, "  Content lines:            {}", thousands(content));
    let _ = writeln!(out, "  Blank lines:              {}", thousands(blank));
    let _ = writeln!(out);

    let _ = writeln!(out, "  {:<60} {:>7}", "File", "Lines");
    divider(out, '─');
    for file in docs {
        let _ = writeln!(
            out,
            "  {:<60} {:>7}",
            file.path.display().to_string(),
            thousands(file.total_lines())
        );
    }
}

fn length_section(out: &mut String, stats: &ProjectStats) {
    section(out, "FILE LENGTH STATISTICS (source code files)");
    let _ = writeln!(
        out,
        "  {:<20} {:>6} {:>6} {:>6} {:>6} {:>8} {:>6} {:>6} {:>6}",
        "Platform", "Files", "Min", "P25", "Median", "Avg", "P75", "P90", "Max"
    );
    divider(out, '─');

    for group in stats.groups.values() {
        let src = group.source_files();
        if src.is_empty() {
            continue;
        }
        let mut lengths: Vec<u64> = src.iter().map(|f| f.total_lines()).collect();
        lengths.sort_unstable();
        let avg = lengths.iter().sum::<u64>() as f64 / lengths.len() as f64;
        let _ = writeln!(
            out,
            "  {:<20} {:>6} {:>6} {:>6} {:>6} {:>8.1} {:>6} {:>6} {:>6}",
            group.name,
            lengths.len(),
            lengths[0],
            percentile(&lengths, 25),
            percentile(&lengths, 50),
            avg,
            percentile(&lengths, 75),
            percentile(&lengths, 90),
            lengths[lengths.len() - 1],
        );
    }
}

fn distribution_section(out: &mut String, stats: &ProjectStats) {
    section(out, "FILE SIZE DISTRIBUTION (source code files)");

    let src = source_files(stats);
    if src.is_empty() {
        let _ = writeln!(out, "  No source files found.");
        return;
    }

    let total = src.len();
    let _ = writeln!(out, "  {:<18} {:>7} {:>7}  Bar", "Range", "Count", "%");
    divider(out, '─');

    for bucket in &SIZE_BUCKETS {
        let count = bucket_count(&src, bucket);
        let share = 100.0 * count as f64 / total as f64;
        let bar = "\u{2588}".repeat((share / 2.0) as usize);
        let _ = writeln!(
            out,
            "  {:<18} {:>7} {:>6.1}%  {}",
            bucket.label, count, share, bar
        );
    }
}

fn longest_section(out: &mut String, stats: &ProjectStats, top_n: usize) {
    section(out, &format!("TOP {} LONGEST SOURCE FILES", top_n));
    let _ = writeln!(
        out,
        "  {:<65} {:>6} {:>6} {:>6} {:>5} {:>5}",
        "File", "Lines", "Code", "Doc", "Cmt", "Blk"
    );
    divider(out, '─');

    for file in longest_files(stats, top_n) {
        let _ = writeln!(
            out,
            "  {:<65} {:>6} {:>6} {:>6} {:>5} {:>5}",
            file.path.display().to_string(),
            file.total_lines(),
            file.counts.code,
            file.counts.docs,
            file.counts.comments,
            file.counts.blank,
        );
    }
}
