//! # repostat
//!
//! A CLI tool for gathering source-code statistics across a multi-platform
//! repository.
//!
//! ## Overview
//!
//! repostat is built on top of repostatlib and provides a command-line
//! interface for scanning a project tree, classifying every line of every
//! recognized file as code, comment, documentation or blank, and reporting
//! the results per project area.
//!
//! ## Features
//!
//! - **Line classification**: code, comments, docstrings and blank lines,
//!   with comment grammars per language
//! - **Project areas**: top-level directories become report groups
//! - **Glob filtering**: include/exclude files with glob patterns
//! - **Multiple output formats**: terminal table (default), JSON, Markdown
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory
//! repostat
//!
//! # Scan a specific root, show the 10 longest files
//! repostat ~/src/myproject --top 10
//!
//! # Machine-readable output
//! repostat . --json
//!
//! # Write a Markdown report (defaults to code_stats.md)
//! repostat . --markdown
//! repostat . --markdown report.md
//! repostat . --markdown -          # to stdout
//!
//! # Filter files with glob patterns
//! repostat . --include "iOS/**" --exclude "**/Generated/**"
//! ```

mod render;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use repostatlib::{generate_markdown, json_report, walk_project, FilterConfig, WalkOptions};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("repostat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Source-code statistics per project area: code, comments, docstrings, blanks")
        .arg(
            Arg::new("root")
                .help("Repository root to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("top")
                .short('t')
                .long("top")
                .value_parser(clap::value_parser!(usize))
                .default_value("20")
                .help("Number of files to show in the longest-files section"),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit the report as JSON on stdout"),
        )
        .arg(
            Arg::new("markdown")
                .short('m')
                .long("markdown")
                .num_args(0..=1)
                .default_missing_value("code_stats.md")
                .value_name("FILE")
                .help("Write a Markdown report (FILE defaults to code_stats.md, '-' for stdout)"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .group(ArgGroup::new("format").args(["json", "markdown"]))
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let root = matches
        .get_one::<String>("root")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let top_n = *matches.get_one::<usize>("top").unwrap_or(&20);
    let filter = build_filter(matches)?;

    let options = WalkOptions::new().filter(filter);
    let stats = walk_project(root, &options)
        .with_context(|| format!("failed to scan {}", root))?;

    if stats.is_empty() {
        println!("No source files found.");
        return Ok(());
    }

    if matches.get_flag("json") {
        let report = json_report(&stats);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(dest) = matches.get_one::<String>("markdown") {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let report = generate_markdown(&stats, top_n, &date);
        if dest == "-" {
            print!("{}", report);
        } else {
            fs::write(dest, &report).with_context(|| format!("failed to write {}", dest))?;
            println!("Markdown report written to {}", dest);
        }
        return Ok(());
    }

    print!("{}", render::render_report(&stats, top_n));
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
