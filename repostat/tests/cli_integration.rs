//! Integration tests for repostat CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn run_repostat(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "repostat", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small multi-platform tree with code, docstrings and markdown.
fn sample_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "iOS/App/ContentView.swift",
        "/// Root view.\nstruct ContentView {\n    // body\n    let title = \"hi\"\n}\n\n",
    );
    write(
        root,
        "android/app/Main.kt",
        "/** Entry point. */\nfun main() {\n    println(\"hi\")\n}\n",
    );
    write(
        root,
        "scripts/build.py",
        "\"\"\"Build helper.\"\"\"\nimport os\n\nprint(os.getcwd())\n",
    );
    write(root, "docs/guide.md", "# Guide\n\nSome prose.\n");
    write(root, "README.md", "# Sample\n");
    // Skipped: hidden directory contents never reach the report.
    write(root, ".cache/junk.py", "x = 1\n");

    dir
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_repostat(&["--help"]);

    assert!(success);
    assert!(stdout.contains("repostat"));
    assert!(stdout.contains("--top"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--markdown"));
    assert!(stdout.contains("--include"));
    assert!(stdout.contains("--exclude"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_repostat(&["--version"]);

    assert!(success);
    assert!(stdout.contains("repostat"));
}

#[test]
fn test_table_output() {
    let project = sample_project();
    let (stdout, _, success) = run_repostat(&[project.path().to_str().unwrap()]);

    assert!(success);
    assert!(stdout.contains("PLATFORM / PROJECT SUMMARY"));
    assert!(stdout.contains("LANGUAGE BREAKDOWN"));
    assert!(stdout.contains("iOS"));
    assert!(stdout.contains("android"));
    assert!(stdout.contains("Scripts"));
    assert!(stdout.contains("TOTAL"));
    // Hidden directories are pruned.
    assert!(!stdout.contains("junk.py"));
}

#[test]
fn test_json_output() {
    let project = sample_project();
    let (stdout, _, success) = run_repostat(&[project.path().to_str().unwrap(), "--json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let obj = parsed.as_object().expect("top level is an object");
    assert!(obj.contains_key("iOS"));
    assert!(obj.contains_key("Scripts"));
    assert!(obj.contains_key("Documentation"));
    assert!(obj.contains_key("Root"));

    let ios = &parsed["iOS"];
    assert_eq!(ios["files"], 1);
    assert!(ios["total_lines"].as_u64().unwrap() > 0);
    assert!(ios.get("code_lines").is_some());
    assert!(ios.get("comment_lines").is_some());
    assert!(ios.get("docstring_lines").is_some());
    assert!(ios.get("blank_lines").is_some());
    assert!(ios.get("avg_file_length").is_some());
    assert_eq!(ios["file_list"][0]["language"], "Swift");
}

#[test]
fn test_markdown_to_stdout() {
    let project = sample_project();
    let (stdout, _, success) =
        run_repostat(&[project.path().to_str().unwrap(), "--markdown", "-"]);

    assert!(success);
    assert!(stdout.contains("# Code Statistics"));
    assert!(stdout.contains("## Platform / Project Summary"));
    assert!(stdout.contains("## Language Breakdown"));
    assert!(stdout.contains("| **TOTAL**"));
}

#[test]
fn test_markdown_to_file() {
    let project = sample_project();
    let dest = project.path().join("stats.md");
    let (stdout, _, success) = run_repostat(&[
        project.path().to_str().unwrap(),
        "--markdown",
        dest.to_str().unwrap(),
    ]);

    assert!(success);
    assert!(stdout.contains("Markdown report written to"));
    let report = fs::read_to_string(&dest).unwrap();
    assert!(report.contains("# Code Statistics"));
}

#[test]
fn test_exclude_pattern() {
    let project = sample_project();
    let (stdout, _, success) = run_repostat(&[
        project.path().to_str().unwrap(),
        "--exclude",
        "android/**",
    ]);

    assert!(success);
    assert!(stdout.contains("iOS"));
    assert!(!stdout.contains("Main.kt"));
}

#[test]
fn test_invalid_root_fails() {
    let (_, stderr, success) = run_repostat(&["/no/such/directory"]);

    assert!(!success);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, success) = run_repostat(&[dir.path().to_str().unwrap()]);

    assert!(success);
    assert!(stdout.contains("No source files found."));
}

#[test]
fn test_json_and_markdown_conflict() {
    let project = sample_project();
    let (_, _, success) = run_repostat(&[
        project.path().to_str().unwrap(),
        "--json",
        "--markdown",
        "out.md",
    ]);

    assert!(!success);
}
