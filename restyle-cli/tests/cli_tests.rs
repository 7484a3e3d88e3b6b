//! Integration tests for the `restyle` binary.

use std::fs;
use std::path::Path;
use std::process::Output;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

use restyle_css::{Plan, reorganize};

const STYLESHEET: &str = "/* Phone stylesheet */\n\n:root {\n    --spacing-sm: 4px;\n}\n\n/* ===== BASE STYLES ===== */\nbody {\n    margin: 0;\n}\n\n/* ===== LAYOUT COMPONENTS ===== */\n.panel {\n    display: flex;\n}\n";

/// Create a temp dir holding `input.css` with the given contents.
fn workspace(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.css"), contents).unwrap();
    dir
}

/// Run the binary inside `dir` so no stray `restyle.toml` is picked up.
fn run(dir: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("restyle")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_writes_reorganized_output() {
    let dir = workspace(STYLESHEET);

    let output = run(dir.path(), &["input.css", "-o", "output.css"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(predicate::str::contains("Wrote").eval(&stdout(&output)));
    let written = fs::read_to_string(dir.path().join("output.css")).unwrap();
    assert_eq!(written, reorganize(STYLESHEET, &Plan::default()).unwrap());
}

#[test]
fn test_stdout_does_not_write_file() {
    let dir = workspace(STYLESHEET);

    let output = run(dir.path(), &["input.css", "-o", "output.css", "--stdout"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), reorganize(STYLESHEET, &Plan::default()).unwrap());
    assert!(!dir.path().join("output.css").exists());
}

#[test]
fn test_missing_input_fails_in_load_stage() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["absent.css", "-o", "output.css"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("load: failed to read `absent.css`"));
    assert!(!dir.path().join("output.css").exists());
}

#[test]
fn test_missing_marker_fails_and_keeps_existing_output() {
    let dir = workspace(&STYLESHEET.replace("/* ===== LAYOUT COMPONENTS ===== */", ""));
    fs::write(dir.path().join("output.css"), "previous").unwrap();

    let output = run(dir.path(), &["input.css", "-o", "output.css"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("extract: failed to reorganize `input.css`"));
    assert!(err.contains("section `base`"));
    assert!(err.contains("LAYOUT COMPONENTS"));
    assert_eq!(fs::read_to_string(dir.path().join("output.css")).unwrap(), "previous");
}

#[test]
fn test_template_replaces_component_block() {
    let dir = workspace(STYLESHEET);
    fs::write(dir.path().join("extra.css"), ".extra { color: red; }\n").unwrap();

    let output = run(dir.path(), &["input.css", "--template", "extra.css", "--stdout"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.ends_with("}\n\n.extra { color: red; }\n"));
    assert!(!text.contains("BUTTON SYSTEM"));
}

#[test]
fn test_project_config_is_picked_up() {
    let dir = workspace(STYLESHEET);
    fs::write(
        dir.path().join("restyle.toml"),
        r#"
[paths]
input = "input.css"
output = "out.css"

[[sections]]
name = "variables"
start = { marker = ":root {" }
end = { marker = "}" }
"#,
    )
    .unwrap();
    fs::write(dir.path().join("tail.css"), "/* tail */\n").unwrap();

    let output = run(dir.path(), &["--template", "tail.css"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(dir.path().join("out.css")).unwrap(),
        ":root {\n    --spacing-sm: 4px;\n}\n\n/* tail */\n"
    );
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = workspace(STYLESHEET);

    let output = run(dir.path(), &["input.css", "--config", "missing.toml"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("load: invalid configuration"));
}

#[test]
fn test_list_sections_json() {
    let dir = workspace(STYLESHEET);

    let output = run(dir.path(), &["input.css", "--list-sections", "--json"]);

    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["header", "variables", "base"]);
    assert_eq!(listing[0]["start"], 0);
    assert_eq!(listing[0]["bytes"], "/* Phone stylesheet */".len());
    assert!(!dir.path().join("phone_v2.css").exists());
}

#[test]
fn test_list_sections_text() {
    let dir = workspace(STYLESHEET);

    let output = run(dir.path(), &["input.css", "--list-sections"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("=== Sections (3) ==="));
    assert!(text.contains("variables"));
}

#[test]
fn test_json_requires_list_sections() {
    let dir = workspace(STYLESHEET);

    let output = run(dir.path(), &["input.css", "--json"]);

    assert!(!output.status.success());
}

#[test]
fn test_duplicate_start_marker_warns() {
    let source = STYLESHEET.replace(
        "/* ===== BASE STYLES ===== */",
        "[data-theme='dark'] :root {\n    --spacing-sm: 6px;\n}\n\n/* ===== BASE STYLES ===== */",
    );
    let dir = workspace(&source);

    let output = run(dir.path(), &["input.css", "--stdout"]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("start marker \":root {\" of section `variables` occurs 2 times"));
    // The first occurrence still opens the section
    assert!(stdout(&output).contains(":root {\n    --spacing-sm: 4px;\n}"));
}
