//! Integration tests for the codekit binary.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{codekit, fixture_path, load_fixture, write_config};

#[test]
fn detect_prints_wire_name() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .arg("detect")
        .arg(fixture_path("app.js"))
        .assert()
        .success()
        .stdout("javascript\n");
}

#[test]
fn detect_reads_stdin_and_reports_empty() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .arg("detect")
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("empty\n");
}

#[test]
fn detect_json_includes_label_and_scores() {
    let config = TempDir::new().unwrap();
    let output = codekit(&config)
        .args(["detect", "--json", "-"])
        .write_stdin(load_fixture("styles.css"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["category"], "css");
    assert_eq!(value["label"], "CSS");
    assert_eq!(value["scores"]["html"], 0);
    assert!(value["scores"]["css"].as_u64().unwrap() > 0);
}

#[test]
fn blank_input_is_rejected_with_verb() {
    let config = TempDir::new().unwrap();
    for verb in ["obfuscate", "format", "fix", "split", "comment"] {
        codekit(&config)
            .arg(verb)
            .write_stdin(" \n\t")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(format!(
                "Error: Please provide code to {}",
                verb
            )));
    }
}

#[test]
fn missing_input_file_is_an_error() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .args(["format", "/nonexistent/snippet.js"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/snippet.js"));
}

#[test]
fn obfuscate_without_flags_uses_suggestion() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .arg("obfuscate")
        .arg(fixture_path("app.js"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("const a = \"\\u0068\\u0069\";"));
}

#[test]
fn obfuscate_config_overrides_suggestion() {
    let config = TempDir::new().unwrap();
    write_config(&config, "[obfuscate]\nencode_strings = false\n");
    codekit(&config)
        .arg("obfuscate")
        .arg(fixture_path("app.js"))
        .assert()
        .success()
        .stdout(
            "const a = \"hi\";function greet(name){console.log(message + name)}greet(\"world\");\n",
        );
}

#[test]
fn obfuscate_flags_override_config() {
    let config = TempDir::new().unwrap();
    write_config(&config, "[obfuscate]\nrename_variables = true\n");
    codekit(&config)
        .args(["obfuscate", "--compress-whitespace"])
        .write_stdin("var total = 1;\n\nvar other = 2;")
        .assert()
        .success()
        .stdout("var total = 1;var other = 2;\n");
}

#[test]
fn obfuscate_stats_go_to_stderr() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .args(["obfuscate", "--all", "--stats"])
        .arg(fixture_path("styles.css"))
        .assert()
        .success()
        .stdout("body{margin:0;padding:4px}.title{color:blue}\n")
        .stderr(predicate::str::contains("Saved"));
}

#[test]
fn output_flag_writes_file() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("fixed.css");

    codekit(&config)
        .arg("fix")
        .arg(fixture_path("styles.css"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "/* layout */\nbody {\n  margin: 0;\n  padding: 4px; }\n.title { color: blue; }\n"
    );
}

#[test]
fn format_type_flag_forces_formatter() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .args(["format", "--type", "javascript"])
        .write_stdin("a;b")
        .assert()
        .success()
        .stdout("a;\nb\n");
}

#[test]
fn format_type_comes_from_config() {
    let config = TempDir::new().unwrap();
    write_config(&config, "[format]\ndefault_type = \"css\"\n");
    codekit(&config)
        .arg("format")
        .write_stdin("a;b")
        .assert()
        .success()
        .stdout("a;\n  b\n");
}

#[test]
fn unknown_format_type_is_a_usage_error() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .args(["format", "--type", "cobol"])
        .write_stdin("a")
        .assert()
        .code(2);
}

#[test]
fn comment_block_uses_configured_title() {
    let config = TempDir::new().unwrap();
    write_config(&config, "[comments]\nstyle = \"block\"\nheader_title = \"Widget\"\n");
    codekit(&config)
        .arg("comment")
        .write_stdin("a();")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/*\n * Widget\n * Generated: "))
        .stdout(predicate::str::ends_with(" */\n\na();\n"));
}

#[test]
fn comment_line_style_flag() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .args(["comment", "--style", "line"])
        .write_stdin("a();\n// kept\nb();")
        .assert()
        .success()
        .stdout("// a();\n// kept\n// b();\n");
}

#[test]
fn prompt_appends_to_existing_with_context() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("prompt.txt");
    fs::write(&existing, "Be brief.\n").unwrap();

    codekit(&config)
        .args(["prompt", "optimize", "--existing"])
        .arg(&existing)
        .arg("--context")
        .arg(fixture_path("styles.css"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Be brief.\n\nOptimize this code for performance and readability\n\nCode context:\n/* layout */",
        ));
}

#[test]
fn example_output_detects_as_requested_kind() {
    let config = TempDir::new().unwrap();
    let output = codekit(&config)
        .args(["example", "css"])
        .output()
        .unwrap();
    assert!(output.status.success());

    codekit(&config)
        .arg("detect")
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout("css\n");
}

#[test]
fn config_init_show_and_path() {
    let config = TempDir::new().unwrap();
    let path = config.path().join("config.toml");

    codekit(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", path.display()));

    codekit(&config).args(["config", "init"]).assert().success();
    assert!(path.exists());

    codekit(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[split]"))
        .stdout(predicate::str::contains("html_file = \"index.html\""))
        .stdout(predicate::str::contains("default_type = \"auto\""));
}

#[test]
fn config_init_leaves_existing_file() {
    let config = TempDir::new().unwrap();
    write_config(&config, "[comments]\nheader_title = \"Mine\"\n");

    codekit(&config).args(["config", "init"]).assert().success();

    assert_eq!(
        fs::read_to_string(config.path().join("config.toml")).unwrap(),
        "[comments]\nheader_title = \"Mine\"\n"
    );
}

#[test]
fn malformed_config_is_reported() {
    let config = TempDir::new().unwrap();
    write_config(&config, "[format\n");
    codekit(&config)
        .arg("example")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config in"));
}

#[test]
fn explicit_config_flag_wins_over_env() {
    let config = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let other_path = other.path().join("other.toml");
    fs::write(&other_path, "[format]\ndefault_type = \"javascript\"\n").unwrap();

    codekit(&config)
        .arg("--config")
        .arg(&other_path)
        .arg("format")
        .write_stdin("a;b")
        .assert()
        .success()
        .stdout("a;\nb\n");
}

#[test]
fn completions_are_generated() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("codekit"));
}

#[test]
fn version_flag() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("codekit "));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let config = TempDir::new().unwrap();
    codekit(&config)
        .args(["-v", "detect"])
        .arg(fixture_path("styles.css"))
        .assert()
        .success()
        .stdout("css\n")
        .stderr(predicate::str::contains("detected code type"));
}
