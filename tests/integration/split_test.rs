//! Splitting pages into separate files.

use std::fs;

use tempfile::TempDir;

use codekit::split_files;

use crate::helpers::{codekit, load_fixture, temp_fixture, write_config};

#[test]
fn page_is_split_into_three_buffers() {
    let split = split_files(&load_fixture("page.html"));

    assert_eq!(split.css, "\nbody { margin: 0; }\n.count { color: red }\n\n");
    assert_eq!(
        split.js,
        "\n// bump the counter\nconst button = document.getElementById(\"count\");\nlet clicks = 0;\n\n"
    );
    assert!(split.html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    assert!(split.html.contains("<script src=\"script.js\"></script>"));
    assert!(!split.html.contains("<style>"));
    assert!(!split.html.contains("clicks"));
}

#[test]
fn non_html_input_is_not_split() {
    let split = split_files(&load_fixture("app.js"));
    assert!(split.is_empty());
    assert!(split.files().is_empty());
}

#[test]
fn cli_writes_default_file_names() {
    let config = TempDir::new().unwrap();
    let (dir, page) = temp_fixture("page.html");
    let out = dir.path().join("out");

    codekit(&config)
        .arg("split")
        .arg(&page)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("index.html").exists());
    assert_eq!(
        fs::read_to_string(out.join("styles.css")).unwrap(),
        "\nbody { margin: 0; }\n.count { color: red }\n\n"
    );
    assert!(fs::read_to_string(out.join("script.js"))
        .unwrap()
        .contains("let clicks = 0;"));
}

#[test]
fn cli_uses_configured_names_and_relinks() {
    let config = TempDir::new().unwrap();
    write_config(
        &config,
        "[split]\nhtml_file = \"page.html\"\ncss_file = \"site styles.css\"\njs_file = \"app.js\"\n",
    );
    let (dir, page) = temp_fixture("page.html");

    codekit(&config)
        .arg("split")
        .arg(&page)
        .arg("--out-dir")
        .arg(dir.path().join("out"))
        .assert()
        .success();

    let out = dir.path().join("out");
    let html = fs::read_to_string(out.join("page.html")).unwrap();
    assert!(html.contains("href=\"site-styles.css\""));
    assert!(html.contains("<script src=\"app.js\"></script>"));
    assert!(out.join("site-styles.css").exists());
    assert!(out.join("app.js").exists());
}

#[test]
fn cli_rejects_configured_name_with_wrong_extension() {
    let config = TempDir::new().unwrap();
    write_config(&config, "[split]\ncss_file = \"styles.txt\"\n");
    let (dir, page) = temp_fixture("page.html");

    codekit(&config)
        .arg("split")
        .arg(&page)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("must end in .css"));
}

#[test]
fn cli_json_prints_buffers() {
    let config = TempDir::new().unwrap();
    let output = codekit(&config)
        .args(["split", "--json"])
        .write_stdin(load_fixture("page.html"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["css"],
        "\nbody { margin: 0; }\n.count { color: red }\n\n"
    );
    assert!(value["html"].as_str().unwrap().contains("styles.css"));
}
