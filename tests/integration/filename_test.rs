//! Tests for split output file name sanitization.

use codekit::files::filename::{self, FilenameError, MAX_FILENAME_LENGTH};

const FALLBACK: &str = "styles.css";

fn clean(input: &str) -> String {
    filename::sanitize(input, FALLBACK)
}

#[test]
fn whitespace_runs_become_one_hyphen() {
    assert_eq!(clean("site styles.css"), "site-styles.css");
    assert_eq!(clean("site \t\n styles.css"), "site-styles.css");
    assert_eq!(clean("site---styles.css"), "site-styles.css");
}

#[test]
fn invalid_characters_are_dropped() {
    assert_eq!(clean("a/b\\c:d*e?f\"g<h>i|j.css"), "abcdefghij.css");
}

#[test]
fn directory_traversal_collapses_into_the_name() {
    assert_eq!(clean("../../assets/site.css"), "assetssite.css");
}

#[test]
fn unicode_is_transliterated() {
    assert_eq!(clean("café.css"), "cafe.css");
    assert_eq!(clean("über-styles.css"), "uber-styles.css");

    let japanese = clean("日本語.css");
    assert!(japanese.is_ascii());
    assert!(japanese.ends_with(".css"));
}

#[test]
fn emoji_do_not_survive() {
    let result = clean("site🚀theme.css");
    assert!(result.is_ascii());
    assert!(result.starts_with("site"));
    assert!(result.ends_with("theme.css"));
}

#[test]
fn edges_are_trimmed() {
    assert_eq!(clean("  app.js  "), "app.js");
    assert_eq!(clean("..app.js"), "app.js");
    assert_eq!(clean("---app.js--"), "app.js");
    assert_eq!(clean(". . .app.js"), "app.js");
}

#[test]
fn windows_device_names_are_prefixed() {
    assert_eq!(clean("CON.css"), "_CON.css");
    assert_eq!(clean("nul.js"), "_nul.js");
    assert_eq!(clean("Lpt9.html"), "_Lpt9.html");
    assert_eq!(clean("CONTROLLER.js"), "CONTROLLER.js");
}

#[test]
fn nothing_usable_means_fallback() {
    assert_eq!(clean(""), FALLBACK);
    assert_eq!(clean("   "), FALLBACK);
    assert_eq!(clean("/\\:*?\"<>|"), FALLBACK);
    assert_eq!(clean("..."), FALLBACK);
}

#[test]
fn ordinary_names_are_untouched() {
    for name in ["index.html", "app_v2.min.js", "Site-Theme.css"] {
        assert_eq!(clean(name), name);
    }
}

#[test]
fn validate_length_boundary() {
    assert!(filename::validate_length(&"a".repeat(MAX_FILENAME_LENGTH)).is_ok());
    assert_eq!(
        filename::validate_length(&"a".repeat(256)),
        Err(FilenameError::TooLong {
            length: 256,
            max: 255
        })
    );
}

#[test]
fn output_name_requires_matching_extension() {
    assert_eq!(
        filename::output_name("main.JS", "script.js").unwrap(),
        "main.JS"
    );
    assert!(matches!(
        filename::output_name("main.ts", "script.js"),
        Err(FilenameError::WrongExtension { extension: "js", .. })
    ));
}

#[test]
fn output_name_rejects_overlong_names() {
    let long = format!("{}.css", "a".repeat(300));
    assert!(matches!(
        filename::output_name(&long, "styles.css"),
        Err(FilenameError::TooLong { .. })
    ));
}
