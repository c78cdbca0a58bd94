//! End-to-end obfuscation of fixtures.

use codekit::obfuscate::obfuscate_as;
use codekit::{obfuscate, Category, ObfuscationStats, TransformOptions};

use crate::helpers::load_fixture;

fn strip_only() -> TransformOptions {
    TransformOptions {
        remove_comments: true,
        compress_whitespace: true,
        ..Default::default()
    }
}

#[test]
fn script_gets_every_pass() {
    let result = obfuscate(&load_fixture("app.js"), &TransformOptions::all());
    assert_eq!(
        result,
        "const a = \"\\u0068\\u0069\";function greet(name){console.log(message + name)}\
greet(\"\\u0077\\u006f\\u0072\\u006c\\u0064\");"
    );
}

#[test]
fn renaming_only_touches_declarations() {
    let result = obfuscate(&load_fixture("app.js"), &TransformOptions::all());
    assert!(result.starts_with("const a ="));
    assert!(result.contains("console.log(message + name)"));
}

#[test]
fn stylesheet_loses_comments_and_whitespace() {
    let result = obfuscate(&load_fixture("styles.css"), &strip_only());
    assert_eq!(result, "body{margin:0;padding:4px}.title{color:blue}");
}

#[test]
fn page_strips_every_comment_kind() {
    let result = obfuscate(&load_fixture("page.html"), &strip_only());
    assert_eq!(
        result,
        "<html> <head> <title>Counter</title> <style> body{margin:0}.count{color:red}</style> \
</head> <body> <div class=\"count\" id=\"count\">0</div> <script> \
const button = document.getElementById(\"count\");let clicks = 0;</script> </body> </html>"
    );
}

#[test]
fn page_with_every_pass_renames_script_declarations() {
    let result = obfuscate(&load_fixture("page.html"), &TransformOptions::all());
    assert!(result.contains("const a = document.getElementById("));
    assert!(result.contains("let b = 0;"));
    assert!(!result.contains("\"count\""));
}

#[test]
fn forced_category_controls_comment_removal() {
    let code = "<!-- note -->\n// line";
    let options = TransformOptions {
        remove_comments: true,
        ..Default::default()
    };
    assert_eq!(obfuscate_as(code, &options, Category::Html), "\n// line");
    assert_eq!(
        obfuscate_as(code, &options, Category::JavaScript),
        "<!-- note -->\n"
    );
}

#[test]
fn stats_report_savings() {
    let original = load_fixture("styles.css");
    let result = obfuscate(&original, &strip_only());
    let stats = ObfuscationStats::new(&original, &result);

    assert_eq!(stats.original_size, original.len());
    assert_eq!(stats.obfuscated_size, result.len());
    assert_eq!(stats.saved, original.len() - result.len());
    assert!(stats.rate_percent > 0 && stats.rate_percent < 100);
}
