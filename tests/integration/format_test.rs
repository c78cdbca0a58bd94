//! Formatting, repair and annotation of fixtures.

use chrono::NaiveDate;
use codekit::format::{add_comments, format_css, CommentStyle, FormatTarget};
use codekit::{fix_errors, format, Category};

use crate::helpers::load_fixture;

#[test]
fn page_is_laid_out_tag_per_line() {
    let formatted = format(&load_fixture("page.html"), FormatTarget::Auto);
    insta::assert_snapshot!(formatted, @r#"
<html>
  <head>
    <title>
Counter    </title>
    <style>

body { margin: 0; }
.count { color: red }
    </style>
  </head>
  <body>
    <!-- counter widget -->
    <div class="count" id="count">
0    </div>
    <script>

// bump the counter
const button = document.getElementById("count");
let clicks = 0;
    </script>
  </body>
</html>
"#);
}

#[test]
fn script_is_broken_at_statements() {
    let formatted = format(&load_fixture("app.js"), FormatTarget::Auto);
    assert_eq!(
        formatted,
        "// greet the user\nconst message = \"hi\";\nfunction greet(name) {\n  \
console.log(message + name);\n}\ngreet(\"world\");"
    );
}

#[test]
fn stylesheet_gets_one_declaration_per_line() {
    let css = load_fixture("styles.css");
    let expected = "/* layout */\nbody {\n  margin: 0;\n  padding: 4px\n}\n.title {\n   color: blue\n}";
    assert_eq!(format(&css, FormatTarget::Auto), expected);
    assert_eq!(format_css(&css), expected);
}

#[test]
fn forced_type_skips_detection() {
    let css = load_fixture("styles.css");
    assert_eq!(
        format(&css, Category::Html.into()),
        css.trim_end(),
        "no tags, so the HTML layout only trims"
    );
}

#[test]
fn stylesheet_fix_adds_missing_semicolons() {
    assert_eq!(
        fix_errors(&load_fixture("styles.css")),
        "/* layout */\nbody {\n  margin: 0;\n  padding: 4px; }\n.title { color: blue; }\n"
    );
}

#[test]
fn script_fix_closes_open_blocks() {
    let truncated = "function greet(name) {\n  if (name) {\n    console.log(name);";
    let fixed = fix_errors(truncated);
    assert!(fixed.ends_with("console.log(name);}}"));
}

#[test]
fn comment_styles() {
    let at = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();

    assert_eq!(
        add_comments("a();\n\nb();", CommentStyle::Line, "ignored", at),
        "// a();\n\n// b();"
    );
    assert_eq!(
        add_comments("a();", CommentStyle::Block, "Widget", at),
        "/*\n * Widget\n * Generated: 2024-01-02 03:04:05\n */\n\na();"
    );
}
