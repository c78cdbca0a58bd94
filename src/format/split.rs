//! Split an HTML page into separate HTML, CSS and JavaScript files.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::detect::detect_code_type;

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(?i-u:style)[^>]*>.*?</(?i-u:style)>").expect("valid regex"));
static STYLE_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?i-u:style)[^>]*>|</(?i-u:style)>").expect("valid regex"));
static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<(?i-u:script)[^>]*>.*?</(?i-u:script)>").expect("valid regex")
});
static SCRIPT_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?i-u:script)[^>]*>|</(?i-u:script)>").expect("valid regex"));

/// Default file names the split buffers are saved under.
pub const HTML_FILE: &str = "index.html";
pub const CSS_FILE: &str = "styles.css";
pub const JS_FILE: &str = "script.js";

const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="styles.css">"#;
const SCRIPT_REFERENCE: &str = r#"<script src="script.js"></script>"#;

/// The three buffers produced by [`split_files`], each possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl SplitResult {
    /// True when every buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty() && self.js.is_empty()
    }

    /// Buffers paired with their default file names, skipping blank ones.
    pub fn files(&self) -> Vec<(&'static str, &str)> {
        [
            (HTML_FILE, self.html.as_str()),
            (CSS_FILE, self.css.as_str()),
            (JS_FILE, self.js.as_str()),
        ]
        .into_iter()
        .filter(|(_, content)| !content.trim().is_empty())
        .collect()
    }

    /// Point the inserted link and script tags at other file names.
    pub fn relink(&self, css_file: &str, js_file: &str) -> Self {
        let html = self
            .html
            .replace(STYLESHEET_LINK, &stylesheet_link(css_file))
            .replace(SCRIPT_REFERENCE, &script_reference(js_file));
        Self {
            html,
            css: self.css.clone(),
            js: self.js.clone(),
        }
    }
}

fn stylesheet_link(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, href)
}

fn script_reference(src: &str) -> String {
    format!(r#"<script src="{}"></script>"#, src)
}

/// Pull `<style>` and `<script>` bodies out of an HTML page.
///
/// - `css`: every `<style>` body, each followed by a newline
/// - `js`: every `<script>` body, each followed by a newline
/// - `html`: the page with each `<style>` block replaced by a stylesheet link
///   and each `<script>` block by an external script reference
///
/// Only HTML or mixed input is split; anything else yields empty buffers.
pub fn split_files(code: &str) -> SplitResult {
    let category = detect_code_type(code);
    if !category.is_markup() {
        tracing::debug!(%category, "nothing to split");
        return SplitResult::default();
    }

    let css = extract_bodies(&STYLE_BLOCK, &STYLE_TAGS, code);
    let js = extract_bodies(&SCRIPT_BLOCK, &SCRIPT_TAGS, code);

    let html = STYLE_BLOCK.replace_all(code, NoExpand(STYLESHEET_LINK));
    let html = SCRIPT_BLOCK.replace_all(&html, NoExpand(SCRIPT_REFERENCE));

    SplitResult {
        html: html.into_owned(),
        css,
        js,
    }
}

fn extract_bodies(block: &Regex, tags: &Regex, code: &str) -> String {
    let mut bodies = String::new();
    for found in block.find_iter(code) {
        bodies.push_str(&tags.replace_all(found.as_str(), ""));
        bodies.push('\n');
    }
    bodies
}
