//! Bundled example snippets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    /// A page with inline `<style>` and `<script>`
    #[default]
    Mixed,
    Javascript,
    Css,
}

const MIXED: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Sample page</title>
    <style>
        body {
            background: #f0f0f0;
            font-family: Arial, sans-serif;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Welcome to codekit</h1>
        <button onclick="showMessage()">Click me</button>
    </div>

    <script>
        function showMessage() {
            // show a greeting
            alert('Hello, World!');
            console.log('Button clicked');
        }

        // page finished loading
        document.addEventListener('DOMContentLoaded', function() {
            console.log('Page loaded');
        });
    </script>
</body>
</html>"#;

const JAVASCRIPT: &str = r#"// Fibonacci sequence
function fibonacci(n) {
    if (n <= 1) return n;
    return fibonacci(n - 1) + fibonacci(n - 2);
}

// Sort an array of numbers
function sortArray(arr) {
    // numeric comparison
    return arr.sort((a, b) => a - b);
}

// Click listener
document.addEventListener('click', function(e) {
    console.log('Clicked element:', e.target);
});"#;

const CSS: &str = r#"/* Basic reset */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

/* Page body */
body {
    background-color: #f5f5f5;
    font-family: 'Arial', sans-serif;
    line-height: 1.6;
}

/* Container */
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}

/* Buttons */
.btn-primary {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    padding: 10px 20px;
    border-radius: 5px;
    cursor: pointer;
}"#;

/// The bundled snippet for `kind`.
pub fn sample(kind: SampleKind) -> &'static str {
    match kind {
        SampleKind::Mixed => MIXED,
        SampleKind::Javascript => JAVASCRIPT,
        SampleKind::Css => CSS,
    }
}
