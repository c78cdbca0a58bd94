//! Output file name sanitization for the split writer.
//!
//! Configured names come from the user's config file, so they are cleaned
//! before anything is written: transliterated to ASCII, stripped of path
//! separators and other characters common filesystems reject.

use deunicode::deunicode;

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maximum filename length for most filesystems.
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Errors that can occur when resolving an output file name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("Filename too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },

    #[error("'{name}' must end in .{extension}")]
    WrongExtension {
        name: String,
        extension: &'static str,
    },
}

/// Sanitizes a string for use as a file name.
///
/// Whitespace runs become a single hyphen, invalid characters are dropped,
/// leading and trailing dots and hyphens are trimmed, and Windows reserved
/// names get a `_` prefix. Returns `fallback` when nothing usable is left.
pub fn sanitize(input: &str, fallback: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;

    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
    }

    let trimmed = result.trim_matches(|c| c == '.' || c == ' ' || c == '-');
    let name = handle_reserved_name(trimmed);

    if name.is_empty() {
        fallback.to_string()
    } else {
        name
    }
}

/// Validates that a final filename doesn't exceed filesystem limits.
pub fn validate_length(filename: &str) -> Result<(), FilenameError> {
    if filename.len() > MAX_FILENAME_LENGTH {
        Err(FilenameError::TooLong {
            length: filename.len(),
            max: MAX_FILENAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Resolves a configured output name for one split buffer.
///
/// The name is sanitized (falling back to `default`), must keep the
/// extension of `default`, and must fit the filesystem limit.
pub fn output_name(configured: &str, default: &'static str) -> Result<String, FilenameError> {
    let name = sanitize(configured, default);
    let extension = default.rsplit_once('.').map_or("", |(_, ext)| ext);

    let has_extension = name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(extension));
    if !extension.is_empty() && !has_extension {
        return Err(FilenameError::WrongExtension { name, extension });
    }

    validate_length(&name)?;
    Ok(name)
}

/// Checks if a name is a Windows reserved name and prefixes it if so.
///
/// Handles both exact matches (CON) and names with extensions (CON.css).
fn handle_reserved_name(name: &str) -> String {
    let base_name = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let upper = base_name.to_uppercase();
    if WINDOWS_RESERVED.contains(&upper.as_str()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
