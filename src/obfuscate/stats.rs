//! Size statistics for an obfuscation run.

use serde::Serialize;

/// Before/after sizes of an obfuscation run.
///
/// Sizes count UTF-16 code units, the unit browsers report for text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObfuscationStats {
    pub original_size: usize,
    pub obfuscated_size: usize,
    pub saved: usize,
    /// Saved share of the original, rounded to a whole percent
    pub rate_percent: u32,
}

impl ObfuscationStats {
    pub fn new(original: &str, obfuscated: &str) -> Self {
        let original_size = original.encode_utf16().count();
        let obfuscated_size = obfuscated.encode_utf16().count();
        let saved = original_size.saturating_sub(obfuscated_size);
        let rate_percent = if original_size > 0 {
            ((saved as f64 / original_size as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            original_size,
            obfuscated_size,
            saved,
            rate_percent,
        }
    }

    /// One-line summary with human-readable sizes.
    pub fn summary(&self) -> String {
        format!(
            "Original: {}  Obfuscated: {}  Saved: {} ({}%)",
            format_size(self.original_size),
            format_size(self.obfuscated_size),
            format_size(self.saved),
            self.rate_percent
        )
    }
}

fn format_size(units: usize) -> String {
    humansize::format_size(units, humansize::DECIMAL)
}
