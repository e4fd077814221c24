//! Plain-text rendering

use std::fmt::Write;

use crate::catalog::ResultSet;

use super::{display_name, field};

/// Separator between records
pub const RULE: &str = "-----------------------------";

/// Shown instead of records when nothing matched
pub const NO_RESULTS: &str = "No results found.";

/// Text rendering options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Add an `Image:` line to each record
    pub show_image: bool,
}

/// Render records as text blocks separated by rules.
pub fn render_text(results: &ResultSet, options: TextOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULE);

    if results.is_empty() {
        let _ = writeln!(out, "{}", NO_RESULTS);
        let _ = writeln!(out, "{}", RULE);
        return out;
    }

    for record in results {
        let _ = writeln!(out, "Name: {}", display_name(record));
        let _ = writeln!(out, "Common name: {}", field(record, "common_name"));
        let _ = writeln!(out, "Family: {}", field(record, "family"));
        let _ = writeln!(out, "Description: {}", field(record, "description"));
        if options.show_image {
            let _ = writeln!(out, "Image: {}", field(record, "image"));
        }
        let _ = writeln!(out, "{}", RULE);
    }

    out
}
