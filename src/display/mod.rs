//! Display projections of a `ResultSet`
//!
//! - `text`: plain-text blocks for the CLI and debug logging
//! - `html`: the results page served by the web front end
//!
//! Both treat an empty result as its own state and say so, rather than
//! printing an empty list.

mod html;
mod paging;
mod text;

pub use html::{escape_html, letter_index, render_letter, render_page, PageContext, SORRY};
pub use paging::Page;
pub use text::{render_text, TextOptions, NO_RESULTS, RULE};

use crate::catalog::Record;

/// Column holding the optional cultivar
pub const CULTIVAR_COLUMN: &str = "cultivar_name";

/// Botanical name, followed by ` 'Cultivar'` when one is recorded
pub fn display_name(record: &Record) -> String {
    let name = record.get("name").unwrap_or_default();
    match record.get(CULTIVAR_COLUMN) {
        Some(cultivar) => format!("{} '{}'", name, cultivar),
        None => name.to_string(),
    }
}

/// Field value for display; NULL and missing columns show as empty
pub fn field<'a>(record: &'a Record, column: &str) -> &'a str {
    record.get(column).unwrap_or_default()
}
