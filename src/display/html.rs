//! HTML results page
//!
//! Layout: sort links, the A-Z letter index, then either the "no results"
//! message or one page of records with previous/next links. Record text is
//! always escaped.

use std::fmt::Write;

use crate::catalog::{ResultSet, SortCriterion};

use super::{display_name, field, Page};

/// Shown when the whole result is empty
pub const SORRY: &str = "Sorry, no plants matched your search.";

/// What the page was asked for
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Path the page is served under, e.g. `/plants`
    pub base_path: &'a str,
    /// Criterion the result was fetched with
    pub criterion: SortCriterion,
    /// Index of the first record to show
    pub start: usize,
    /// Records per page
    pub page_size: usize,
    /// Show image file names
    pub show_image: bool,
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Percent-encode a query-string value
fn encode_query_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{:02X}", byte);
        }
    }
    out
}

/// Link to the letter-filtered listing for one letter
pub fn render_letter(base_path: &str, letter: char) -> String {
    let value: String = letter.to_lowercase().collect();
    format!(
        "<a href=\"{}?show=name&amp;letter={}\">{}</a>",
        escape_html(base_path),
        encode_query_value(&value),
        escape_html(&letter.to_string()),
    )
}

/// The A-Z letter index
pub fn letter_index(base_path: &str) -> String {
    let links: Vec<String> = ('A'..='Z').map(|c| render_letter(base_path, c)).collect();
    format!("<p class=\"letters\">{}</p>", links.join(" "))
}

fn query_string(criterion: &SortCriterion, start: usize) -> String {
    let show = match criterion {
        SortCriterion::ByCommonName => "common",
        SortCriterion::ByFamily => "family",
        SortCriterion::ByName | SortCriterion::ByLetter(_) => "name",
    };
    match criterion.letter() {
        Some(letter) => format!(
            "?show={}&amp;letter={}&amp;start={}",
            show,
            encode_query_value(&letter.lower()),
            start
        ),
        None => format!("?show={}&amp;start={}", show, start),
    }
}

/// Render the full results page
pub fn render_page(results: &ResultSet, ctx: &PageContext<'_>) -> String {
    let base = escape_html(ctx.base_path);
    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html><head><meta charset=\"utf-8\"><title>Plants</title></head><body>");
    let _ = writeln!(out, "<h1>Plants</h1>");
    let _ = writeln!(
        out,
        "<p class=\"sort\">Sort by: <a href=\"{base}?show=name\">botanical name</a> | \
         <a href=\"{base}?show=common\">common name</a> | \
         <a href=\"{base}?show=family\">family</a></p>"
    );
    let _ = writeln!(out, "{}", letter_index(ctx.base_path));

    if results.is_empty() {
        let _ = writeln!(out, "<p class=\"no-results\">{}</p>", SORRY);
        let _ = writeln!(out, "</body></html>");
        return out;
    }

    let page = Page::new(ctx.start, ctx.page_size, results.len());
    let _ = writeln!(
        out,
        "<p class=\"summary\">Showing {} to {} of {}</p>",
        page.first_shown(),
        page.last_shown(),
        page.total
    );

    let _ = writeln!(out, "<dl class=\"results\">");
    for record in page.slice(results.records()) {
        let _ = writeln!(out, "<dt>{}</dt>", escape_html(&display_name(record)));
        let _ = writeln!(
            out,
            "<dd>{} ({})<br>{}",
            escape_html(field(record, "common_name")),
            escape_html(field(record, "family")),
            escape_html(field(record, "description")),
        );
        if ctx.show_image {
            let _ = write!(out, "<br>Image: {}", escape_html(field(record, "image")));
        }
        let _ = writeln!(out, "</dd>");
    }
    let _ = writeln!(out, "</dl>");

    let _ = write!(out, "<p class=\"paging\">");
    if let Some(prev) = page.previous() {
        let _ = write!(
            out,
            "<a href=\"{}{}\">Previous</a> ",
            base,
            query_string(&ctx.criterion, prev)
        );
    }
    if let Some(next) = page.next() {
        let _ = write!(
            out,
            "<a href=\"{}{}\">Next</a>",
            base,
            query_string(&ctx.criterion, next)
        );
    }
    let _ = writeln!(out, "</p>");
    let _ = writeln!(out, "</body></html>");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Letter, Record};

    fn ctx(criterion: SortCriterion, start: usize, page_size: usize) -> PageContext<'static> {
        PageContext {
            base_path: "/plants",
            criterion,
            start,
            page_size,
            show_image: false,
        }
    }

    fn results(n: usize) -> ResultSet {
        ResultSet {
            columns: vec!["name".into()],
            records: (0..n)
                .map(|i| Record::new().with("name", Some(format!("Plant {i:02}").as_str())))
                .collect(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_letter() {
        assert_eq!(
            render_letter("/plants", 'B'),
            "<a href=\"/plants?show=name&amp;letter=b\">B</a>"
        );
        assert!(render_letter("/plants", '&').contains("letter=%26"));
    }

    #[test]
    fn test_letter_index_covers_alphabet() {
        let index = letter_index("/plants");
        assert_eq!(index.matches("<a ").count(), 26);
        assert!(index.contains("letter=a\">A</a>"));
        assert!(index.contains("letter=z\">Z</a>"));
    }

    #[test]
    fn test_empty_page_says_sorry() {
        let page = render_page(&ResultSet::empty(vec![]), &ctx(SortCriterion::ByName, 0, 10));
        assert!(page.contains(SORRY));
        assert!(!page.contains("<dl"));
    }

    #[test]
    fn test_start_past_end_is_not_sorry() {
        let page = render_page(&results(3), &ctx(SortCriterion::ByName, 30, 10));
        assert!(!page.contains(SORRY));
        assert!(!page.contains("<dt>"));
        assert!(page.contains("href=\"/plants?show=name&amp;start=0\">Previous"));
    }

    #[test]
    fn test_paging_links() {
        let page = render_page(&results(25), &ctx(SortCriterion::ByFamily, 10, 10));
        assert!(page.contains("Plant 10"));
        assert!(page.contains("Plant 19"));
        assert!(!page.contains("Plant 20"));
        assert!(page.contains("href=\"/plants?show=family&amp;start=0\">Previous"));
        assert!(page.contains("href=\"/plants?show=family&amp;start=20\">Next"));
    }

    #[test]
    fn test_paging_links_keep_letter() {
        let criterion = SortCriterion::ByLetter(Letter::new('P'));
        let page = render_page(&results(15), &ctx(criterion, 0, 10));
        assert!(page.contains("?show=name&amp;letter=p&amp;start=10\">Next"));
    }

    #[test]
    fn test_record_text_is_escaped() {
        let results = ResultSet {
            columns: vec!["name".into()],
            records: vec![Record::new()
                .with("name", Some("<script>"))
                .with("description", Some("a & b"))],
        };
        let page = render_page(&results, &ctx(SortCriterion::ByName, 0, 10));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("a &amp; b"));
    }
}
