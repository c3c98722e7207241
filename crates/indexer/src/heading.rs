//! Heading tag recognition.
//!
//! Headings are matched with a single pattern instead of an HTML parser. The
//! content may not span lines, so a heading is always a one-line tag pair.
//!
//! The content ends at the first closing heading tag of any level. If that
//! tag's level differs from the opening one, the candidate is not a heading
//! and the search resumes one byte after its start. A later closing tag of
//! the right level is never tried, so `<h2>a</h3> b</h2>` yields no heading.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern for a single-line heading, e.g. `<h2 id="intro">Intro</h2>`.
///
/// The closing level is captured separately because `regex` has no
/// backreferences; [`HeadingMatch::find_at`] rejects mismatched pairs.
static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<\s*h([0-9])\s*(?:id="([^"]*?)")?\s*>(.*?)<\s*/h([0-9])\s*>"#)
        .expect("invalid heading regex")
});

/// One recognized heading occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadingMatch<'a> {
    /// Heading level (the digit in `<hN>`).
    pub level: u8,
    /// Author-supplied `id` attribute, if any.
    pub explicit_id: Option<&'a str>,
    /// Trimmed text between the opening and closing tag.
    pub title: &'a str,
    /// Exact matched substring.
    pub raw: &'a str,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset just past the match.
    pub end: usize,
}

impl<'a> HeadingMatch<'a> {
    /// Find the first heading starting at or after byte offset `start`.
    ///
    /// Candidates whose closing tag level differs from the opening one are
    /// not headings; the search resumes right after such a candidate's start.
    pub fn find_at(text: &'a str, start: usize) -> Option<Self> {
        let mut pos = start;
        while let Some(caps) = HEADING_PATTERN.captures_at(text, pos) {
            let whole = caps.get(0)?;
            let open = caps.get(1)?.as_str();
            let close = caps.get(4)?.as_str();

            if open == close {
                let explicit_id = caps
                    .get(2)
                    .map(|m| m.as_str())
                    .filter(|id| !id.is_empty());
                let title = caps.get(3).map_or("", |m| m.as_str().trim());
                return Some(Self {
                    level: open.as_bytes()[0] - b'0',
                    explicit_id,
                    title,
                    raw: whole.as_str(),
                    start: whole.start(),
                    end: whole.end(),
                });
            }

            // Match always begins with ASCII `<`, so +1 stays on a char boundary.
            pos = whole.start() + 1;
        }
        None
    }
}
