//! Non-fatal findings reported while scanning.

use std::fmt;

/// A recoverable problem with the scanned markup.
///
/// Diagnostics never stop processing; each one is also logged through
/// `tracing` when it is recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Diagnostic {
    /// A numbered heading has no title; its id is the hash of the empty string.
    BlankTitle {
        /// Label assigned to the heading.
        label: String,
    },
    /// A heading deeper than the current level with no parent one level up.
    ///
    /// The heading is left as is and does not appear in the tree.
    SkippedLevel {
        /// Level of the heading.
        level: u8,
        /// Level that was expected at this position.
        expected: u8,
        /// Heading title.
        title: String,
    },
    /// A heading above the first numbered level (e.g. `<h1>` when numbering
    /// starts at `<h2>`). Numbering stops there; the heading and the rest of
    /// the text are left as is.
    AboveStartLevel {
        /// Level of the heading.
        level: u8,
        /// First numbered level.
        start_level: u8,
        /// Heading title.
        title: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankTitle { label } => write!(
                f,
                "blank title for section {label}: add an explicit id, as in <h2 id=\"my-id\">"
            ),
            Self::SkippedLevel {
                level,
                expected,
                title,
            } => write!(
                f,
                "heading h{level} '{title}' skips a level (expected h{expected} or above), left unnumbered"
            ),
            Self::AboveStartLevel {
                level,
                start_level,
                title,
            } => write!(
                f,
                "heading h{level} '{title}' is above the first numbered level h{start_level}, left unnumbered"
            ),
        }
    }
}
