//! Heading scanner and numberer.
//!
//! Walks the text left to right, numbers headings with a counter stack and
//! rewrites each numbered heading in a copy of the input:
//!
//! ```text
//! <h2>Intro</h2>   →   <h2 id="id-…">1 Intro</h2>
//! <h3>Scope</h3>   →   <h3 id="id-…">1.1 Scope</h3>
//! <h2>Usage</h2>   →   <h2 id="id-…">2 Usage</h2>
//! ```
//!
//! Each level is scanned by one recursive call. A heading above the current
//! level ends the call without being consumed, so the caller one level up
//! reads it next.

use crate::anchor::{Anchor, DEFAULT_ID_PREFIX};
use crate::diagnostic::Diagnostic;
use crate::error::IndexError;
use crate::heading::HeadingMatch;
use crate::tree::{HeadingKey, HeadingNode, HeadingTree};

/// Scanner settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// First numbered heading level.
    pub start_level: u8,
    /// Prefix for hash-derived ids.
    pub id_prefix: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            start_level: 2,
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
        }
    }
}

/// Result of scanning one document.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    /// Input with every numbered heading rewritten.
    pub html: String,
    /// Numbered headings.
    pub tree: HeadingTree,
    /// Non-fatal findings, in document order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `text`, number its headings and rewrite them.
///
/// # Errors
///
/// Returns [`IndexError::RewriteOutOfSync`] if a heading cannot be located in
/// the output buffer.
pub fn scan(text: &str, options: &ScanOptions) -> Result<ScanOutput, IndexError> {
    let mut scanner = Scanner::new(text, options);
    let tree = scanner.scan_document()?;

    tracing::debug!(
        headings = tree.count(),
        diagnostics = scanner.diagnostics.len(),
        "Heading scan completed"
    );

    Ok(ScanOutput {
        html: scanner.output,
        tree,
        diagnostics: scanner.diagnostics,
    })
}

/// Why a level scan stopped.
enum RegionEnd<'a> {
    /// No headings left in the text.
    Exhausted,
    /// Found a heading above the scanned level; it was not consumed.
    Shallower(HeadingMatch<'a>),
}

struct Scanner<'a> {
    source: &'a str,
    options: &'a ScanOptions,
    output: String,
    /// Source offset up to which `output` has been rewritten.
    source_done: usize,
    /// Output offset corresponding to `source_done`.
    output_done: usize,
    counters: Vec<u32>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, options: &'a ScanOptions) -> Self {
        Self {
            source,
            options,
            output: source.to_owned(),
            source_done: 0,
            output_done: 0,
            counters: vec![1],
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole document at the start level.
    ///
    /// A heading above the start level has no enclosing level to return to,
    /// so it ends the scan: it is reported and everything after it is left
    /// as is.
    fn scan_document(&mut self) -> Result<HeadingTree, IndexError> {
        let start_level = self.options.start_level;
        let mut tree = HeadingTree::default();
        let mut cursor = 0;

        if let RegionEnd::Shallower(heading) =
            self.scan_region(start_level, &mut cursor, &mut tree)?
        {
            self.report(Diagnostic::AboveStartLevel {
                level: heading.level,
                start_level,
                title: heading.title.to_owned(),
            });
        }

        Ok(tree)
    }

    /// Number the sibling group at `depth`, appending it to `tree`.
    ///
    /// On return `cursor` points at the first unconsumed heading (or past the
    /// last one).
    fn scan_region(
        &mut self,
        depth: u8,
        cursor: &mut usize,
        tree: &mut HeadingTree,
    ) -> Result<RegionEnd<'a>, IndexError> {
        while let Some(heading) = HeadingMatch::find_at(self.source, *cursor) {
            if heading.level < depth {
                *cursor = heading.start;
                return Ok(RegionEnd::Shallower(heading));
            }

            *cursor = heading.end;

            if heading.level > depth {
                self.report(Diagnostic::SkippedLevel {
                    level: heading.level,
                    expected: depth,
                    title: heading.title.to_owned(),
                });
                continue;
            }

            let label = self.label();
            let anchor = Anchor::for_heading(&heading, &self.options.id_prefix);
            if heading.title.is_empty() && !anchor.explicit {
                self.report(Diagnostic::BlankTitle {
                    label: label.clone(),
                });
            }
            self.rewrite(&heading, &anchor, &label)?;

            self.counters.push(1);
            let mut children = HeadingTree::default();
            self.scan_region(depth + 1, cursor, &mut children)?;
            self.counters.pop();

            if let Some(last) = self.counters.last_mut() {
                *last += 1;
            }

            tree.push(HeadingNode {
                key: HeadingKey {
                    anchor: anchor.href(),
                    title: heading.title.to_owned(),
                },
                level: heading.level,
                label,
                children,
            });
        }

        Ok(RegionEnd::Exhausted)
    }

    /// Current hierarchical label (e.g. "1.2.1").
    fn label(&self) -> String {
        self.counters
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Replace the heading's markup in the output buffer.
    ///
    /// Text between rewrites is copied unchanged, so the heading is searched
    /// from the output position that corresponds to its source position.
    fn rewrite(
        &mut self,
        heading: &HeadingMatch<'_>,
        anchor: &Anchor,
        label: &str,
    ) -> Result<(), IndexError> {
        let offset = self.output_done + (heading.start - self.source_done);
        let found = self
            .output
            .get(offset..)
            .and_then(|rest| rest.find(heading.raw))
            .ok_or_else(|| IndexError::RewriteOutOfSync {
                raw: heading.raw.to_owned(),
                offset,
            })?;

        let at = offset + found;
        let level = heading.level;
        let replacement = format!(
            r#"<h{level} id="{}">{label} {}</h{level}>"#,
            anchor.id, heading.title
        );
        self.output
            .replace_range(at..at + heading.raw.len(), &replacement);

        self.source_done = heading.end;
        self.output_done = at + replacement.len();
        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(warning = %diagnostic, "Heading index warning");
        self.diagnostics.push(diagnostic);
    }
}
