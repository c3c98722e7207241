//! Indexer facade combining the scanner and the list renderer.

use indexer_config::Config;

use crate::diagnostic::Diagnostic;
use crate::error::IndexError;
use crate::list::{ListStyle, render_list};
use crate::scanner::{ScanOptions, scan};
use crate::tree::HeadingTree;

/// Result of indexing a document.
#[derive(Clone, Debug)]
pub struct IndexResult {
    /// Input with numbered headings rewritten to carry ids and labels.
    pub html: String,
    /// Table of contents list markup.
    pub toc_html: String,
    /// Numbered headings.
    pub tree: HeadingTree,
    /// Non-fatal findings (blank titles, skipped headings, early stop).
    pub diagnostics: Vec<Diagnostic>,
}

/// Heading indexer.
///
/// Holds no per-document state: the same instance can index any number of
/// documents, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Indexer {
    scan: ScanOptions,
    style: ListStyle,
}

impl Indexer {
    /// Create an indexer with default settings (numbering from `<h2>`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an indexer from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Config`] if the configuration is invalid.
    pub fn from_config(config: &Config) -> Result<Self, IndexError> {
        config.validate()?;
        Ok(Self {
            scan: ScanOptions {
                start_level: config.headings.start_level,
                id_prefix: config.headings.id_prefix.clone(),
            },
            style: ListStyle::from_config(&config.list),
        })
    }

    /// Set the first numbered heading level.
    #[must_use]
    pub fn with_start_level(mut self, level: u8) -> Self {
        self.scan.start_level = level;
        self
    }

    /// Set the prefix for hash-derived ids.
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.scan.id_prefix = prefix.into();
        self
    }

    /// Set the table of contents styles.
    #[must_use]
    pub fn with_list_style(mut self, style: ListStyle) -> Self {
        self.style = style;
        self
    }

    /// Number the headings of `text` and build its table of contents.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::RewriteOutOfSync`] if a heading cannot be
    /// rewritten; no partial output is returned.
    pub fn index(&self, text: &str) -> Result<IndexResult, IndexError> {
        let output = scan(text, &self.scan)?;
        let toc_html = render_list(&output.tree, &self.style);

        Ok(IndexResult {
            html: output.html,
            toc_html,
            tree: output.tree,
            diagnostics: output.diagnostics,
        })
    }

    /// Rewrite the headings of `text` with ids and labels.
    ///
    /// # Errors
    ///
    /// See [`Indexer::index`].
    pub fn annotate(&self, text: &str) -> Result<String, IndexError> {
        scan(text, &self.scan).map(|output| output.html)
    }

    /// Render the table of contents of `text`.
    ///
    /// # Errors
    ///
    /// See [`Indexer::index`].
    pub fn aside(&self, text: &str) -> Result<String, IndexError> {
        let output = scan(text, &self.scan)?;
        Ok(render_list(&output.tree, &self.style))
    }
}
