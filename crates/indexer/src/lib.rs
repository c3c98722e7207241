//! Hierarchical heading ids, numbering and table of contents for rendered pages.
//!
//! This crate post-processes rendered page markup:
//! - every `<h2>`…`<h9>` heading gets a stable `id` and a dotted label
//!   (`1`, `1.1`, `1.2`, `2`, …) reflecting its nesting
//! - a two-level `<ol>` of links to those anchors is built from the same scan
//!
//! # Architecture
//!
//! - [`heading`]: single-line heading tag matching
//! - [`anchor`]: explicit or MD5-derived anchor ids
//! - [`scanner`]: recursive numbering and in-place rewriting
//! - [`list`]: table of contents rendering
//! - [`Indexer`]: facade tying the above to the configuration
//!
//! # Example
//!
//! ```
//! use indexer::Indexer;
//!
//! let html = "<h2>Install</h2>\n<h3>Linux</h3>\n<h2>Usage</h2>\n";
//! let result = Indexer::new().index(html).unwrap();
//!
//! assert!(result.html.contains(">1.1 Linux</h3>"));
//! assert!(result.toc_html.starts_with("<ol"));
//! ```

pub mod anchor;
mod diagnostic;
mod error;
pub mod heading;
mod indexer;
pub mod list;
pub mod scanner;
mod tree;

pub use anchor::{Anchor, derive_id};
pub use diagnostic::Diagnostic;
pub use error::IndexError;
pub use heading::HeadingMatch;
pub use indexer::{IndexResult, Indexer};
pub use list::{ListStyle, render_list};
pub use scanner::{ScanOptions, ScanOutput, scan};
pub use tree::{HeadingKey, HeadingNode, HeadingTree};
