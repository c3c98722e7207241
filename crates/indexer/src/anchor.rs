//! Anchor id derivation.
//!
//! Provides [`Anchor`] for turning a heading into the `id` attribute it is
//! rewritten with and the link target the table of contents points at.

use md5::{Digest, Md5};

use crate::heading::HeadingMatch;

/// Default prefix for hash-derived ids.
pub const DEFAULT_ID_PREFIX: &str = "id-";

/// Anchor of a single heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    /// Value of the heading's `id` attribute.
    pub id: String,
    /// Whether the id was supplied by the author.
    pub explicit: bool,
}

impl Anchor {
    /// Resolve the anchor for a matched heading.
    ///
    /// An explicit `id` attribute wins regardless of the title; otherwise the
    /// id is derived from the title with [`derive_id`].
    #[must_use]
    pub fn for_heading(heading: &HeadingMatch<'_>, prefix: &str) -> Self {
        match heading.explicit_id {
            Some(id) => Self {
                id: id.to_owned(),
                explicit: true,
            },
            None => Self {
                id: derive_id(heading.title, prefix),
                explicit: false,
            },
        }
    }

    /// Link target for this anchor (`#` + id).
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Derive a stable anchor id from a heading title.
///
/// # Hash Format
///
/// `{prefix}` followed by the hex-encoded MD5 of the trimmed title. The same
/// title always yields the same id, so links survive rebuilds.
#[must_use]
pub fn derive_id(title: &str, prefix: &str) -> String {
    let digest = Md5::digest(title.trim().as_bytes());
    format!("{prefix}{}", hex::encode(digest))
}
