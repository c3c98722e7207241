//! Heading tree built by the scanner.

/// Identity of a heading in the tree: its link target and title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeadingKey {
    /// Link target including the leading `#` (e.g. `#id-5d41…` or `#setup`).
    pub anchor: String,
    /// Trimmed heading title.
    pub title: String,
}

/// A numbered heading and the headings nested under it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeadingNode {
    /// Anchor and title.
    pub key: HeadingKey,
    /// Heading level (2 for `<h2>`).
    pub level: u8,
    /// Hierarchical label (e.g. "1.2").
    pub label: String,
    /// Headings one level deeper, in document order.
    pub children: HeadingTree,
}

/// Ordered heading tree.
///
/// Entries keep document order. Two headings with the same key stay separate
/// entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct HeadingTree {
    nodes: Vec<HeadingNode>,
}

impl HeadingTree {
    /// Number of entries at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether this level has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over entries at this level in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, HeadingNode> {
        self.nodes.iter()
    }

    /// Keys at this level in document order.
    pub fn keys(&self) -> impl Iterator<Item = &HeadingKey> + '_ {
        self.nodes.iter().map(|node| &node.key)
    }

    /// Total number of headings in the tree, all levels included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| 1 + node.children.count())
            .sum()
    }

    pub(crate) fn push(&mut self, node: HeadingNode) {
        self.nodes.push(node);
    }
}

impl<'a> IntoIterator for &'a HeadingTree {
    type Item = &'a HeadingNode;
    type IntoIter = std::slice::Iter<'a, HeadingNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
