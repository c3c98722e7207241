//! Table of contents rendering.
//!
//! Produces a two-level list: one `<li>` per top-level heading, with its
//! direct children in a nested `<ul>`. Anything deeper is left out.

use indexer_config::ListConfig;

use crate::tree::{HeadingKey, HeadingTree};

/// Inline styles for the generated list.
///
/// An empty style omits the `style` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListStyle {
    /// Style of the outer `<ol>`.
    pub ol: String,
    /// Style of the nested `<ul>`.
    pub ul: String,
    /// Style of every `<li>`.
    pub li: String,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self::from_config(&ListConfig::default())
    }
}

impl ListStyle {
    /// Create list styles from the `[list]` config section.
    #[must_use]
    pub fn from_config(config: &ListConfig) -> Self {
        Self {
            ol: config.ol_style.clone(),
            ul: config.ul_style.clone(),
            li: config.li_style.clone(),
        }
    }
}

/// Render the heading tree as a nested list of anchor links.
#[must_use]
pub fn render_list(tree: &HeadingTree, style: &ListStyle) -> String {
    let mut out = String::with_capacity(128 + tree.count() * 96);

    open_tag(&mut out, "ol", &style.ol);
    for node in tree {
        open_tag(&mut out, "li", &style.li);
        push_link(&mut out, &node.key);

        if !node.children.is_empty() {
            open_tag(&mut out, "ul", &style.ul);
            for (i, key) in node.children.keys().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                open_tag(&mut out, "li", &style.li);
                push_link(&mut out, key);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }

        out.push_str("</li>");
    }
    out.push_str("</ol>");

    out
}

fn open_tag(out: &mut String, tag: &str, style: &str) {
    out.push('<');
    out.push_str(tag);
    if !style.is_empty() {
        out.push_str(r#" style=""#);
        out.push_str(style);
        out.push('"');
    }
    out.push('>');
}

fn push_link(out: &mut String, key: &HeadingKey) {
    out.push_str(r#"<a href=""#);
    out.push_str(&key.anchor);
    out.push_str(r#"">"#);
    out.push_str(&key.title);
    out.push_str("</a>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::HeadingNode;
    use pretty_assertions::assert_eq;

    fn node(title: &str, children: Vec<HeadingNode>) -> HeadingNode {
        let mut tree = HeadingTree::default();
        for child in children {
            tree.push(child);
        }
        HeadingNode {
            key: HeadingKey {
                anchor: format!("#{}", title.to_lowercase()),
                title: title.to_owned(),
            },
            level: 2,
            label: String::new(),
            children: tree,
        }
    }

    fn tree(nodes: Vec<HeadingNode>) -> HeadingTree {
        let mut tree = HeadingTree::default();
        for n in nodes {
            tree.push(n);
        }
        tree
    }

    fn plain() -> ListStyle {
        ListStyle {
            ol: String::new(),
            ul: String::new(),
            li: String::new(),
        }
    }

    #[test]
    fn test_default_styles() {
        let tree = tree(vec![node("A", vec![node("B", vec![])])]);
        assert_eq!(
            render_list(&tree, &ListStyle::default()),
            concat!(
                r#"<ol style="margin-left: 1.3em;">"#,
                r##"<li style="list-style:inherit;"><a href="#a">A</a>"##,
                r#"<ul style="margin-left: 1.3em;">"#,
                r##"<li style="list-style:inherit;"><a href="#b">B</a></li>"##,
                "</ul></li></ol>"
            )
        );
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(
            render_list(&HeadingTree::default(), &ListStyle::default()),
            r#"<ol style="margin-left: 1.3em;"></ol>"#
        );
    }

    #[test]
    fn test_only_parent_with_children_gets_nested_list() {
        let tree = tree(vec![
            node("One", vec![]),
            node("Two", vec![node("Child", vec![])]),
            node("Three", vec![]),
        ]);
        let html = render_list(&tree, &plain());
        assert_eq!(
            html,
            concat!(
                "<ol>",
                r##"<li><a href="#one">One</a></li>"##,
                r##"<li><a href="#two">Two</a><ul><li><a href="#child">Child</a></li></ul></li>"##,
                r##"<li><a href="#three">Three</a></li>"##,
                "</ol>"
            )
        );
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_children_separated_by_space() {
        let tree = tree(vec![node("P", vec![node("X", vec![]), node("Y", vec![])])]);
        assert_eq!(
            render_list(&tree, &plain()),
            r##"<ol><li><a href="#p">P</a><ul><li><a href="#x">X</a></li> <li><a href="#y">Y</a></li></ul></li></ol>"##
        );
    }

    #[test]
    fn test_grandchildren_not_rendered() {
        let tree = tree(vec![node(
            "Top",
            vec![node("Mid", vec![node("Deep", vec![])])],
        )]);
        let html = render_list(&tree, &plain());
        assert!(html.contains("Mid"));
        assert!(!html.contains("Deep"));
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = ListConfig {
            ol_style: "a".to_owned(),
            ul_style: "b".to_owned(),
            li_style: "c".to_owned(),
        };
        let style = ListStyle::from_config(&config);
        assert_eq!(style.ol, "a");
        assert_eq!(style.ul, "b");
        assert_eq!(style.li, "c");
    }
}
