//! Text renderings of a [`FolderTree`].

use std::fmt::{Display, Write};

use crate::{FolderTree, Node, builder::Indent};

/// Render a tree as the body of an object literal, without the outer braces
/// and without quotes: `private:{quotas:{getQuotas:getQuotas(baseParams)}}`.
///
/// Leaf values are written as they are; they must already be valid
/// expression or type fragments.
pub fn serialize_compact<T: Display>(tree: &FolderTree<T>) -> String {
    let mut out = String::new();
    write_compact(tree, &mut out);
    out
}

fn write_compact<T: Display>(tree: &FolderTree<T>, out: &mut String) {
    for (i, (key, node)) in tree.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(key);
        out.push(':');
        match node {
            Node::Leaf(value) => {
                let _ = write!(out, "{value}");
            }
            Node::Branch(child) => {
                out.push('{');
                write_compact(child, out);
                out.push('}');
            }
        }
    }
}

/// Render a docs tree as a nested Markdown list.
///
/// Each key becomes `- **key**` on its own line, indented by one tab per
/// level starting at `depth`. A described leaf is followed by
/// `: *description*`, an undescribed one by `unknown`.
pub fn serialize_outline(tree: &FolderTree<Option<String>>, depth: usize) -> String {
    let tabs = Indent::MARKDOWN.repeat(depth);
    let mut out = String::new();
    for (key, node) in tree.iter() {
        let _ = write!(out, "\n{tabs}- **{key}**");
        match node {
            Node::Leaf(Some(text)) => {
                let _ = write!(out, ": *{text}*");
            }
            Node::Leaf(None) => out.push_str("unknown"),
            Node::Branch(child) => out.push_str(&serialize_outline(child, depth + 1)),
        }
    }
    out
}
