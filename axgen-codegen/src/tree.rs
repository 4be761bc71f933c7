//! Aggregation of route folders into the client namespace tree.
//!
//! Every route contributes its folder segments as a path into the tree. The
//! root segment is kept verbatim (it is a top-level namespace such as
//! `private` or `public`); deeper segments are camelCased. Insertion is
//! idempotent: namespaces are shared between routes, and a path that already
//! holds a value is never computed or written again.
//!
//! The same entries folded with different leaf functions always produce
//! trees of the same shape, which is what lets the generated client object
//! and its type be built separately and still line up.

use std::{convert::Infallible, fmt};

use axgen_core::to_camel_case;
use indexmap::IndexMap;
use serde::Serialize;

/// A value or a nested namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node<T> {
    Leaf(T),
    Branch(FolderTree<T>),
}

impl<T> Node<T> {
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&FolderTree<T>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(tree) => Some(tree),
        }
    }
}

/// Ordered mapping from normalized folder segments to nodes.
///
/// Keys keep their first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FolderTree<T> {
    children: IndexMap<String, Node<T>>,
}

impl<T> Default for FolderTree<T> {
    fn default() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }
}

/// Tree key of the segment at `depth`.
pub fn tree_key(depth: usize, segment: &str) -> String {
    if depth == 0 {
        segment.to_string()
    } else {
        to_camel_case(segment)
    }
}

/// Rendering of a path of keys for log messages.
struct KeyPath<'a>(&'a [String]);

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, segment) in self.0.iter().enumerate() {
            if depth > 0 {
                f.write_str(".")?;
            }
            f.write_str(&tree_key(depth, segment))?;
        }
        Ok(())
    }
}

impl<T> FolderTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `entries` into a tree, computing each leaf with `leaf`.
    ///
    /// Entries are processed one at a time, in order. `leaf` receives the
    /// entry's raw folder segments and its payload, and is only called for
    /// paths that do not hold a value yet.
    pub fn build<'a, P, I, F>(entries: I, mut leaf: F) -> Self
    where
        I: IntoIterator<Item = (&'a [String], P)>,
        F: FnMut(&[String], P) -> T,
    {
        match Self::try_build(entries, |folders, payload| {
            Ok::<_, Infallible>(leaf(folders, payload))
        }) {
            Ok(tree) => tree,
            Err(never) => match never {},
        }
    }

    /// Like [`FolderTree::build`] with a fallible leaf function. The first
    /// error stops the fold.
    pub fn try_build<'a, P, I, F, E>(entries: I, mut leaf: F) -> Result<Self, E>
    where
        I: IntoIterator<Item = (&'a [String], P)>,
        F: FnMut(&[String], P) -> Result<T, E>,
    {
        let mut tree = Self::new();
        for (folders, payload) in entries {
            tree.insert_with(folders, payload, &mut leaf)?;
        }
        Ok(tree)
    }

    fn insert_with<P, F, E>(&mut self, folders: &[String], payload: P, leaf: &mut F) -> Result<(), E>
    where
        F: FnMut(&[String], P) -> Result<T, E>,
    {
        let Some((last, parents)) = folders.split_last() else {
            tracing::warn!("ignoring entry without folders");
            return Ok(());
        };

        let mut level = &mut self.children;
        for (depth, segment) in parents.iter().enumerate() {
            let node = level
                .entry(tree_key(depth, segment))
                .or_insert_with(|| Node::Branch(FolderTree::new()));
            level = match node {
                Node::Branch(tree) => &mut tree.children,
                Node::Leaf(_) => {
                    tracing::warn!(
                        path = %KeyPath(folders),
                        at = %KeyPath(&folders[..=depth]),
                        "route is nested under another route, skipped"
                    );
                    return Ok(());
                }
            };
        }

        let key = tree_key(parents.len(), last);
        match level.get(&key) {
            Some(Node::Leaf(_)) => {
                tracing::debug!(path = %KeyPath(folders), "path already populated");
            }
            Some(Node::Branch(_)) => {
                tracing::warn!(
                    path = %KeyPath(folders),
                    "route collides with a namespace of other routes, skipped"
                );
            }
            None => {
                let value = leaf(folders, payload)?;
                level.insert(key, Node::Leaf(value));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node<T>)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Node at a path of already-normalized keys.
    pub fn get(&self, path: &[&str]) -> Option<&Node<T>> {
        let (first, rest) = path.split_first()?;
        let node = self.children.get(*first)?;
        if rest.is_empty() {
            return Some(node);
        }
        node.as_branch()?.get(rest)
    }

    /// Depth-first leaf values, in key order.
    pub fn leaves(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'s>(&'s self, out: &mut Vec<&'s T>) {
        for node in self.children.values() {
            match node {
                Node::Leaf(value) => out.push(value),
                Node::Branch(tree) => tree.collect_leaves(out),
            }
        }
    }

    /// Same keys, same order, same nesting; leaf values are not compared.
    pub fn same_shape<U>(&self, other: &FolderTree<U>) -> bool {
        self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(other.children.iter())
                .all(|((ka, a), (kb, b))| {
                    ka == kb
                        && match (a, b) {
                            (Node::Leaf(_), Node::Leaf(_)) => true,
                            (Node::Branch(a), Node::Branch(b)) => a.same_shape(b),
                            _ => false,
                        }
                })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn folders(path: &str) -> Vec<String> {
        path.split('/').map(str::to_string).collect()
    }

    #[test]
    fn test_root_verbatim_rest_camel_cased() {
        let entries = [folders("private/Enrichments/CreateEnrichment")];
        let tree = FolderTree::build(entries.iter().map(|f| (f.as_slice(), ())), |_, _| "function");

        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["private"]);
        let leaf = tree.get(&["private", "enrichments", "createEnrichment"]).unwrap();
        assert_eq!(leaf.as_leaf(), Some(&"function"));
    }

    #[test]
    fn test_duplicate_path_is_computed_once() {
        let entries = [folders("public/Auth/Login"), folders("public/Auth/Login")];
        let calls = Cell::new(0);
        let tree = FolderTree::build(entries.iter().enumerate().map(|(i, f)| (f.as_slice(), i)), |_, i| {
            calls.set(calls.get() + 1);
            i
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(tree.get(&["public", "auth", "login"]).and_then(Node::as_leaf), Some(&0));
    }

    #[test]
    fn test_shared_namespace_is_completed() {
        let entries = [folders("private/Quotas/GetQuotas"), folders("private/Quotas/LockQuotas/Access")];
        let tree = FolderTree::build(entries.iter().map(|f| (f.as_slice(), ())), |_, _| 1);

        let quotas = tree.get(&["private", "quotas"]).and_then(Node::as_branch).unwrap();
        assert_eq!(quotas.keys().collect::<Vec<_>>(), vec!["getQuotas", "lockQuotas"]);
    }

    #[test]
    fn test_leaf_blocking_deeper_route_is_kept() {
        let entries = [folders("private/Quotas"), folders("private/Quotas/GetQuotas")];
        let tree = FolderTree::build(entries.iter().map(|f| (f.as_slice(), ())), |f, _| f.len());

        assert_eq!(tree.get(&["private", "quotas"]).and_then(Node::as_leaf), Some(&2));
        assert!(tree.get(&["private", "quotas", "getQuotas"]).is_none());
    }

    #[test]
    fn test_namespace_is_never_replaced_by_leaf() {
        let entries = [folders("private/Quotas/GetQuotas"), folders("private/Quotas")];
        let tree = FolderTree::build(entries.iter().map(|f| (f.as_slice(), ())), |f, _| f.len());

        assert!(tree.get(&["private", "quotas"]).and_then(Node::as_branch).is_some());
        assert_eq!(tree.leaves(), vec![&3]);
    }

    #[test]
    fn test_try_build_stops_on_error() {
        let entries = [folders("a/B"), folders("a/C"), folders("a/D")];
        let seen = Cell::new(0);
        let result: Result<FolderTree<()>, String> =
            FolderTree::try_build(entries.iter().map(|f| (f.as_slice(), ())), |f, _| {
                seen.set(seen.get() + 1);
                if f[1] == "C" { Err("boom".to_string()) } else { Ok(()) }
            });
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_empty_folders_are_ignored() {
        let empty: Vec<String> = Vec::new();
        let tree = FolderTree::build([(empty.as_slice(), ())], |_, _| 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_segments_with_dots_stay_one_key() {
        let entries = [folders("public/v1.2/Get")];
        let tree = FolderTree::build(entries.iter().map(|f| (f.as_slice(), ())), |_, _| ());
        let public = tree.get(&["public"]).and_then(Node::as_branch).unwrap();
        assert_eq!(public.len(), 1);
    }

    #[test]
    fn test_serialize_as_json() {
        let entries = [folders("public/Auth/Login")];
        let tree = FolderTree::build(entries.iter().map(|f| (f.as_slice(), ())), |_, _| "Log in");
        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"{"public":{"auth":{"login":"Log in"}}}"#
        );
    }
}
