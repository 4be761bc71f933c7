//! The four client trees built from the discovered routes.

use std::collections::HashSet;

use axgen_codegen::{FolderTree, Node, serialize_compact, serialize_outline, tree_key};
use axgen_ir::RouteRecord;

/// Leaf of the mock tree.
pub const MOCK_LEAF: &str = "mockFunction()";

/// Client object, client type, docs and mock trees.
///
/// All four are folded from the same route folders, so they always have the
/// same shape.
#[derive(Debug, Clone)]
pub struct ClientTrees {
    /// Leaves are `<functionName>(baseParams)` calls.
    pub client: FolderTree<String>,
    /// Leaves are function interface names.
    pub typings: FolderTree<String>,
    /// Leaves are route descriptions.
    pub docs: FolderTree<Option<String>>,
    pub mocks: FolderTree<String>,
}

impl ClientTrees {
    pub fn build(routes: &[RouteRecord]) -> Self {
        let entries = || routes.iter().map(|r| (r.folders.segments(), r));
        Self {
            client: FolderTree::build(entries(), |_, route| {
                format!("{}(baseParams)", route.function_name)
            }),
            typings: FolderTree::build(entries(), |_, route| route.function_interface_name.clone()),
            docs: FolderTree::build(entries(), |_, route| route.description.clone()),
            mocks: FolderTree::build(entries(), |_, _| MOCK_LEAF.to_string()),
        }
    }

    /// Members of the client object literal.
    pub fn client_object(&self) -> String {
        serialize_compact(&self.client)
    }

    /// Members of the `AxiosClient` type literal.
    pub fn client_typings(&self) -> String {
        serialize_compact(&self.typings)
    }

    /// Members of the mock client object literal.
    pub fn client_mock(&self) -> String {
        serialize_compact(&self.mocks)
    }

    /// Markdown outline of every route and its description.
    pub fn client_docs(&self) -> String {
        serialize_outline(&self.docs, 0)
    }

    /// Routes whose leaf never made it into the trees: a shorter route already
    /// holds a leaf on their path, a longer one holds a branch at it, or an
    /// earlier route normalized to the same keys.
    pub fn shadowed<'r>(&self, routes: &'r [RouteRecord]) -> Vec<&'r RouteRecord> {
        let mut seen = HashSet::new();
        routes
            .iter()
            .filter(|route| {
                let keys: Vec<String> = route
                    .folders
                    .segments()
                    .iter()
                    .enumerate()
                    .map(|(depth, segment)| tree_key(depth, segment))
                    .collect();
                let path: Vec<&str> = keys.iter().map(String::as_str).collect();
                let is_leaf = matches!(self.client.get(&path), Some(Node::Leaf(_)));
                !(is_leaf && seen.insert(keys))
            })
            .collect()
    }
}
