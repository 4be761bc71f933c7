use std::{cell::RefCell, collections::BTreeSet};

use axgen_codegen::{FolderTree, Node, serialize_compact};

const ROUTES: &[&str] = &[
    "private/Enrichments/CreateEnrichment",
    "private/Enrichments/GetEnrichments",
    "private/Enrichments/GetEnrichment",
    "private/Enrichments/UpdateEnrichment",
    "private/Enrichments/DeleteEnrichment",
    "private/Quotas/GetQuotas",
    "private/Quotas/LockQuotas/Access",
    "private/Quotas/LockQuotas/UnLock",
    "private/Quotas/DeleteQuotas",
    "public/Auth/Login",
    "public/Auth/Change/Password",
    "public/WebClient/Get",
];

fn entries() -> Vec<Vec<String>> {
    ROUTES
        .iter()
        .map(|r| r.split('/').map(str::to_string).collect())
        .collect()
}

fn build<T>(entries: &[Vec<String>], leaf: impl FnMut(&[String], usize) -> T) -> FolderTree<T> {
    FolderTree::build(
        entries.iter().enumerate().map(|(i, f)| (f.as_slice(), i)),
        leaf,
    )
}

#[test]
fn test_twelve_routes() {
    let tree = build(&entries(), |_, _| "function");

    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["private", "public"]);

    let private = tree.get(&["private"]).and_then(Node::as_branch).unwrap();
    assert_eq!(private.keys().collect::<Vec<_>>(), vec!["enrichments", "quotas"]);

    let enrichments = tree
        .get(&["private", "enrichments"])
        .and_then(Node::as_branch)
        .unwrap();
    assert_eq!(
        enrichments.keys().collect::<Vec<_>>(),
        vec![
            "createEnrichment",
            "getEnrichments",
            "getEnrichment",
            "updateEnrichment",
            "deleteEnrichment"
        ]
    );

    let lock_quotas = tree
        .get(&["private", "quotas", "lockQuotas"])
        .and_then(Node::as_branch)
        .expect("lockQuotas is a namespace");
    assert_eq!(lock_quotas.keys().collect::<Vec<_>>(), vec!["access", "unLock"]);

    let change = tree
        .get(&["public", "auth", "change", "password"])
        .and_then(Node::as_leaf);
    assert_eq!(change, Some(&"function"));
    assert_eq!(tree.leaves().len(), ROUTES.len());
}

#[test]
fn test_four_leaf_functions_give_isomorphic_trees() {
    let entries = entries();
    let client = build(&entries, |f, _| format!("{}(baseParams)", f[f.len() - 1]));
    let typings = build(&entries, |f, _| f[f.len() - 1].clone());
    let docs = build(&entries, |_, i| (i % 2 == 0).then(|| format!("route {i}")));
    let mocks = build(&entries, |_, _| "mockFunction()");

    assert!(client.same_shape(&typings));
    assert!(client.same_shape(&docs));
    assert!(client.same_shape(&mocks));
}

#[test]
fn test_shape_does_not_depend_on_order_of_leaf_values() {
    let entries = entries();
    let mut reversed = entries.clone();
    reversed.reverse();

    let a = build(&entries, |_, i| i);
    let b = build(&reversed, |_, i| i);
    assert!(!a.same_shape(&b), "key order follows insertion order");
    assert_eq!(key_paths(&parse_compact(&serialize_compact(&a))).len(), ROUTES.len());
    assert_eq!(
        sorted_paths(&parse_compact(&serialize_compact(&a))),
        sorted_paths(&parse_compact(&serialize_compact(&b)))
    );
}

#[test]
fn test_leaf_calls_follow_entry_order() {
    let entries = entries();
    let calls = RefCell::new(Vec::new());
    build(&entries, |f, _| calls.borrow_mut().push(f.join("/")));
    assert_eq!(calls.into_inner(), ROUTES.to_vec());
}

#[test]
fn test_compact_round_trip_rebuilds_the_same_nesting() {
    let original = build(&entries(), |f, _| format!("{}(baseParams)", f[f.len() - 1]));
    let compact = serialize_compact(&original);

    let paths: Vec<Vec<String>> = key_paths(&parse_compact(&compact))
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    let rebuilt = FolderTree::build(paths.iter().map(|p| (p.as_slice(), ())), |_, _| ());

    assert!(original.same_shape(&rebuilt));
}

/// Minimal reader for the compact form, used to check its structure.
#[derive(Debug, PartialEq)]
enum Parsed {
    Leaf(String),
    Object(Vec<(String, Parsed)>),
}

fn parse_compact(text: &str) -> Parsed {
    let mut chars = text.chars().peekable();
    let parsed = parse_object(&mut chars);
    assert!(chars.next().is_none(), "trailing input");
    parsed
}

fn parse_object(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Parsed {
    let mut fields = Vec::new();
    loop {
        match chars.peek() {
            None | Some('}') => return Parsed::Object(fields),
            Some(',') => {
                chars.next();
            }
            Some(_) => {
                let key: String = std::iter::from_fn(|| chars.next_if(|c| *c != ':')).collect();
                assert_eq!(chars.next(), Some(':'));
                let value = if chars.next_if_eq(&'{').is_some() {
                    let object = parse_object(chars);
                    assert_eq!(chars.next(), Some('}'));
                    object
                } else {
                    Parsed::Leaf(
                        std::iter::from_fn(|| chars.next_if(|c| *c != ',' && *c != '}')).collect(),
                    )
                };
                fields.push((key, value));
            }
        }
    }
}

fn key_paths(parsed: &Parsed) -> Vec<(Vec<String>, String)> {
    fn walk(parsed: &Parsed, prefix: &mut Vec<String>, out: &mut Vec<(Vec<String>, String)>) {
        match parsed {
            Parsed::Leaf(value) => out.push((prefix.clone(), value.clone())),
            Parsed::Object(fields) => {
                for (key, value) in fields {
                    prefix.push(key.clone());
                    walk(value, prefix, out);
                    prefix.pop();
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(parsed, &mut Vec::new(), &mut out);
    out
}

fn sorted_paths(parsed: &Parsed) -> BTreeSet<String> {
    key_paths(parsed)
        .into_iter()
        .map(|(path, _)| path.join("."))
        .collect()
}
