//! Shared code generation utilities for axgen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`tree`] - Aggregation of route folders into the client namespace tree
//! - [`serialize`] - Compact and outline renderings of a tree
//! - [`language`] - The [`LanguageCodegen`](language::LanguageCodegen) trait

pub mod builder;
pub mod language;
pub mod serialize;
pub mod tree;

pub use serialize::{serialize_compact, serialize_outline};
pub use tree::{FolderTree, Node, tree_key};
