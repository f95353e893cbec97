//! Design token trees.
//!
//! A token tree is an ordered, arbitrarily nested mapping whose leaves are
//! `{ "value": "..." }` records. This crate owns the data model, the deep
//! merge used for theme inheritance, and a visitor for walking leaves.

pub mod merge;
pub mod tree;
pub mod visitor;

pub use merge::merge;
pub use tree::{TokenLeaf, TokenNode, TokenTree};
pub use visitor::{leaves, walk_tree, TokenVisitor};
