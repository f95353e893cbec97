//! Deep merge of token trees.

use crate::tree::{TokenNode, TokenTree};

/// Merge `incoming` over `base`, returning a new tree.
///
/// Branches present on both sides merge key-wise. Anywhere else the incoming
/// node replaces the base node entirely, including leaf/branch shape
/// conflicts. Keys keep the base order; keys only present in `incoming` are
/// appended in their incoming order.
pub fn merge(base: &TokenTree, incoming: &TokenTree) -> TokenTree {
    let mut merged = base.clone();

    for (key, node) in incoming {
        let next = match (merged.get(key), node) {
            (Some(TokenNode::Branch(existing)), TokenNode::Branch(branch)) => {
                TokenNode::Branch(merge(existing, branch))
            }
            _ => node.clone(),
        };
        merged.insert(key.clone(), next);
    }

    merged
}

impl TokenTree {
    /// Method form of [`merge`]: `self` is the base.
    pub fn merged_with(&self, incoming: &TokenTree) -> TokenTree {
        merge(self, incoming)
    }
}
