use crate::tree::{TokenLeaf, TokenNode, TokenTree};

/// Visitor for walking a token tree depth-first in iteration order
///
/// The default implementation of `visit_branch` walks into nested trees.
/// Override `visit_leaf` to act on every leaf; `path` holds the keys from
/// the root down to the current node.
pub trait TokenVisitor: Sized {
    fn visit_branch(&mut self, path: &mut Vec<String>, tree: &TokenTree) {
        walk_tree(self, path, tree);
    }

    fn visit_leaf(&mut self, _path: &[String], _leaf: &TokenLeaf) {
        // Leaf node, no children to walk
    }
}

pub fn walk_tree<V: TokenVisitor>(visitor: &mut V, path: &mut Vec<String>, tree: &TokenTree) {
    for (key, node) in tree {
        path.push(key.clone());
        match node {
            TokenNode::Leaf(leaf) => visitor.visit_leaf(path, leaf),
            TokenNode::Branch(branch) => visitor.visit_branch(path, branch),
        }
        path.pop();
    }
}

/// Every leaf with its full path, in tree iteration order
pub fn leaves(tree: &TokenTree) -> Vec<(Vec<String>, &TokenLeaf)> {
    fn collect<'a>(
        tree: &'a TokenTree,
        path: &mut Vec<String>,
        out: &mut Vec<(Vec<String>, &'a TokenLeaf)>,
    ) {
        for (key, node) in tree {
            path.push(key.clone());
            match node {
                TokenNode::Leaf(leaf) => out.push((path.clone(), leaf)),
                TokenNode::Branch(branch) => collect(branch, path, out),
            }
            path.pop();
        }
    }

    let mut out = Vec::with_capacity(tree.leaf_count());
    collect(tree, &mut Vec::new(), &mut out);
    out
}
