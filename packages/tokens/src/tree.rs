use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Terminal unit of a token tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenLeaf {
    pub value: String,
}

impl TokenLeaf {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Either a leaf or a nested tree.
///
/// In JSON a leaf is an object whose only key is `value` holding a string;
/// every other object is a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Branch(TokenTree),
}

impl TokenNode {
    pub fn as_leaf(&self) -> Option<&TokenLeaf> {
        match self {
            TokenNode::Leaf(leaf) => Some(leaf),
            TokenNode::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&TokenTree> {
        match self {
            TokenNode::Branch(tree) => Some(tree),
            TokenNode::Leaf(_) => None,
        }
    }
}

impl From<TokenLeaf> for TokenNode {
    fn from(leaf: TokenLeaf) -> Self {
        TokenNode::Leaf(leaf)
    }
}

impl From<TokenTree> for TokenNode {
    fn from(tree: TokenTree) -> Self {
        TokenNode::Branch(tree)
    }
}

/// Ordered mapping from key to [`TokenNode`].
///
/// Iteration order is insertion order. Replacing the node under an existing
/// key keeps the key's position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTree {
    entries: IndexMap<String, TokenNode>,
}

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf, returning the tree for chaining
    pub fn with_leaf(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, TokenLeaf::new(value));
        self
    }

    /// Add a nested tree, returning the tree for chaining
    pub fn with_branch(mut self, key: impl Into<String>, branch: TokenTree) -> Self {
        self.insert(key, branch);
        self
    }

    /// Insert or replace the node under `key`, returning the previous node.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<TokenNode>) -> Option<TokenNode> {
        self.entries.insert(key.into(), node.into())
    }

    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Follow `path` segment by segment
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&TokenNode> {
        let (first, rest) = path.split_first()?;
        let node = self.entries.get(first.as_ref())?;
        if rest.is_empty() {
            return Some(node);
        }
        node.as_branch()?.lookup(rest)
    }

    /// Leaf at a dotted path such as `colors.background.primary`.
    ///
    /// Returns `None` when the path is missing or ends on a branch.
    pub fn leaf(&self, dotted_path: &str) -> Option<&TokenLeaf> {
        let segments: Vec<&str> = dotted_path.split('.').collect();
        self.lookup(&segments)?.as_leaf()
    }

    /// Total number of leaves at any depth
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                TokenNode::Leaf(_) => 1,
                TokenNode::Branch(tree) => tree.leaf_count(),
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a TokenTree {
    type Item = (&'a String, &'a TokenNode);
    type IntoIter = indexmap::map::Iter<'a, String, TokenNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> TokenTree {
        serde_json::from_value(value).expect("valid token tree")
    }

    #[test]
    fn test_deserialize_nested_tree() {
        let tokens = tree(json!({
            "colors": {
                "background": {
                    "primary": { "value": "#fff" }
                }
            }
        }));

        assert_eq!(tokens.leaf("colors.background.primary").unwrap().value, "#fff");
        assert!(tokens.leaf("colors.background").is_none());
        assert!(tokens.leaf("colors.font.primary").is_none());
    }

    #[test]
    fn test_branch_with_value_key_is_not_a_leaf() {
        let tokens = tree(json!({
            "opacity": {
                "value": { "value": "0.5" }
            }
        }));

        assert_eq!(tokens.leaf("opacity.value").unwrap().value, "0.5");
    }

    #[test]
    fn test_leaf_value_must_be_string() {
        let result: Result<TokenTree, _> = serde_json::from_value(json!({
            "space": { "small": "1rem" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let tokens = tree(json!({
            "zeta": { "value": "1" },
            "alpha": { "value": "2" },
            "mu": { "value": "3" }
        }));

        let keys: Vec<&str> = tokens.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut tokens = TokenTree::new()
            .with_leaf("a", "1")
            .with_leaf("b", "2");
        tokens.insert("a", TokenLeaf::new("9"));

        let keys: Vec<&str> = tokens.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(tokens.leaf("a").unwrap().value, "9");
    }

    #[test]
    fn test_serialize_roundtrip_keeps_shape() {
        let source = json!({
            "space": {
                "small": { "value": "1rem" },
                "large": { "value": "2rem" }
            }
        });
        let tokens = tree(source.clone());
        assert_eq!(serde_json::to_value(&tokens).unwrap(), source);
    }

    #[test]
    fn test_leaf_count() {
        let tokens = TokenTree::new()
            .with_leaf("a", "1")
            .with_branch("b", TokenTree::new().with_leaf("c", "2").with_leaf("d", "3"));
        assert_eq!(tokens.leaf_count(), 3);
    }
}
