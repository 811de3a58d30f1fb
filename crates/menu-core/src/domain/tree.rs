//! Ordered tree used to hold rendered menus

use serde::Serialize;

/// A node owning its value and its ordered children.
///
/// Each node may be stamped with the provider that created it, so later
/// passes can tell which provider populated which subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            provider: None,
            children: Vec::new(),
        }
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn set_provider(&mut self, provider: &str) {
        self.provider = Some(provider.to_string());
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `node` as the last child and hands it back.
    pub fn append(&mut self, node: TreeNode<T>) -> &mut TreeNode<T> {
        self.children.push(node);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn append_value(&mut self, value: T) -> &mut TreeNode<T> {
        self.append(TreeNode::new(value))
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Depth-first, pre-order walk over this node and all descendants.
    pub fn walk(&self) -> Vec<&TreeNode<T>> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}
