pub mod build_from_traversals;
pub mod sorted_array_to_bst;
pub mod zigzag;

/// Heap-allocated binary tree node shared by the tree katas.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i64) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn leaf(val: i64) -> Option<Box<TreeNode>> {
        Some(Box::new(Self::new(val)))
    }

    pub fn branch(
        val: i64,
        left: Option<Box<TreeNode>>,
        right: Option<Box<TreeNode>>,
    ) -> Option<Box<TreeNode>> {
        Some(Box::new(Self { val, left, right }))
    }

    /// Left-root-right traversal; the sorted order for a BST.
    pub fn inorder(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.collect_inorder(&mut values);
        values
    }

    fn collect_inorder(&self, values: &mut Vec<i64>) {
        if let Some(left) = &self.left {
            left.collect_inorder(values);
        }
        values.push(self.val);
        if let Some(right) = &self.right {
            right.collect_inorder(values);
        }
    }

    pub fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, TreeNode::height);
        let right = self.right.as_deref().map_or(0, TreeNode::height);
        1 + left.max(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inorder_walks_left_root_right() {
        let root = TreeNode::branch(2, TreeNode::leaf(1), TreeNode::leaf(3)).unwrap();
        assert_eq!(root.inorder(), vec![1, 2, 3]);
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn single_node() {
        let node = TreeNode::new(7);
        assert_eq!(node.inorder(), vec![7]);
        assert_eq!(node.height(), 1);
    }
}
