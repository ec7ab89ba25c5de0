//! Binary Tree Zigzag Level Order Traversal (LeetCode 103): BFS by level,
//! every other level reversed.

use std::collections::VecDeque;

use super::TreeNode;

pub fn zigzag_level_order(root: &Option<Box<TreeNode>>) -> Vec<Vec<i64>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode> = VecDeque::new();
    if let Some(node) = root.as_deref() {
        queue.push_back(node);
    }

    let mut left_to_right = true;
    while !queue.is_empty() {
        let mut level = Vec::with_capacity(queue.len());
        for _ in 0..queue.len() {
            if let Some(node) = queue.pop_front() {
                level.push(node.val);
                if let Some(left) = node.left.as_deref() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right.as_deref() {
                    queue.push_back(right);
                }
            }
        }
        if !left_to_right {
            level.reverse();
        }
        levels.push(level);
        left_to_right = !left_to_right;
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leetcode_sample() {
        // [3, 9, 20, null, null, 15, 7]
        let root = TreeNode::branch(
            3,
            TreeNode::leaf(9),
            TreeNode::branch(20, TreeNode::leaf(15), TreeNode::leaf(7)),
        );
        assert_eq!(
            zigzag_level_order(&root),
            vec![vec![3], vec![20, 9], vec![15, 7]]
        );
    }

    #[test]
    fn left_skewed_alternates() {
        let root = TreeNode::branch(1, TreeNode::branch(2, TreeNode::leaf(3), None), None);
        assert_eq!(zigzag_level_order(&root), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn empty_tree() {
        assert!(zigzag_level_order(&None).is_empty());
    }
}
