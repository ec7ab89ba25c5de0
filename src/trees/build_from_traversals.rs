//! Construct Binary Tree from Preorder and Inorder Traversal (LeetCode
//! 105). Values are distinct; preorder supplies roots in order while the
//! inorder position splits each subtree's value range.

use std::collections::HashMap;

use super::TreeNode;

pub fn build_from_preorder_inorder(
    preorder: &[i64],
    inorder: &[i64],
) -> Option<Box<TreeNode>> {
    if preorder.len() != inorder.len() {
        return None;
    }
    let positions: HashMap<i64, usize> = inorder
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();

    let mut next = 0;
    build(preorder, &positions, &mut next, 0, inorder.len())
}

fn build(
    preorder: &[i64],
    positions: &HashMap<i64, usize>,
    next: &mut usize,
    lo: usize,
    hi: usize,
) -> Option<Box<TreeNode>> {
    if lo >= hi || *next >= preorder.len() {
        return None;
    }
    let val = preorder[*next];
    let mid = *positions.get(&val)?;
    if mid < lo || mid >= hi {
        return None; // inconsistent traversal pair
    }
    *next += 1;

    let mut node = Box::new(TreeNode::new(val));
    node.left = build(preorder, positions, next, lo, mid);
    node.right = build(preorder, positions, next, mid + 1, hi);
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leetcode_sample() {
        let tree = build_from_preorder_inorder(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7]);
        let expected = TreeNode::branch(
            3,
            TreeNode::leaf(9),
            TreeNode::branch(20, TreeNode::leaf(15), TreeNode::leaf(7)),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn rebuilt_inorder_matches_input() {
        let inorder = [4, 2, 5, 1, 6, 3];
        let preorder = [1, 2, 4, 5, 3, 6];
        let tree = build_from_preorder_inorder(&preorder, &inorder).unwrap();
        assert_eq!(tree.inorder(), inorder);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(build_from_preorder_inorder(&[], &[]), None);
        assert_eq!(build_from_preorder_inorder(&[1], &[1]), TreeNode::leaf(1));
        assert_eq!(build_from_preorder_inorder(&[1, 2], &[2]), None);
    }

    #[test]
    fn left_skewed_chain() {
        let tree = build_from_preorder_inorder(&[3, 2, 1], &[1, 2, 3]).unwrap();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.inorder(), vec![1, 2, 3]);
    }
}
