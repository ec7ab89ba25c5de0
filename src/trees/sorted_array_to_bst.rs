//! Convert Sorted Array to Binary Search Tree (LeetCode 108): midpoint as
//! root keeps the tree height-balanced.

use super::TreeNode;

pub fn sorted_array_to_bst(values: &[i64]) -> Option<Box<TreeNode>> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    Some(Box::new(TreeNode {
        val: values[mid],
        left: sorted_array_to_bst(&values[..mid]),
        right: sorted_array_to_bst(&values[mid + 1..]),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_balanced(node: &TreeNode) -> bool {
        let left = node.left.as_deref().map_or(0, TreeNode::height);
        let right = node.right.as_deref().map_or(0, TreeNode::height);
        left.abs_diff(right) <= 1
            && node.left.as_deref().map_or(true, is_balanced)
            && node.right.as_deref().map_or(true, is_balanced)
    }

    #[test]
    fn inorder_recovers_the_input() {
        let values = [-10, -3, 0, 5, 9];
        let tree = sorted_array_to_bst(&values).unwrap();
        assert_eq!(tree.inorder(), values);
        assert!(is_balanced(&tree));
    }

    #[test]
    fn long_runs_stay_logarithmic() {
        let values: Vec<i64> = (0..1023).collect();
        let tree = sorted_array_to_bst(&values).unwrap();
        assert_eq!(tree.height(), 10);
        assert!(is_balanced(&tree));
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(sorted_array_to_bst(&[]), None);
        assert_eq!(sorted_array_to_bst(&[4]), TreeNode::leaf(4));
    }
}
