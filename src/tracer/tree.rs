//! Binary search tree insertion tracer
//!
//! Values are inserted strictly in input order. Inserting a value that is
//! already present leaves the tree unchanged but still records the step.

use crate::snapshot::{TreeNode, TreeSnapshot, TreeTrace};
use std::cmp::Ordering;

/// Insert `value` below `slot`, appending every visited node value to `path`.
///
/// Returns `false` when an equal value was reached and nothing was inserted.
pub fn insert_with_path(slot: &mut Option<Box<TreeNode>>, value: i64, path: &mut Vec<i64>) -> bool {
    let mut cursor = slot;
    while let Some(node) = cursor {
        path.push(node.value);
        cursor = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *cursor = Some(Box::new(TreeNode::new(value)));
    true
}

/// Build a BST from `values`, one snapshot per value
pub fn trace(values: &[i64]) -> TreeTrace {
    let mut root: Option<Box<TreeNode>> = None;
    let mut snapshots = Vec::with_capacity(values.len().max(1));
    let mut comparisons = 0;

    for &value in values {
        let mut path = Vec::new();
        let inserted = insert_with_path(&mut root, value, &mut path);
        comparisons += path.len();

        snapshots.push(TreeSnapshot {
            tree: root.as_deref().cloned(),
            inserting: Some(value),
            path,
            inserted,
            comparisons,
            completed: false,
        });
    }

    if snapshots.is_empty() {
        snapshots.push(TreeSnapshot::empty());
    }
    if let Some(last) = snapshots.last_mut() {
        last.completed = true;
    }

    TreeTrace {
        final_tree: root.map(|node| *node),
        snapshots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_excludes_new_leaf() {
        let result = trace(&[50, 30, 40]);
        assert_eq!(result.snapshots[0].path, Vec::<i64>::new());
        assert_eq!(result.snapshots[1].path, vec![50]);
        assert_eq!(result.snapshots[2].path, vec![50, 30]);
        assert_eq!(result.snapshots[2].comparisons, 3);
    }

    #[test]
    fn test_earlier_snapshots_are_independent() {
        let result = trace(&[2, 1, 3]);
        let first = result.snapshots[0].tree.as_ref().expect("root exists");
        assert_eq!(first.node_count(), 1);
        assert_eq!(result.final_tree.as_ref().map(|t| t.node_count()), Some(3));
    }

    #[test]
    fn test_only_last_snapshot_completed() {
        let result = trace(&[5, 1, 9]);
        let flags: Vec<bool> = result.snapshots.iter().map(|s| s.completed).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_empty_input_baseline() {
        let result = trace(&[]);
        assert_eq!(result.snapshots.len(), 1);
        assert_eq!(result.snapshots[0], TreeSnapshot::empty());
        assert!(result.final_tree.is_none());
    }
}
