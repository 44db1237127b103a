// Binary search tree nodes and per-insertion snapshots

use std::fmt;

/// A BST node owning its children outright (no parent links)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    /// Values in ascending (in-order) order
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut cursor = Some(self);

        while cursor.is_some() || !stack.is_empty() {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node.value);
                cursor = node.right.as_deref();
            }
        }
        out
    }

    /// Number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.node_count())
            + self.right.as_ref().map_or(0, |n| n.node_count())
    }

    /// Height in levels (a lone node has height 1)
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        1 + left.max(right)
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut cursor = Some(self);
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
                std::cmp::Ordering::Equal => return true,
            };
        }
        false
    }
}

/// Tree state right after processing one dataset value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSnapshot {
    /// Deep copy of the root; `None` for an empty tree
    pub tree: Option<TreeNode>,
    /// `None` only for the baseline of an empty dataset
    pub inserting: Option<i64>,
    /// Values visited root-first, excluding a newly created leaf
    pub path: Vec<i64>,
    /// False when the value was already present
    pub inserted: bool,
    /// Cumulative node visits
    pub comparisons: usize,
    pub completed: bool,
}

impl TreeSnapshot {
    /// Completed snapshot of an empty tree with nothing inserted
    pub fn empty() -> Self {
        TreeSnapshot {
            tree: None,
            inserting: None,
            path: Vec::new(),
            inserted: false,
            comparisons: 0,
            completed: true,
        }
    }
}

impl fmt::Display for TreeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inserting {
            Some(value) if self.inserted => write!(f, "insert {}", value)?,
            Some(value) => write!(f, "insert {} (duplicate, skipped)", value)?,
            None => write!(f, "empty tree")?,
        }
        write!(f, " path={:?} cmp={}", self.path, self.comparisons)?;
        if let Some(root) = &self.tree {
            write!(f, " in-order={:?}", root.in_order())?;
        }
        if self.completed {
            write!(f, " completed")?;
        }
        Ok(())
    }
}

/// Output of the tree insertion tracer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeTrace {
    pub final_tree: Option<TreeNode>,
    pub snapshots: Vec<TreeSnapshot>,
}
