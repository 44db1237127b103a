//! Binary search tree pane
//!
//! The tree is drawn as an indented outline, right subtree above left so the
//! larger values read upward:
//!
//! ```text
//! 64
//! ├─R 90
//! └─L 34
//!     └─L 25
//! ```

use crate::snapshot::{TreeNode, TreeSnapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Build the outline lines for `root`, highlighting the insertion path
pub fn tree_lines(root: &TreeNode, snapshot: &TreeSnapshot) -> Vec<Line<'static>> {
    let path: FxHashSet<i64> = snapshot.path.iter().copied().collect();
    let mut lines = Vec::new();
    push_node(&mut lines, root, snapshot, &path, String::new(), None, true);
    lines
}

fn push_node(
    lines: &mut Vec<Line<'static>>,
    node: &TreeNode,
    snapshot: &TreeSnapshot,
    path: &FxHashSet<i64>,
    prefix: String,
    side: Option<char>,
    is_last: bool,
) {
    let style = if snapshot.inserting == Some(node.value) {
        let color = if snapshot.inserted {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else if path.contains(&node.value) {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let (connector, child_prefix) = match side {
        None => (String::new(), String::new()),
        Some(s) => {
            let branch = if is_last { "└─" } else { "├─" };
            let rest = if is_last { "    " } else { "│   " };
            (format!("{}{}{} ", prefix, branch, s), format!("{}{}", prefix, rest))
        }
    };

    lines.push(Line::from(vec![
        Span::styled(connector, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(node.value.to_string(), style),
    ]));

    let children: Vec<(char, &TreeNode)> = [
        node.right.as_deref().map(|n| ('R', n)),
        node.left.as_deref().map(|n| ('L', n)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let count = children.len();
    for (i, (s, child)) in children.into_iter().enumerate() {
        push_node(
            lines,
            child,
            snapshot,
            path,
            child_prefix.clone(),
            Some(s),
            i + 1 == count,
        );
    }
}

/// Lines shown before a tree has been built from `values`
pub fn idle_lines(values: &[i64]) -> Vec<Line<'static>> {
    if values.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty tree)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    let queued: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    vec![
        Line::from(vec![
            Span::styled("Insert order: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(queued.join(" "), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Press Enter to build the tree",
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        )),
    ]
}

/// Render the pending dataset while no tree trace is loaded
pub fn render_idle_tree_pane(frame: &mut Frame, area: Rect, values: &[i64]) {
    let block = Block::default()
        .title(" Binary Search Tree ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    frame.render_widget(Paragraph::new(idle_lines(values)).block(block), area);
}

/// Render the tree from the current snapshot, or a placeholder when empty
pub fn render_tree_pane(frame: &mut Frame, area: Rect, snapshot: &TreeSnapshot) {
    let title = match snapshot.inserting {
        Some(value) if snapshot.inserted => format!(" Binary Search Tree · inserting {} ", value),
        Some(value) => format!(" Binary Search Tree · {} already present ", value),
        None => " Binary Search Tree ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = match &snapshot.tree {
        Some(root) => Paragraph::new(tree_lines(root, snapshot)).block(block),
        None => Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment)),
    };
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::tree;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_outline_shape() {
        let result = tree::trace(&[64, 34, 90, 25]);
        let last = result.snapshots.last().expect("non-empty");
        let root = last.tree.as_ref().expect("tree built");
        let text: Vec<String> = tree_lines(root, last).iter().map(plain).collect();
        assert_eq!(text, vec!["64", "├─R 90", "└─L 34", "    └─L 25"]);
    }

    #[test]
    fn test_idle_lines_show_pending_dataset() {
        let text: Vec<String> = idle_lines(&[64, 34, 90]).iter().map(plain).collect();
        assert_eq!(text[0], "Insert order: 64 34 90");
        assert!(text.iter().any(|l| l.contains("Press Enter")));

        let empty: Vec<String> = idle_lines(&[]).iter().map(plain).collect();
        assert_eq!(empty, vec!["(empty tree)"]);
    }
}
