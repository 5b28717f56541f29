//! 2-d tree navigation utilities for interactive visualization.

use kd_tree::{Axis, KdNode, KdTree};
use macroquad::prelude::*;

use crate::{Viewport, draw_domain_rect, draw_point};

/// Direction taken at each node in the navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Lower,
    Upper,
}

/// Interactive tree navigator for exploring tree structure.
pub struct TreeNavigator {
    path: Vec<Direction>,
}

impl Default for TreeNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeNavigator {
    /// Creates a new navigator starting at the root.
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Returns the current navigation path.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Returns the current depth in the tree.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Attempts to navigate to the lower child. Returns true if successful.
    pub fn go_lower(&mut self, tree: &KdTree) -> bool {
        if self.current_node(tree).and_then(KdNode::lower).is_some() {
            self.path.push(Direction::Lower);
            return true;
        }
        false
    }

    /// Attempts to navigate to the upper child. Returns true if successful.
    pub fn go_upper(&mut self, tree: &KdTree) -> bool {
        if self.current_node(tree).and_then(KdNode::upper).is_some() {
            self.path.push(Direction::Upper);
            return true;
        }
        false
    }

    /// Navigates to the parent node. Returns true if not already at root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Returns to the root node.
    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input for navigation.
    /// Returns true if navigation state changed.
    pub fn update(&mut self, tree: &KdTree) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::L) {
            changed = self.go_lower(tree);
        }
        if is_key_pressed(KeyCode::U) {
            changed = self.go_upper(tree);
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.go_parent();
        }
        if is_key_pressed(KeyCode::R) && !self.path.is_empty() {
            self.go_root();
            changed = true;
        }

        changed
    }

    /// Returns a reference to the current node, if the tree is non-empty.
    pub fn current_node<'a>(&self, tree: &'a KdTree) -> Option<&'a KdNode> {
        tree.root().and_then(|root| get_node_at_path(root, &self.path))
    }

    /// Highlights the current node's region and the points of its subtree.
    pub fn render(&self, tree: &KdTree, viewport: &Viewport) {
        // At the root the whole tree is selected; nothing to single out.
        if self.path.is_empty() {
            return;
        }
        if let Some(node) = self.current_node(tree) {
            draw_domain_rect(viewport, node.rect(), 3.0, ORANGE);
            render_subtree(node, viewport);
        }
    }

    /// Draws the navigation UI overlay.
    pub fn draw_ui(&self, tree: &KdTree, y_offset: f32) {
        let (node_points, axis, has_lower, has_upper, is_leaf) =
            if let Some(node) = self.current_node(tree) {
                (
                    node.len(),
                    Some(node.axis()),
                    node.lower().is_some(),
                    node.upper().is_some(),
                    node.is_leaf(),
                )
            } else {
                (0, None, false, false, true)
            };

        draw_text(
            &format!(
                "Subtree: {} points, split {}",
                node_points,
                match axis {
                    Some(Axis::X) => "x (vertical)",
                    Some(Axis::Y) => "y (horizontal)",
                    None => "-",
                }
            ),
            10.0,
            y_offset,
            18.0,
            BLACK,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_label(&self.path), self.path.len()),
            10.0,
            y_offset + 20.0,
            18.0,
            DARKBLUE,
        );
        draw_text(
            &format!(
                "Children: {}{}{}",
                if has_lower { "[L]ower " } else { "" },
                if has_upper { "[U]pper " } else { "" },
                if is_leaf { "(leaf)" } else { "" }
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            if is_leaf { ORANGE } else { DARKGREEN },
        );
        draw_text("[P]arent | [R]oot", 10.0, y_offset + 60.0, 16.0, DARKGRAY);
    }
}

/// Formats a navigation path, e.g. `root -> L -> U`.
pub fn path_label(path: &[Direction]) -> String {
    std::iter::once("root")
        .chain(path.iter().map(|d| match d {
            Direction::Lower => "L",
            Direction::Upper => "U",
        }))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Navigates to a node following the path, returns None if path is invalid.
fn get_node_at_path<'a>(root: &'a KdNode, path: &[Direction]) -> Option<&'a KdNode> {
    let mut current = root;
    for dir in path {
        current = match dir {
            Direction::Lower => current.lower()?,
            Direction::Upper => current.upper()?,
        };
    }
    Some(current)
}

/// Recursively draws the points of a node's subtree.
fn render_subtree(node: &KdNode, viewport: &Viewport) {
    draw_point(viewport, node.point(), 5.0, ORANGE);
    if let Some(lower) = node.lower() {
        render_subtree(lower, viewport);
    }
    if let Some(upper) = node.upper() {
        render_subtree(upper, viewport);
    }
}
