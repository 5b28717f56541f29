//! Shared visualization utilities for the 2-d tree binaries.

use kd_tree::{Axis, KdNode, KdTree, Point, Rect};
use log::info;
use macroquad::prelude::*;
use nalgebra::Point2;

pub mod loader;
pub mod navigator;
pub mod viewport;

pub use loader::{LoadError, load_points, parse_points};
pub use navigator::TreeNavigator;
pub use viewport::Viewport;

/// Free space around the domain square, in pixels.
pub const MARGIN: f32 = 40.0;

/// Split line color for nodes comparing x (vertical lines).
pub const X_SPLIT_COLOR: Color = RED;

/// Split line color for nodes comparing y (horizontal lines).
pub const Y_SPLIT_COLOR: Color = BLUE;

/// Draws a domain point as a filled dot of `radius` pixels.
pub fn draw_point(viewport: &Viewport, point: Point, radius: f32, color: Color) {
    let screen = viewport.to_screen(point);
    draw_circle(screen.x, screen.y, radius, color);
}

/// Draws the outline of a domain rectangle.
pub fn draw_domain_rect(viewport: &Viewport, rect: &Rect, thickness: f32, color: Color) {
    let (x, y, w, h) = viewport.rect_to_screen(rect);
    draw_rectangle_lines(x, y, w, h, thickness, color);
}

/// Draws a degenerate domain rectangle (a segment) as a line.
pub fn draw_segment(viewport: &Viewport, segment: &Rect, thickness: f32, color: Color) {
    let start = viewport.to_screen(Point::new(segment.xmin(), segment.ymin()));
    let end = viewport.to_screen(Point::new(segment.xmax(), segment.ymax()));
    draw_line(start.x, start.y, end.x, end.y, thickness, color);
}

/// Returns the split line color for a node's axis.
pub fn split_color(axis: Axis) -> Color {
    match axis {
        Axis::X => X_SPLIT_COLOR,
        Axis::Y => Y_SPLIT_COLOR,
    }
}

/// Draws the domain outline, every split segment and every point.
///
/// Each node's split segment spans its own region, so the root's line
/// crosses the whole domain and deeper lines stop at their ancestors'.
pub fn draw_tree(tree: &KdTree, viewport: &Viewport) {
    draw_domain_rect(viewport, tree.bounds(), 1.0, BLACK);
    if let Some(root) = tree.root() {
        draw_node(root, viewport);
    }
}

/// Recursively draws a node subtree: split segments first, points on top.
fn draw_node(node: &KdNode, viewport: &Viewport) {
    draw_segment(viewport, &node.split_segment(), 1.0, split_color(node.axis()));
    if let Some(lower) = node.lower() {
        draw_node(lower, viewport);
    }
    if let Some(upper) = node.upper() {
        draw_node(upper, viewport);
    }
    draw_point(viewport, node.point(), 3.0, BLACK);
}

/// Returns the rectangle spanned by two opposite corners, in any order.
pub fn rect_from_corners(a: Point, b: Point) -> Rect {
    Rect::new(
        a.x().min(b.x()),
        a.y().min(b.y()),
        a.x().max(b.x()),
        a.y().max(b.y()),
    )
}

/// Range query rectangle selected by dragging with the left mouse button.
#[derive(Debug, Default)]
pub struct RangeSelection {
    anchor: Option<Point>,
    rect: Option<Rect>,
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new selection at `cursor`, discarding the previous one.
    pub fn begin(&mut self, cursor: Point) {
        self.anchor = Some(cursor);
        self.rect = Some(rect_from_corners(cursor, cursor));
    }

    /// Stretches the selection in progress to `cursor`.
    pub fn drag(&mut self, cursor: Point) {
        if let Some(anchor) = self.anchor {
            self.rect = Some(rect_from_corners(anchor, cursor));
        }
    }

    /// Finishes the selection in progress; the rectangle stays selected.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn clear(&mut self) {
        self.anchor = None;
        self.rect = None;
    }

    /// Returns the selected rectangle, if any.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Updates the selection from the mouse buttons.
    pub fn update(&mut self, cursor: Point) {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.begin(cursor);
        } else if is_mouse_button_down(MouseButton::Left) {
            self.drag(cursor);
        } else if is_mouse_button_released(MouseButton::Left) {
            self.end();
        }
        if is_mouse_button_pressed(MouseButton::Right) {
            self.clear();
        }
    }
}

/// Runs the interactive viewer until the window is closed.
///
/// The mouse position is the nearest-neighbor query, dragging selects a range
/// query rectangle and the keyboard walks the tree (see [`TreeNavigator`]).
pub async fn run(tree: KdTree, title: &str) {
    info!(
        "exploring {}: {} points, depth {}",
        title,
        tree.len(),
        tree.depth()
    );

    let mut navigator = TreeNavigator::new();
    let mut selection = RangeSelection::new();

    loop {
        let viewport = Viewport::fit(*tree.bounds(), screen_width(), screen_height(), MARGIN);
        let (mouse_x, mouse_y) = mouse_position();
        let cursor = viewport.to_domain(Point2::new(mouse_x, mouse_y));

        navigator.update(&tree);
        selection.update(cursor);

        clear_background(WHITE);
        draw_tree(&tree, &viewport);
        navigator.render(&tree, &viewport);

        let mut in_range = 0;
        if let Some(rect) = selection.rect() {
            draw_domain_rect(&viewport, &rect, 2.0, DARKGREEN);
            let mut highlight = kd_tree::FnVisitor::new(|point: Point| {
                in_range += 1;
                draw_point(&viewport, point, 5.0, GREEN);
            });
            tree.range_with(&rect, &mut highlight);
        }

        if let Some(nearest) = tree.nearest(cursor) {
            let from = viewport.to_screen(cursor);
            let to = viewport.to_screen(nearest);
            draw_line(from.x, from.y, to.x, to.y, 1.0, MAGENTA);
            draw_point(&viewport, nearest, 6.0, MAGENTA);
        }

        draw_text(
            &format!("{} - {} points, depth {}", title, tree.len(), tree.depth()),
            10.0,
            20.0,
            20.0,
            BLACK,
        );
        draw_text(
            &format!("Cursor {:.3}, {:.3} | in range: {}", cursor.x(), cursor.y(), in_range),
            10.0,
            40.0,
            16.0,
            DARKGRAY,
        );
        navigator.draw_ui(&tree, 60.0);
        draw_text(
            "Drag to select a range, right click to clear",
            10.0,
            screen_height() - 10.0,
            16.0,
            DARKGRAY,
        );

        next_frame().await
    }
}
