//! 2-d tree node implementation.

use crate::{Axis, Point, Rect};

/// A node in the 2-d tree.
///
/// Each node stores one point and splits its region with a line through
/// that point, perpendicular to its split axis. Points ordered before the
/// node's point on that axis live in the `lower` subtree, points ordered
/// after it in the `upper` subtree.
///
/// # Region
///
/// The node's rectangle is the part of the domain its subtree is
/// authoritative for. It is fixed when the node is created: the root gets the
/// whole domain, and each child gets its parent's rectangle clipped at the
/// parent's splitting line.
#[derive(Debug, Clone)]
pub struct KdNode {
    /// The stored point.
    point: Point,

    /// Region of the plane covered by this subtree.
    rect: Rect,

    /// Axis of the splitting line through `point`.
    axis: Axis,

    /// Subtree of points ordered BEFORE `point` on `axis` (left/bottom).
    lower: Option<Box<KdNode>>,

    /// Subtree of points ordered AFTER `point` on `axis` (right/top).
    upper: Option<Box<KdNode>>,
}

impl KdNode {
    /// Creates a leaf node owning `point` and the region `rect`.
    pub(crate) fn new(point: Point, rect: Rect, axis: Axis) -> Self {
        Self {
            point,
            rect,
            axis,
            lower: None,
            upper: None,
        }
    }

    /// Returns the stored point.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Returns the region covered by this subtree.
    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Returns the split axis of this node.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns a reference to the lower (left/bottom) child subtree.
    #[inline]
    pub fn lower(&self) -> Option<&KdNode> {
        self.lower.as_deref()
    }

    /// Returns a reference to the upper (right/top) child subtree.
    #[inline]
    pub fn upper(&self) -> Option<&KdNode> {
        self.upper.as_deref()
    }

    /// Replaces the stored point with a coordinate-equal one.
    #[inline]
    pub(crate) fn replace_point(&mut self, point: Point) {
        debug_assert_eq!(point, self.point);
        self.point = point;
    }

    #[inline]
    pub(crate) fn lower_slot(&mut self) -> &mut Option<Box<KdNode>> {
        &mut self.lower
    }

    #[inline]
    pub(crate) fn upper_slot(&mut self) -> &mut Option<Box<KdNode>> {
        &mut self.upper
    }

    /// Region a new lower child would own.
    pub fn lower_region(&self) -> Rect {
        self.rect.clip_below(self.axis, self.point.coord(self.axis))
    }

    /// Region a new upper child would own.
    pub fn upper_region(&self) -> Rect {
        self.rect.clip_above(self.axis, self.point.coord(self.axis))
    }

    /// Returns the splitting line through the stored point, clipped to this
    /// node's region. The result is a degenerate (zero-width or zero-height)
    /// rectangle.
    pub fn split_segment(&self) -> Rect {
        self.rect.segment_at(self.axis, self.point.coord(self.axis))
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Returns the number of points in this subtree (including all descendants).
    pub fn len(&self) -> usize {
        let lower = self.lower.as_ref().map_or(0, |n| n.len());
        let upper = self.upper.as_ref().map_or(0, |n| n.len());
        1 + lower + upper
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let lower_depth = self.lower.as_ref().map_or(0, |n| n.depth());
        let upper_depth = self.upper.as_ref().map_or(0, |n| n.depth());
        1 + lower_depth.max(upper_depth)
    }
}
