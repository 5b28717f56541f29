//! Sinks for range query results.

use crate::Point;

/// Receives the points a range query finds, in tree walk order.
///
/// [`KdTree::range_with`](crate::KdTree::range_with) calls [`visit`] once per
/// stored point inside the query rectangle, so results can be consumed
/// without an intermediate vector.
///
/// [`visit`]: RangeVisitor::visit
pub trait RangeVisitor {
    fn visit(&mut self, point: Point);
}

impl RangeVisitor for Vec<Point> {
    fn visit(&mut self, point: Point) {
        self.push(point);
    }
}

/// Gathers matches into a vector; backs [`KdTree::range`](crate::KdTree::range).
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    found: Vec<Point>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the visitor, yielding the matches in visit order.
    pub fn into_points(self) -> Vec<Point> {
        self.found
    }
}

impl RangeVisitor for CollectingVisitor {
    fn visit(&mut self, point: Point) {
        self.found.visit(point);
    }
}

/// Adapts a closure, e.g. to draw or count matches in place.
pub struct FnVisitor<F: FnMut(Point)>(F);

impl<F: FnMut(Point)> FnVisitor<F> {
    pub fn new(func: F) -> Self {
        Self(func)
    }
}

impl<F: FnMut(Point)> RangeVisitor for FnVisitor<F> {
    fn visit(&mut self, point: Point) {
        (self.0)(point);
    }
}
