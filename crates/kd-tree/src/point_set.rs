//! Linear-scan point collection with the same query surface as [`KdTree`].
//!
//! [`KdTree`]: crate::KdTree

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::{Axis, Point, Rect};

/// Ordering key for the set: y first, then x.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ByY(Point);

impl Eq for ByY {}

impl PartialOrd for ByY {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByY {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_on(&other.0, Axis::Y)
    }
}

/// An ordered set of points answering every query by a full scan.
///
/// Useful as a reference for [`KdTree`](crate::KdTree) results. Absent points
/// are handled the same way: ignored on insert, neutral on query.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: BTreeSet<ByY>,
}

impl PointSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Adds a point, replacing a coordinate-equal one.
    pub fn insert(&mut self, point: Point) {
        if point.is_absent() {
            return;
        }
        self.points.replace(ByY(point));
    }

    pub fn contains(&self, point: Point) -> bool {
        !point.is_absent() && self.points.contains(&ByY(point))
    }

    /// Returns every point inside the closed rectangle, ordered by y then x.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        self.points
            .iter()
            .map(|key| key.0)
            .filter(|point| rect.contains(*point))
            .collect()
    }

    /// Returns the first point (in y-then-x order) at minimum distance.
    pub fn nearest(&self, query: Point) -> Option<Point> {
        if query.is_absent() {
            return None;
        }

        let mut best: Option<(Point, f64)> = None;
        for ByY(point) in &self.points {
            let distance = point.distance_squared_to(&query);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((*point, distance)),
            }
        }
        best.map(|(point, _)| point)
    }

    /// Returns all points, ordered by y then x.
    pub fn points(&self) -> Vec<Point> {
        self.points.iter().map(|key| key.0).collect()
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        for point in points {
            self.insert(point);
        }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut set = Self::new();
        set.extend(points);
        set
    }
}
