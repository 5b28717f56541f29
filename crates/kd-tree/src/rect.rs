//! Axis-aligned rectangle representation for the 2-d tree.

use std::fmt;

use crate::{Axis, Point};

/// An axis-aligned rectangle `[xmin, xmax] × [ymin, ymax]`.
///
/// Boundaries are closed: points on an edge are contained and rectangles
/// that touch intersect. A malformed rectangle (`xmin > xmax` or
/// `ymin > ymax`) is accepted and simply contains no point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// Creates a new rectangle from its corner coordinates.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The unit square `(0, 0)-(1, 1)`, the default tree domain.
    pub fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Lower bound on the given axis.
    #[inline]
    pub fn min_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.xmin,
            Axis::Y => self.ymin,
        }
    }

    /// Upper bound on the given axis.
    #[inline]
    pub fn max_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.xmax,
            Axis::Y => self.ymax,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns `true` if the point lies inside or on the boundary.
    pub fn contains(&self, point: Point) -> bool {
        point.x() >= self.xmin
            && point.x() <= self.xmax
            && point.y() >= self.ymin
            && point.y() <= self.ymax
    }

    /// Returns `true` if the two rectangles share at least one point.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.xmax >= other.xmin
            && self.ymax >= other.ymin
            && other.xmax >= self.xmin
            && other.ymax >= self.ymin
    }

    /// Squared Euclidean distance from the point to the closest point of the
    /// rectangle; zero if the point is contained.
    pub fn distance_squared_to(&self, point: Point) -> f64 {
        let dx = gap(point.x(), self.xmin, self.xmax);
        let dy = gap(point.y(), self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Euclidean distance from the point to the rectangle.
    pub fn distance_to(&self, point: Point) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// The part of this rectangle at or below `at` on `axis`.
    pub fn clip_below(&self, axis: Axis, at: f64) -> Self {
        match axis {
            Axis::X => Self::new(self.xmin, self.ymin, at, self.ymax),
            Axis::Y => Self::new(self.xmin, self.ymin, self.xmax, at),
        }
    }

    /// The part of this rectangle at or above `at` on `axis`.
    pub fn clip_above(&self, axis: Axis, at: f64) -> Self {
        match axis {
            Axis::X => Self::new(at, self.ymin, self.xmax, self.ymax),
            Axis::Y => Self::new(self.xmin, at, self.xmax, self.ymax),
        }
    }

    /// The degenerate rectangle covering the line `axis = at` within this
    /// rectangle's extent on the other axis.
    pub fn segment_at(&self, axis: Axis, at: f64) -> Self {
        match axis {
            Axis::X => Self::new(at, self.ymin, at, self.ymax),
            Axis::Y => Self::new(self.xmin, at, self.xmax, at),
        }
    }
}

/// Distance from `value` to the interval `[min, max]` along one axis.
#[inline]
fn gap(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min - value
    } else if value > max {
        value - max
    } else {
        0.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}
