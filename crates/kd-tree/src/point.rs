//! Point representation for the 2-d tree.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Point2;

use crate::Axis;

/// An immutable point in the plane.
///
/// The conventional domain is the unit square, but any finite coordinates
/// are accepted. A point with a NaN coordinate is treated as *absent*: the
/// tree ignores it on insert and answers queries for it with a neutral
/// result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: Point2<f64>,
}

impl Point {
    /// Creates a new point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Point2::new(x, y),
        }
    }

    /// Returns the absent point, which every tree operation ignores.
    pub fn absent() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// Returns `true` if either coordinate is NaN.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.coords.x.is_nan() || self.coords.y.is_nan()
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Returns the coordinate on the given axis.
    #[inline]
    pub fn coord(&self, axis: Axis) -> f64 {
        self.coords[axis.index()]
    }

    /// Returns the underlying nalgebra point.
    #[inline]
    pub fn as_point2(&self) -> Point2<f64> {
        self.coords
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        nalgebra::distance_squared(&self.coords, &other.coords)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.coords, &other.coords)
    }

    /// Compares two points in the order used by a node splitting on `axis`.
    ///
    /// The axis coordinate is compared first and the other coordinate breaks
    /// ties, so only coordinate-equal points compare as [`Ordering::Equal`].
    pub fn cmp_on(&self, other: &Point, axis: Axis) -> Ordering {
        let other_axis = axis.next();
        compare_coord(self.coord(axis), other.coord(axis))
            .then_with(|| compare_coord(self.coord(other_axis), other.coord(other_axis)))
    }
}

/// Orders two coordinates, treating incomparable values as equal.
#[inline]
fn compare_coord(a: f64, b: f64) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl From<Point2<f64>> for Point {
    fn from(coords: Point2<f64>) -> Self {
        Self { coords }
    }
}

impl From<Point> for Point2<f64> {
    fn from(point: Point) -> Self {
        point.coords
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.3, 0.4);

        assert!((a.distance_squared_to(&b) - 0.25).abs() < 1e-12);
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
        assert_eq!(b.distance_squared_to(&b), 0.0);
    }

    #[test]
    fn coord_by_axis() {
        let p = Point::new(0.25, 0.75);
        assert_eq!(p.coord(Axis::X), 0.25);
        assert_eq!(p.coord(Axis::Y), 0.75);
    }

    #[test]
    fn cmp_on_x_breaks_ties_with_y() {
        let a = Point::new(0.5, 0.2);
        let b = Point::new(0.5, 0.8);
        let c = Point::new(0.6, 0.0);

        assert_eq!(a.cmp_on(&b, Axis::X), Ordering::Less);
        assert_eq!(b.cmp_on(&a, Axis::X), Ordering::Greater);
        assert_eq!(b.cmp_on(&c, Axis::X), Ordering::Less);
        assert_eq!(a.cmp_on(&a, Axis::X), Ordering::Equal);
    }

    #[test]
    fn cmp_on_y_breaks_ties_with_x() {
        let a = Point::new(0.2, 0.5);
        let b = Point::new(0.8, 0.5);
        let c = Point::new(0.0, 0.6);

        assert_eq!(a.cmp_on(&b, Axis::Y), Ordering::Less);
        assert_eq!(b.cmp_on(&c, Axis::Y), Ordering::Less);
        assert_eq!(c.cmp_on(&a, Axis::Y), Ordering::Greater);
    }

    #[test]
    fn equal_coordinates_compare_equal_on_both_axes() {
        let a = Point::new(0.1, 0.9);
        let b = Point::from((0.1, 0.9));

        assert_eq!(a, b);
        assert_eq!(a.cmp_on(&b, Axis::X), Ordering::Equal);
        assert_eq!(a.cmp_on(&b, Axis::Y), Ordering::Equal);
    }

    #[test]
    fn absent_point() {
        assert!(Point::absent().is_absent());
        assert!(Point::new(f64::NAN, 0.5).is_absent());
        assert!(!Point::new(0.5, 0.5).is_absent());
        assert!(!Point::new(-3.0, 12.0).is_absent());
    }

    #[test]
    fn nalgebra_conversions() {
        let p: Point = Point2::new(0.1, 0.2).into();
        let back: Point2<f64> = p.into();

        assert_eq!(back, Point2::new(0.1, 0.2));
        assert_eq!(p.as_point2(), back);
        assert_eq!(p.to_string(), "(0.1, 0.2)");
    }
}
