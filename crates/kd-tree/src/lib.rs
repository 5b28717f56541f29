//! 2-d tree (a kd-tree with k = 2) over planar points.
//!
//! Supports membership tests, closed axis-aligned rectangle range queries and
//! nearest-neighbor queries. See [`KdTree`] for the index itself and
//! [`PointSet`] for a linear-scan collection with the same query surface.

mod axis;
pub mod kd;
mod point;
mod point_set;
mod rect;

pub use axis::Axis;
pub use kd::{CollectingVisitor, FnVisitor, KdNode, KdTree, RangeVisitor};
pub use point::Point;
pub use point_set::PointSet;
pub use rect::Rect;
