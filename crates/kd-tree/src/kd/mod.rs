//! 2-d tree for planar point queries.
//!
//! The tree recursively partitions a rectangular domain (the unit square by
//! default) with splitting lines through the stored points, alternating
//! between vertical and horizontal lines at each depth. It supports:
//!
//! - Membership tests
//! - Closed rectangle range queries, pruned by each node's bounding rectangle
//! - Nearest-neighbor queries, pruned by the distance to splitting segments
//!
//! # Example
//!
//! ```
//! use kd_tree::{KdTree, Point, Rect};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.5, 0.5));
//! tree.insert(Point::new(0.25, 0.75));
//! tree.insert(Point::new(0.75, 0.25));
//!
//! assert!(tree.contains(Point::new(0.25, 0.75)));
//! assert_eq!(tree.range(&Rect::new(0.0, 0.0, 0.6, 0.6)), vec![Point::new(0.5, 0.5)]);
//! assert_eq!(tree.nearest(Point::new(0.4, 0.4)), Some(Point::new(0.5, 0.5)));
//! ```
//!
//! # Architecture
//!
//! - [`KdTree`]: The container holding the root node and the point count
//! - [`KdNode`]: A stored point with its region and split axis
//! - [`RangeVisitor`]: Visitor trait receiving range query results

mod node;
mod tree;
mod visitor;

pub use node::KdNode;
pub use tree::KdTree;
pub use visitor::{CollectingVisitor, FnVisitor, RangeVisitor};
