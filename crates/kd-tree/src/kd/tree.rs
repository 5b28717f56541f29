//! 2-d tree container and queries.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::{Axis, Point, Rect};

use super::node::KdNode;
use super::visitor::{CollectingVisitor, RangeVisitor};

/// A 2-d tree over planar points.
///
/// Points are inserted one at a time; each new point becomes a leaf whose
/// region is its parent's region clipped at the parent's splitting line.
/// The tree is never rebalanced, so its shape depends on insertion order.
///
/// # Domain
///
/// The root region is the unit square unless the tree is created with
/// [`KdTree::with_bounds`]. While every stored point lies inside the root
/// region, queries prune with node regions and region-clipped split
/// segments. Once a point outside it is inserted, node regions no longer
/// bound their subtrees, and queries fall back to pruning with the
/// unclipped splitting lines, which only depend on the point order.
///
/// # Duplicates
///
/// Inserting a point equal to a stored one overwrites it in place and does
/// not change [`KdTree::len`].
///
/// # Absent points
///
/// A point with a NaN coordinate ([`Point::absent`]) is ignored by
/// [`KdTree::insert`] and yields `false` / `None` from the queries.
#[derive(Debug, Clone)]
pub struct KdTree {
    root: Option<Box<KdNode>>,
    len: usize,
    bounds: Rect,
    pruning: Pruning,
}

/// Geometry used to skip subtrees during range and nearest queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pruning {
    /// Every point lies in its node's region.
    Region,
    /// Some point lies outside the root region.
    SplitLine,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl KdTree {
    /// Creates an empty tree over the unit square.
    pub fn new() -> Self {
        Self::with_bounds(Rect::unit())
    }

    /// Creates an empty tree whose root region is `bounds`.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            root: None,
            len: 0,
            bounds,
            pruning: Pruning::Region,
        }
    }

    /// Returns `true` if the tree contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct points in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the root region.
    #[inline]
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&KdNode> {
        self.root.as_deref()
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Adds a point to the tree.
    ///
    /// If a coordinate-equal point is already stored it is overwritten and
    /// the size is unchanged. Absent points are ignored.
    pub fn insert(&mut self, point: Point) {
        if point.is_absent() {
            debug!("ignoring insert of absent point");
            return;
        }
        if self.pruning == Pruning::Region && !self.bounds.contains(point) {
            debug!("{} lies outside {}, pruning by splitting lines", point, self.bounds);
            self.pruning = Pruning::SplitLine;
        }

        let mut slot = &mut self.root;
        let mut region = self.bounds;
        let mut axis = Axis::X;

        while let Some(node) = slot {
            match point.cmp_on(&node.point(), node.axis()) {
                Ordering::Equal => {
                    trace!("overwriting stored point {}", point);
                    node.replace_point(point);
                    return;
                }
                Ordering::Less => {
                    region = node.lower_region();
                    axis = node.axis().next();
                    slot = node.lower_slot();
                }
                Ordering::Greater => {
                    region = node.upper_region();
                    axis = node.axis().next();
                    slot = node.upper_slot();
                }
            }
        }

        *slot = Some(Box::new(KdNode::new(point, region, axis)));
        self.len += 1;
    }

    /// Returns `true` if a coordinate-equal point is stored.
    pub fn contains(&self, point: Point) -> bool {
        if point.is_absent() {
            return false;
        }

        let mut current = self.root();
        while let Some(node) = current {
            current = match point.cmp_on(&node.point(), node.axis()) {
                Ordering::Equal => return true,
                Ordering::Less => node.lower(),
                Ordering::Greater => node.upper(),
            };
        }
        false
    }

    /// Returns every stored point inside the closed rectangle.
    ///
    /// The order of points is not guaranteed.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut visitor = CollectingVisitor::new();
        self.range_with(rect, &mut visitor);
        visitor.into_points()
    }

    /// Reports every stored point inside the closed rectangle to `visitor`.
    ///
    /// Subtrees whose region does not intersect `rect` are skipped.
    pub fn range_with<V: RangeVisitor>(&self, rect: &Rect, visitor: &mut V) {
        if let Some(root) = self.root() {
            range_node(root, rect, self.pruning, visitor);
        }
    }

    /// Returns a stored point closest to `query`, or `None` if the tree is
    /// empty or the query is absent.
    ///
    /// Among equally distant points the first one found wins.
    pub fn nearest(&self, query: Point) -> Option<Point> {
        self.nearest_with_distance(query).map(|(point, _)| point)
    }

    /// Like [`KdTree::nearest`], also returning the Euclidean distance.
    pub fn nearest_with_distance(&self, query: Point) -> Option<(Point, f64)> {
        if query.is_absent() {
            return None;
        }
        let root = self.root()?;

        let mut search = NearestSearch::new(query, self.pruning);
        nearest_node(root, &mut search);
        trace!(
            "nearest {}: visited {} nodes, pruned {} subtrees",
            query,
            search.visited,
            search.pruned
        );

        search
            .best
            .map(|point| (point, search.best_distance_squared.sqrt()))
    }

    /// Collects all points in the tree into a vector, in preorder.
    pub fn points(&self) -> Vec<Point> {
        let mut result = Vec::with_capacity(self.len);
        collect_points_recursive(self.root(), &mut result);
        result
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        for point in points {
            self.insert(point);
        }
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut tree = Self::new();
        tree.extend(points);
        tree
    }
}

/// Recursively reports the points of a node subtree inside `rect`.
fn range_node<V: RangeVisitor>(node: &KdNode, rect: &Rect, pruning: Pruning, visitor: &mut V) {
    // The node's region bounds its whole subtree.
    if pruning == Pruning::Region && !node.rect().intersects(rect) {
        return;
    }

    if rect.contains(node.point()) {
        visitor.visit(node.point());
    }

    // Lower points never exceed the split coordinate, upper points never
    // fall below it.
    let axis = node.axis();
    let split = node.point().coord(axis);
    if let Some(lower) = node.lower() {
        if pruning == Pruning::Region || rect.min_on(axis) <= split {
            range_node(lower, rect, pruning, visitor);
        }
    }
    if let Some(upper) = node.upper() {
        if pruning == Pruning::Region || rect.max_on(axis) >= split {
            range_node(upper, rect, pruning, visitor);
        }
    }
}

/// Running state of a nearest-neighbor walk.
struct NearestSearch {
    query: Point,
    pruning: Pruning,
    best: Option<Point>,
    best_distance_squared: f64,
    visited: usize,
    pruned: usize,
}

impl NearestSearch {
    fn new(query: Point, pruning: Pruning) -> Self {
        Self {
            query,
            pruning,
            best: None,
            best_distance_squared: f64::INFINITY,
            visited: 0,
            pruned: 0,
        }
    }

    fn offer(&mut self, point: Point) {
        let distance = point.distance_squared_to(&self.query);
        // Overflowed distances are still better than no answer.
        if self.best.is_none() || distance < self.best_distance_squared {
            self.best = Some(point);
            self.best_distance_squared = distance;
        }
    }

    /// Lower bound on the squared distance from the query to any point on
    /// the far side of `node`'s splitting line.
    fn split_distance(&self, node: &KdNode) -> f64 {
        match self.pruning {
            Pruning::Region => node.split_segment().distance_squared_to(self.query),
            Pruning::SplitLine => {
                let gap = self.query.coord(node.axis()) - node.point().coord(node.axis());
                gap * gap
            }
        }
    }
}

/// Recursively searches a node subtree for a point closer than the current
/// best.
fn nearest_node(node: &KdNode, search: &mut NearestSearch) {
    search.visited += 1;
    search.offer(node.point());

    let (near, far) = match search.query.cmp_on(&node.point(), node.axis()) {
        // The query is the stored point: distance zero.
        Ordering::Equal => return,
        Ordering::Less => (node.lower(), node.upper()),
        Ordering::Greater => (node.upper(), node.lower()),
    };

    if let Some(near) = near {
        nearest_node(near, search);
    }

    if let Some(far) = far {
        let split_distance = search.split_distance(node);
        if split_distance < search.best_distance_squared {
            nearest_node(far, search);
        } else {
            search.pruned += 1;
        }
    }
}

/// Recursively collects all points from a node subtree.
fn collect_points_recursive(node: Option<&KdNode>, result: &mut Vec<Point>) {
    if let Some(n) = node {
        result.push(n.point());
        collect_points_recursive(n.lower(), result);
        collect_points_recursive(n.upper(), result);
    }
}
