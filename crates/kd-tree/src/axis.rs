//! Split axes of the 2-d tree.

/// The coordinate a tree node partitions on.
///
/// Nodes alternate between the two axes with depth, starting with [`Axis::X`]
/// at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Vertical splitting line; points are ordered by x, then y.
    #[default]
    X,
    /// Horizontal splitting line; points are ordered by y, then x.
    Y,
}

impl Axis {
    /// Returns the axis used one level deeper in the tree.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Returns the numeric dimension index: 0 for x, 1 for y.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}
