//! Point clouds the index can be built over.

use crate::r#type::IndexableFloat;

/// A frozen collection of 3D points.
///
/// The index is built over a `PointCloud` and holds a reference to it; it never copies the
/// coordinates. Implementations must behave as a frozen snapshot: `num_points` and every
/// coordinate must not change between construction of an index and its last query. All
/// coordinates must be finite.
pub trait PointCloud<N: IndexableFloat> {
    /// The number of points in the cloud.
    fn num_points(&self) -> usize;

    /// The coordinate of the point at `offset` along dimension `dim` (0, 1 or 2).
    fn coord(&self, offset: usize, dim: usize) -> N;

    /// The position of the point at `offset`.
    ///
    /// Implementations over contiguous storage should override this to skip the per-dimension
    /// calls.
    #[inline]
    fn position(&self, offset: usize) -> [N; 3] {
        [
            self.coord(offset, 0),
            self.coord(offset, 1),
            self.coord(offset, 2),
        ]
    }
}

/// A 3D position paired with a caller-assigned identifier.
///
/// The identifier is opaque to the index: it is never stored or interpreted, only read back out
/// of the cloud when a query over `[Point<N>]` resolves (see
/// [`KDTree::nearest_id`][crate::kdtree::KDTree::nearest_id]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<N: IndexableFloat> {
    /// The position of the point.
    pub position: [N; 3],
    /// The caller-assigned identifier of the point.
    pub id: i32,
}

impl<N: IndexableFloat> Point<N> {
    /// Create a new point from a position and an identifier.
    pub fn new(position: [N; 3], id: i32) -> Self {
        Self { position, id }
    }
}

impl<N: IndexableFloat> PointCloud<N> for [[N; 3]] {
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, offset: usize, dim: usize) -> N {
        self[offset][dim]
    }

    #[inline]
    fn position(&self, offset: usize) -> [N; 3] {
        self[offset]
    }
}

impl<N: IndexableFloat> PointCloud<N> for Vec<[N; 3]> {
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, offset: usize, dim: usize) -> N {
        self[offset][dim]
    }

    #[inline]
    fn position(&self, offset: usize) -> [N; 3] {
        self[offset]
    }
}

impl<N: IndexableFloat> PointCloud<N> for [Point<N>] {
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, offset: usize, dim: usize) -> N {
        self[offset].position[dim]
    }

    #[inline]
    fn position(&self, offset: usize) -> [N; 3] {
        self[offset].position
    }
}

impl<N: IndexableFloat> PointCloud<N> for Vec<Point<N>> {
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coord(&self, offset: usize, dim: usize) -> N {
        self[offset].position[dim]
    }

    #[inline]
    fn position(&self, offset: usize) -> [N; 3] {
        self[offset].position
    }
}
