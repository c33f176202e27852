use num_traits::clamp;

use crate::cloud::PointCloud;
use crate::error::{PointIndexError, Result};
use crate::indices::Indices;
use crate::kdtree::bounds::Aabb;
use crate::kdtree::index::{KDTree, Node};
use crate::r#type::IndexableFloat;

/// The maximum number of points per leaf used by [`KDTree::build`].
pub const DEFAULT_BUCKET_SIZE: u16 = 100;

impl<'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> KDTree<'a, N, P> {
    /// Build a tree over `cloud` with [`DEFAULT_BUCKET_SIZE`] points per leaf.
    ///
    /// Fails with [`PointIndexError::EmptyInput`] when the cloud has no points.
    ///
    /// ```
    /// use point_index::kdtree::KDTree;
    ///
    /// let positions = vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]];
    /// let tree = KDTree::build(positions.as_slice()).unwrap();
    /// assert_eq!(tree.nearest(1.0, 1.0, 1.0), 0);
    /// ```
    pub fn build(cloud: &'a P) -> Result<Self> {
        Self::build_with_bucket_size(cloud, DEFAULT_BUCKET_SIZE)
    }

    /// Build a tree over `cloud` grouping at most `bucket_size` points per leaf.
    ///
    /// Small buckets answer queries with fewer distance computations at the cost of a deeper
    /// tree and more node memory; large buckets do the opposite. Fails with
    /// [`PointIndexError::EmptyInput`] when the cloud has no points. Panics if `bucket_size` is
    /// zero or the cloud holds more than `u32::MAX` points.
    pub fn build_with_bucket_size(cloud: &'a P, bucket_size: u16) -> Result<Self> {
        assert!(bucket_size >= 1, "Bucket size must be at least 1.");

        let num_points = cloud.num_points();
        if num_points == 0 {
            return Err(PointIndexError::EmptyInput);
        }
        assert!(
            num_points <= u32::MAX as usize,
            "Point offsets are stored as u32."
        );

        let mut builder = TreeBuilder {
            cloud,
            nodes: Vec::new(),
            indices: Indices::identity(num_points),
            bucket_size: bucket_size as usize,
        };
        let root = builder.subdivide(0, num_points);

        Ok(Self {
            cloud,
            nodes: builder.nodes,
            indices: builder.indices,
            root,
            bucket_size,
        })
    }
}

/// Construction state: the growing node arena and the permutation being reordered in place.
struct TreeBuilder<'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> {
    cloud: &'a P,
    nodes: Vec<Node<N>>,
    indices: Indices,
    bucket_size: usize,
}

impl<'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> TreeBuilder<'a, N, P> {
    /// Recursively partition the ranks `start..end`, returning the arena id of the subtree root.
    fn subdivide(&mut self, start: usize, end: usize) -> u32 {
        let bounds = self.bounds_of(start, end);
        if end - start <= self.bucket_size {
            return self.push(Node::Leaf {
                start: start as u32,
                end: end as u32,
                bounds,
            });
        }

        let dim = bounds.widest_axis();
        // midpoint of the widest extent; the clamp guards float overflow of the sum
        let two = N::one() + N::one();
        let value = clamp(
            (bounds.min[dim] + bounds.max[dim]) / two,
            bounds.min[dim],
            bounds.max[dim],
        );

        let mid = self.plane_split(start, end, dim, value);
        let left = self.subdivide(start, mid);
        let right = self.subdivide(mid, end);
        self.push(Node::Split {
            dim: dim as u8,
            value,
            left,
            right,
        })
    }

    fn push(&mut self, node: Node<N>) -> u32 {
        self.nodes.push(node);
        (self.nodes.len() - 1) as u32
    }

    /// The bounding box of the points behind ranks `start..end`.
    fn bounds_of(&self, start: usize, end: usize) -> Aabb<N> {
        let mut bounds = Aabb::empty();
        for rank in start..end {
            bounds.extend(self.cloud.position(self.indices.get(rank)));
        }
        bounds
    }

    #[inline]
    fn coord(&self, rank: usize, dim: usize) -> N {
        self.cloud.coord(self.indices.get(rank), dim)
    }

    /// Reorder the ranks `start..end` around the plane `dim = value` and return the division
    /// index: points strictly below the plane in front, the on-plane run in the middle, points
    /// above at the back. The division prefers the middle of the range and falls back to the
    /// nearest end of the on-plane run, so both sides are non-empty for every splittable range
    /// and ranges of identical points divide evenly.
    fn plane_split(&mut self, start: usize, end: usize, dim: usize, value: N) -> usize {
        // first pass moves everything strictly below the plane to the front
        let mut cursor = start;
        for rank in start..end {
            if self.coord(rank, dim) < value {
                self.indices.swap(cursor, rank);
                cursor += 1;
            }
        }
        let below = cursor;

        // second pass moves the on-plane points in behind them
        for rank in cursor..end {
            if self.coord(rank, dim) <= value {
                self.indices.swap(cursor, rank);
                cursor += 1;
            }
        }
        let on_plane = cursor;

        let half = start + (end - start) / 2;
        let mid = if below > half {
            below
        } else if on_plane < half {
            on_plane
        } else {
            half
        };
        debug_assert!(start < mid && mid < end);
        mid
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_builder(positions: &[[f64; 3]]) -> TreeBuilder<'_, f64, [[f64; 3]]> {
        TreeBuilder {
            cloud: positions,
            nodes: Vec::new(),
            indices: Indices::identity(positions.len()),
            bucket_size: 1,
        }
    }

    #[test]
    fn plane_split_orders_around_plane() {
        let positions: Vec<[f64; 3]> = [5.0, 1.0, 3.0, 3.0, 9.0, 3.0, 0.0, 7.0]
            .iter()
            .map(|&x| [x, 0.0, 0.0])
            .collect();
        let mut builder = make_builder(&positions);
        let mid = builder.plane_split(0, positions.len(), 0, 3.0);

        assert!(mid > 0 && mid < positions.len());
        for rank in 0..mid {
            assert!(builder.coord(rank, 0) <= 3.0);
        }
        for rank in mid..positions.len() {
            assert!(builder.coord(rank, 0) >= 3.0);
        }
    }

    #[test]
    fn plane_split_balances_identical_points() {
        let positions = vec![[2.0, 2.0, 2.0]; 64];
        let mut builder = make_builder(&positions);
        let mid = builder.plane_split(0, 64, 0, 2.0);
        assert_eq!(mid, 32);
    }

    #[test]
    fn plane_split_forces_nonempty_sides() {
        // every point below the plane except the one at the maximum
        let positions: Vec<[f64; 3]> = (0..10)
            .map(|i| [if i == 9 { 100.0 } else { 0.0 }, 0.0, 0.0])
            .collect();
        let mut builder = make_builder(&positions);
        let mid = builder.plane_split(0, 10, 0, 50.0);
        assert_eq!(mid, 9);
    }

    #[test]
    fn builds_balanced_over_identical_points() {
        let positions = vec![[1.0, 1.0, 1.0]; 100];
        let tree = KDTree::build_with_bucket_size(positions.as_slice(), 4).unwrap();
        assert_eq!(tree.num_points(), 100);
        // an even division into buckets of ≤ 4 needs at least 25 leaves
        assert!(tree.num_nodes() >= 49);
    }
}
