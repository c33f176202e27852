use geo_traits::CoordTrait;

use crate::cloud::{Point, PointCloud};
use crate::kdtree::index::{KDTree, Node};
use crate::r#type::IndexableFloat;

/// The running best match of a nearest-neighbor descent.
struct Candidate<N> {
    offset: u32,
    dist_sq: N,
}

impl<'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> KDTree<'a, N, P> {
    /// The offset of the indexed point nearest to `(x, y, z)` under squared Euclidean distance.
    ///
    /// The query may lie anywhere in space, including far outside the cloud and exactly on a
    /// split plane; its coordinates must be finite. When several points are equally near, the
    /// first one encountered in traversal order wins, which is deterministic for a given tree —
    /// and construction is deterministic, so rebuilding the same cloud cannot change answers.
    pub fn nearest(&self, x: N, y: N, z: N) -> u32 {
        let query = [x, y, z];
        let mut best = Candidate {
            offset: 0,
            dist_sq: N::infinity(),
        };
        self.nearest_recursive(self.root, &query, &mut best);
        best.offset
    }

    /// Like [`nearest`][KDTree::nearest], for any 3D geo-traits coordinate.
    ///
    /// Panics if `coord` has no third dimension.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> u32 {
        self.nearest(coord.x(), coord.y(), coord.nth_or_panic(2))
    }

    fn nearest_recursive(&self, node: u32, query: &[N; 3], best: &mut Candidate<N>) {
        match self.node(node) {
            Node::Leaf { start, end, bounds } => {
                // the leaf cannot improve the best match if its box is at least as far away
                if bounds.sq_dist(*query) >= best.dist_sq {
                    return;
                }
                for rank in *start as usize..*end as usize {
                    let offset = self.indices.get(rank);
                    let dist_sq = sq_dist(self.cloud.position(offset), *query);
                    if dist_sq < best.dist_sq {
                        *best = Candidate {
                            offset: offset as u32,
                            dist_sq,
                        };
                    }
                }
            }
            Node::Split {
                dim,
                value,
                left,
                right,
            } => {
                let delta = query[*dim as usize] - *value;
                let (near, far) = if delta <= N::zero() {
                    (*left, *right)
                } else {
                    (*right, *left)
                };
                self.nearest_recursive(near, query, best);
                // every far-side point is at least the plane distance away
                if delta * delta < best.dist_sq {
                    self.nearest_recursive(far, query, best);
                }
            }
        }
    }
}

impl<'a, N: IndexableFloat> KDTree<'a, N, [Point<N>]> {
    /// The identifier of the point nearest to `(x, y, z)`.
    ///
    /// ```
    /// use point_index::kdtree::KDTree;
    /// use point_index::Point;
    ///
    /// let points = vec![
    ///     Point::new([0.0, 0.0, 0.0], 1),
    ///     Point::new([10.0, 0.0, 0.0], 2),
    ///     Point::new([0.0, 10.0, 0.0], 3),
    /// ];
    /// let tree = KDTree::build(points.as_slice()).unwrap();
    /// assert_eq!(tree.nearest_id(1.0, 1.0, 1.0), 1);
    /// ```
    pub fn nearest_id(&self, x: N, y: N, z: N) -> i32 {
        self.cloud[self.nearest(x, y, z) as usize].id
    }
}

/// Squared Euclidean distance between two positions.
#[inline]
pub(crate) fn sq_dist<N: IndexableFloat>(a: [N; 3], b: [N; 3]) -> N {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}
