//! Axis-aligned bounding boxes over 3D points.

use crate::r#type::IndexableFloat;

/// An axis-aligned bounding box around a set of 3D points.
///
/// Every leaf of a [`KDTree`][crate::kdtree::KDTree] stores the box around its points; the
/// searcher uses the squared distance to the box to skip leaves that cannot improve on the
/// current best match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<N: IndexableFloat> {
    /// The minimum corner of the box.
    pub min: [N; 3],
    /// The maximum corner of the box.
    pub max: [N; 3],
}

impl<N: IndexableFloat> Aabb<N> {
    /// A box containing nothing; extending it with any position yields that position.
    pub(crate) fn empty() -> Self {
        Self {
            min: [N::infinity(); 3],
            max: [N::neg_infinity(); 3],
        }
    }

    /// Grow the box to contain `position`.
    #[inline]
    pub(crate) fn extend(&mut self, position: [N; 3]) {
        for dim in 0..3 {
            if position[dim] < self.min[dim] {
                self.min[dim] = position[dim];
            }
            if position[dim] > self.max[dim] {
                self.max[dim] = position[dim];
            }
        }
    }

    /// The extent (max − min) of the box along `dim`.
    #[inline]
    pub fn extent(&self, dim: usize) -> N {
        self.max[dim] - self.min[dim]
    }

    /// The axis with the largest extent; ties resolve to the lowest dimension index.
    pub(crate) fn widest_axis(&self) -> usize {
        let mut axis = 0;
        let mut widest = self.extent(0);
        for dim in 1..3 {
            let extent = self.extent(dim);
            if extent > widest {
                axis = dim;
                widest = extent;
            }
        }
        axis
    }

    /// The squared Euclidean distance from `position` to the box, zero if inside.
    #[inline]
    pub fn sq_dist(&self, position: [N; 3]) -> N {
        let mut acc = N::zero();
        for dim in 0..3 {
            let d = axis_dist(position[dim], self.min[dim], self.max[dim]);
            acc = acc + d * d;
        }
        acc
    }

    /// Whether `position` lies inside or on the boundary of the box.
    pub fn contains(&self, position: [N; 3]) -> bool {
        (0..3).all(|dim| position[dim] >= self.min[dim] && position[dim] <= self.max[dim])
    }
}

/// 1D distance from a value `k` to a range `min..max`.
#[inline]
fn axis_dist<N: IndexableFloat>(k: N, min: N, max: N) -> N {
    if k < min {
        min - k
    } else if k <= max {
        N::zero()
    } else {
        k - max
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_box() -> Aabb<f64> {
        let mut bounds = Aabb::empty();
        bounds.extend([0.0, 0.0, 0.0]);
        bounds.extend([1.0, 2.0, 3.0]);
        bounds
    }

    #[test]
    fn extend_tracks_corners() {
        let bounds = unit_box();
        assert_eq!(bounds.min, [0.0, 0.0, 0.0]);
        assert_eq!(bounds.max, [1.0, 2.0, 3.0]);
        assert_eq!(bounds.extent(0), 1.0);
        assert_eq!(bounds.extent(2), 3.0);
    }

    #[test]
    fn widest_axis_breaks_ties_low() {
        let bounds = unit_box();
        assert_eq!(bounds.widest_axis(), 2);

        let mut flat = Aabb::empty();
        flat.extend([0.0, 0.0, 0.0]);
        flat.extend([5.0, 5.0, 1.0]);
        assert_eq!(flat.widest_axis(), 0);
    }

    #[test]
    fn sq_dist_is_zero_inside() {
        let bounds = unit_box();
        assert_eq!(bounds.sq_dist([0.5, 1.0, 2.9]), 0.0);
        assert!(bounds.contains([1.0, 2.0, 3.0]));
    }

    #[test]
    fn sq_dist_outside_faces_and_corners() {
        let bounds = unit_box();
        // off one face
        assert_eq!(bounds.sq_dist([3.0, 1.0, 1.0]), 4.0);
        // off a corner
        assert_eq!(bounds.sq_dist([2.0, 3.0, 4.0]), 3.0);
        assert!(!bounds.contains([2.0, 3.0, 4.0]));
    }
}
