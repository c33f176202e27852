use std::mem::size_of;

use crate::cloud::PointCloud;
use crate::indices::Indices;
use crate::kdtree::bounds::Aabb;
use crate::r#type::IndexableFloat;

/// A node of the tree: an internal split plane or a bucket leaf.
///
/// Nodes live in the arena owned by the tree and reference each other by arena id, so dropping
/// the tree frees every node at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Node<N: IndexableFloat> {
    /// Divides the points of its subtree along `dim` at `value`. Points on the near (≤) side of
    /// the plane are reached through `left`, the rest through `right`.
    Split {
        dim: u8,
        value: N,
        left: u32,
        right: u32,
    },
    /// Owns the ranks `start..end` of the reordering permutation, plus the bounding box of the
    /// points behind them.
    Leaf { start: u32, end: u32, bounds: Aabb<N> },
}

/// An immutable kd-tree over an external 3D point cloud.
///
/// Usually this is created via [`KDTree::build`] or [`KDTree::build_with_bucket_size`]. The tree
/// holds a reference to the cloud and never copies coordinates; the cloud must stay frozen for as
/// long as the tree is queried. After construction every method takes `&self`, so a tree can be
/// shared across threads freely (it is `Send + Sync` whenever the cloud is).
///
/// Dropping the tree releases the node arena and the permutation; the cloud is untouched.
#[derive(Debug)]
pub struct KDTree<'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> {
    pub(crate) cloud: &'a P,
    pub(crate) nodes: Vec<Node<N>>,
    pub(crate) indices: Indices,
    pub(crate) root: u32,
    pub(crate) bucket_size: u16,
}

impl<'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> KDTree<'a, N, P> {
    /// The point cloud this tree was built over.
    pub fn cloud(&self) -> &'a P {
        self.cloud
    }

    /// The number of indexed points.
    pub fn num_points(&self) -> usize {
        self.indices.len()
    }

    /// The total number of nodes, splits and leaves together.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The maximum number of points per leaf this tree was built with.
    pub fn bucket_size(&self) -> u16 {
        self.bucket_size
    }

    /// The reordering permutation mapping leaf-local ranks to point offsets.
    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    /// An estimate of the resident memory of the tree, in bytes.
    ///
    /// Counts the node arena, the reordering permutation and the fixed bookkeeping of the tree
    /// value itself. This is a diagnostic figure, not an allocator measurement; it is
    /// non-decreasing in the point count for a fixed bucket size.
    pub fn used_memory(&self) -> usize {
        size_of::<Self>()
            + self.nodes.len() * size_of::<Node<N>>()
            + self.indices.len() * self.indices.bytes_per_element()
    }

    #[inline]
    pub(crate) fn node(&self, id: u32) -> &Node<N> {
        &self.nodes[id as usize]
    }
}
