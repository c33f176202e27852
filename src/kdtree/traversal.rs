//! Utilities to traverse the tree structure.

use std::ops::Range;

use tinyvec::TinyVec;

use crate::cloud::PointCloud;
use crate::kdtree::bounds::Aabb;
use crate::kdtree::index::{KDTree, Node};
use crate::r#type::IndexableFloat;

impl<'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> KDTree<'a, N, P> {
    /// A view of the root node, for manual traversal.
    pub fn root(&self) -> NodeRef<'_, 'a, N, P> {
        NodeRef {
            tree: self,
            id: self.root,
        }
    }

    /// Iterate over the leaf nodes from left to right, in ascending rank order.
    pub fn leaves(&self) -> Leaves<'_, 'a, N, P> {
        // TinyVec keeps shallow traversals off the heap
        let mut stack: TinyVec<[u32; 32]> = TinyVec::new();
        stack.push(self.root);
        Leaves { tree: self, stack }
    }
}

/// A borrowed view of a single node in a [`KDTree`].
#[derive(Debug)]
pub struct NodeRef<'t, 'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> {
    tree: &'t KDTree<'a, N, P>,
    id: u32,
}

impl<'t, 'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> NodeRef<'t, 'a, N, P> {
    #[inline]
    fn node(&self) -> &'t Node<N> {
        self.tree.node(self.id)
    }

    /// Returns `true` if this is a bucket leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.node(), Node::Leaf { .. })
    }

    /// Returns `true` if this is an internal split node.
    #[inline]
    pub fn is_split(&self) -> bool {
        !self.is_leaf()
    }

    /// The dimension (0, 1 or 2) a split node divides along. Panics on a leaf.
    pub fn split_dim(&self) -> usize {
        match self.node() {
            Node::Split { dim, .. } => *dim as usize,
            Node::Leaf { .. } => panic!("split_dim called on a leaf node"),
        }
    }

    /// The plane coordinate a split node divides at. Panics on a leaf.
    pub fn split_value(&self) -> N {
        match self.node() {
            Node::Split { value, .. } => *value,
            Node::Leaf { .. } => panic!("split_value called on a leaf node"),
        }
    }

    /// The children of a split node, near (≤) side first. Panics on a leaf.
    pub fn children(&self) -> (Self, Self) {
        match self.node() {
            Node::Split { left, right, .. } => (
                NodeRef {
                    tree: self.tree,
                    id: *left,
                },
                NodeRef {
                    tree: self.tree,
                    id: *right,
                },
            ),
            Node::Leaf { .. } => panic!("children called on a leaf node"),
        }
    }

    /// The permutation ranks owned by a leaf. Panics on a split node.
    pub fn range(&self) -> Range<usize> {
        match self.node() {
            Node::Leaf { start, end, .. } => *start as usize..*end as usize,
            Node::Split { .. } => panic!("range called on a split node"),
        }
    }

    /// The bounding box of the points in a leaf. Panics on a split node.
    pub fn bounds(&self) -> Aabb<N> {
        match self.node() {
            Node::Leaf { bounds, .. } => *bounds,
            Node::Split { .. } => panic!("bounds called on a split node"),
        }
    }

    /// The cloud offsets of the points in a leaf. Panics on a split node.
    pub fn point_offsets(&self) -> impl Iterator<Item = usize> + 't {
        let tree = self.tree;
        self.range().map(move |rank| tree.indices.get(rank))
    }
}

/// An iterator over the leaf nodes of a [`KDTree`], left to right.
#[derive(Debug)]
pub struct Leaves<'t, 'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> {
    tree: &'t KDTree<'a, N, P>,
    stack: TinyVec<[u32; 32]>,
}

impl<'t, 'a, N: IndexableFloat, P: PointCloud<N> + ?Sized> Iterator for Leaves<'t, 'a, N, P> {
    type Item = NodeRef<'t, 'a, N, P>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            match self.tree.node(id) {
                Node::Split { left, right, .. } => {
                    // push the right child below the left one so the left subtree pops first
                    self.stack.push(*right);
                    self.stack.push(*left);
                }
                Node::Leaf { .. } => {
                    return Some(NodeRef {
                        tree: self.tree,
                        id,
                    })
                }
            }
        }
        None
    }
}
