//! An immutable kd-tree over external 3D point clouds.
//!
//! The tree is built once over a frozen [`PointCloud`][crate::PointCloud] and answers
//! nearest-neighbor queries under squared Euclidean distance. Points are grouped into bucket
//! leaves of a configurable maximum size; internal nodes split the widest axis of their range.

#![warn(missing_docs)]

mod bounds;
mod builder;
mod index;
mod search;
mod traversal;

pub use bounds::Aabb;
pub use builder::DEFAULT_BUCKET_SIZE;
pub use index::KDTree;
pub use traversal::{Leaves, NodeRef};
