#![doc = include_str!("../README.md")]

mod cloud;
mod error;
pub mod indices;
pub mod kdtree;
mod r#type;

pub use cloud::{Point, PointCloud};
pub use error::PointIndexError;
pub use r#type::IndexableFloat;
