use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum PointIndexError {
    /// Construction was attempted over a point cloud with zero points.
    #[error("Cannot build an index over an empty point cloud.")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, PointIndexError>;
