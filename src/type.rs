use std::fmt::Debug;

use num_traits::Float;

/// A trait for scalar types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. The index stores split
/// planes and bounding boxes of the same scalar type as the cloud it was built over, and the
/// search math (midpoints, squared distances, infinity sentinels) relies on IEEE float behavior,
/// so only `f32` and `f64` are supported.
pub trait IndexableFloat: private::Sealed + Float + Debug + Send + Sync {}

impl IndexableFloat for f32 {}

impl IndexableFloat for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
