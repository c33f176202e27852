//! Storage for the reordering permutation, held as either `u16` or `u32` to save space.

/// The permutation of point offsets owned by an index.
///
/// Construction starts from the identity permutation and reorders it in place; afterwards each
/// leaf of the tree owns a contiguous run of ranks. Offsets are stored as `u16` when the cloud is
/// small enough, halving the footprint of the array.
#[derive(Debug, Clone, PartialEq)]
pub enum Indices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Indices {
    /// The identity permutation `0..num_points`.
    pub(crate) fn identity(num_points: usize) -> Self {
        if num_points < 65536 {
            Self::U16((0..num_points).map(|offset| offset as u16).collect())
        } else {
            Self::U32((0..num_points).map(|offset| offset as u32).collect())
        }
    }

    /// The number of offsets stored, always the point count of the indexed cloud.
    pub fn len(&self) -> usize {
        match self {
            Self::U16(arr) => arr.len(),
            Self::U32(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The point offset stored at `rank`.
    #[inline]
    pub fn get(&self, rank: usize) -> usize {
        match self {
            Self::U16(arr) => arr[rank] as usize,
            Self::U32(arr) => arr[rank] as usize,
        }
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        match self {
            Self::U16(arr) => arr.swap(a, b),
            Self::U32(arr) => arr.swap(a, b),
        }
    }

    #[inline]
    pub fn bytes_per_element(&self) -> usize {
        match self {
            Self::U16(_) => 2,
            Self::U32(_) => 4,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_clouds_use_u16() {
        let indices = Indices::identity(100);
        assert_eq!(indices.bytes_per_element(), 2);
        assert_eq!(indices.len(), 100);
        for rank in 0..100 {
            assert_eq!(indices.get(rank), rank);
        }
    }

    #[test]
    fn large_clouds_use_u32() {
        let indices = Indices::identity(70_000);
        assert_eq!(indices.bytes_per_element(), 4);
        assert_eq!(indices.get(69_999), 69_999);
    }

    #[test]
    fn swap_exchanges_offsets() {
        let mut indices = Indices::identity(4);
        indices.swap(0, 3);
        assert_eq!(indices.get(0), 3);
        assert_eq!(indices.get(3), 0);
        assert_eq!(indices.get(1), 1);
    }
}
