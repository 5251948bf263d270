use crate::{graph::VertexId, sets::visited::VisitorSet};

/// Fixed-capacity visited set: one bit per vertex, packed into `u64` words.
///
/// # Examples
///
/// ```
/// use pathbench::sets::visited::{VisitedBitset, VisitorSet};
///
/// let mut visited = VisitedBitset::new(10);
/// assert!(visited.insert(3));
/// assert!(!visited.insert(3));
/// ```
pub struct VisitedBitset {
    words: Box<[u64]>,
    capacity: usize,
}

impl VisitedBitset {
    /// Room for vertices `0..capacity`, none of them visited.
    pub fn new(capacity: usize) -> Self {
        VisitedBitset {
            words: vec![0u64; capacity.div_ceil(64)].into_boxed_slice(),
            capacity,
        }
    }
}

impl VisitorSet for VisitedBitset {
    /// # Panics
    ///
    /// Panics if `vertex >= capacity`.
    fn insert(&mut self, vertex: VertexId) -> bool {
        assert!(vertex < self.capacity);
        let word = &mut self.words[vertex / 64];
        let mask = 1u64 << (vertex % 64);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_capacity_constructs() {
        let visited = VisitedBitset::new(0);
        assert!(visited.words.is_empty());
    }

    #[test]
    fn every_bit_starts_fresh() {
        for cap in [1usize, 63, 64, 65, 128, 129] {
            let mut visited = VisitedBitset::new(cap);
            for i in 0..cap {
                assert!(visited.insert(i), "bit {i} should start cleared for cap {cap}");
            }
        }
    }

    #[test]
    fn insert_across_word_boundaries() {
        let cap = 200;
        let mut visited = VisitedBitset::new(cap);

        let to_set = [0usize, 1, 63, 64, 127, 128, 199];
        for &i in &to_set {
            assert!(visited.insert(i), "bit {i} should be fresh");
        }

        for i in 0..cap {
            assert_eq!(visited.insert(i), !to_set.contains(&i), "mismatch at {i}");
        }
    }

    #[test]
    fn repeated_insert_is_not_fresh() {
        let mut visited = VisitedBitset::new(10);
        assert!(visited.insert(9));
        assert!(!visited.insert(9));
        assert!(visited.insert(8));
    }

    #[test]
    #[should_panic]
    fn insert_out_of_bounds_panics() {
        let mut visited = VisitedBitset::new(10);
        visited.insert(10);
    }
}
