use std::ops::Range;

/// Square cell grid of `n` x `n` cells. The outer ring is the boundary region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid2 {
    n: usize,
}

impl Grid2 {
    pub fn new(n: usize) -> Self {
        assert!(n >= 3, "grid size must be >= 3");
        Self { n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Total cells, boundary ring included.
    pub fn cell_count(&self) -> usize {
        self.n * self.n
    }

    pub fn last(&self) -> usize {
        self.n - 1
    }

    /// Number of interior cells along one axis.
    pub fn interior_len(&self) -> usize {
        self.n - 2
    }

    pub fn interior(&self) -> Range<usize> {
        1..self.n - 1
    }

    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n && j < self.n);
        j * self.n + i
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.n && j < self.n
    }

    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.last() || j == self.last()
    }
}
