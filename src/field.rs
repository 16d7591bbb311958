use crate::grid::Grid2;
use crate::parallel::should_parallel;
use rayon::prelude::*;

/// Scalar quantity stored per cell, row-major in `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2 {
    grid: Grid2,
    data: Vec<f32>,
}

impl Field2 {
    pub fn new(grid: Grid2, fill: f32) -> Self {
        let data = vec![fill; grid.cell_count()];
        Self { grid, data }
    }

    pub fn from_fn(grid: Grid2, f: impl Fn(usize, usize) -> f32) -> Self {
        let n = grid.n();
        let data = (0..grid.cell_count())
            .map(|idx| {
                let i = idx % n;
                let j = idx / n;
                f(i, j)
            })
            .collect();
        Self { grid, data }
    }

    pub fn grid(&self) -> Grid2 {
        self.grid
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[self.grid.idx(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        let idx = self.grid.idx(i, j);
        self.data[idx] = value;
    }

    pub fn add(&mut self, i: usize, j: usize, amount: f32) {
        let idx = self.grid.idx(i, j);
        self.data[idx] += amount;
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Exact cell-by-cell copy, boundary included.
    pub fn copy_from(&mut self, other: &Self) {
        self.assert_same_grid(other);
        self.data.copy_from_slice(&other.data);
    }

    /// Rewrites every interior cell from `f(i, j, current)`. Boundary cells are untouched.
    /// Each cell only sees its own previous value, so the row-parallel path matches
    /// the sequential one exactly.
    pub fn update_interior(&mut self, f: impl Fn(usize, usize, f32) -> f32 + Sync) {
        let parallel = should_parallel(self.data.len());
        self.update_interior_with(f, parallel);
    }

    fn update_interior_with(
        &mut self,
        f: impl Fn(usize, usize, f32) -> f32 + Sync,
        parallel: bool,
    ) {
        let n = self.grid.n();
        let last = self.grid.last();
        let update_row = |(j, row): (usize, &mut [f32])| {
            if j == 0 || j == last {
                return;
            }
            for (i, value) in row.iter_mut().enumerate().take(last).skip(1) {
                *value = f(i, j, *value);
            }
        };
        if parallel {
            self.data.par_chunks_mut(n).enumerate().for_each(update_row);
        } else {
            self.data.chunks_mut(n).enumerate().for_each(update_row);
        }
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    pub fn abs_sum(&self) -> f32 {
        self.data.iter().map(|value| value.abs()).sum()
    }

    pub fn max_abs(&self) -> f32 {
        self.data
            .iter()
            .fold(0.0_f32, |acc, value| acc.max(value.abs()))
    }

    pub fn min_max(&self) -> (f32, f32) {
        let mut iter = self.data.iter().filter(|value| value.is_finite());
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        let mut min_value = *first;
        let mut max_value = *first;
        for value in iter {
            if *value < min_value {
                min_value = *value;
            }
            if *value > max_value {
                max_value = *value;
            }
        }
        (min_value, max_value)
    }

    fn assert_same_grid(&self, other: &Self) {
        assert_eq!(self.grid, other.grid, "field grid mismatch");
    }
}
