use crate::boundary::{enforce_boundaries, Component};
use crate::Field2;

/// Sweep ordering used by [`relax`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelaxationScheme {
    /// In-place row-major sweep. Cells later in a sweep see neighbours already
    /// updated earlier in the same sweep. Always sequential.
    #[default]
    GaussSeidel,
    /// Every sweep reads only the previous sweep's values. Converges more slowly than
    /// Gauss-Seidel for the same count, but rows can be updated in parallel.
    Jacobi,
}

/// Fixed relaxation budget shared by the diffusion and pressure solves.
///
/// There is no residual check: exactly `iterations` sweeps run every time, which
/// keeps a tick's cost independent of the flow at the price of an approximate solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relaxation {
    pub iterations: usize,
    pub scheme: RelaxationScheme,
}

impl Relaxation {
    pub fn new(iterations: usize, scheme: RelaxationScheme) -> Self {
        Self { iterations, scheme }
    }
}

/// Approximately solves `(I - a L) x = x0` on the interior of `x`, where `L` is the
/// 4-neighbour Laplacian, updating each interior cell to
/// `(x0 + a * (left + right + down + up)) / c`.
///
/// Boundaries of `x` are enforced with `component`'s rule after every sweep.
/// `c` must be positive; callers derive it from non-negative coefficients.
///
/// `temp` is only touched by the Jacobi scheme, which sweeps into it and swaps it
/// with `x`. The two buffers may trade allocations but nothing new is allocated.
pub fn relax(
    x: &mut Field2,
    x0: &Field2,
    a: f32,
    c: f32,
    relaxation: Relaxation,
    component: Component,
    temp: &mut Field2,
) {
    debug_assert!(c > 0.0);
    match relaxation.scheme {
        RelaxationScheme::GaussSeidel => {
            gauss_seidel(x, x0, a, c, relaxation.iterations, component)
        }
        RelaxationScheme::Jacobi => {
            jacobi(x, x0, a, c, relaxation.iterations, component, temp)
        }
    }
}

fn gauss_seidel(
    x: &mut Field2,
    x0: &Field2,
    a: f32,
    c: f32,
    iterations: usize,
    component: Component,
) {
    let grid = x.grid();
    for _ in 0..iterations {
        for j in grid.interior() {
            for i in grid.interior() {
                let neighbours =
                    x.get(i - 1, j) + x.get(i + 1, j) + x.get(i, j - 1) + x.get(i, j + 1);
                x.set(i, j, (x0.get(i, j) + a * neighbours) / c);
            }
        }
        enforce_boundaries(x, component);
    }
}

fn jacobi(
    x: &mut Field2,
    x0: &Field2,
    a: f32,
    c: f32,
    iterations: usize,
    component: Component,
    temp: &mut Field2,
) {
    assert_eq!(x.grid(), temp.grid(), "jacobi temp grid mismatch");
    for _ in 0..iterations {
        {
            let previous = &*x;
            temp.update_interior(|i, j, _| {
                let neighbours = previous.get(i - 1, j)
                    + previous.get(i + 1, j)
                    + previous.get(i, j - 1)
                    + previous.get(i, j + 1);
                (x0.get(i, j) + a * neighbours) / c
            });
        }
        std::mem::swap(x, temp);
        enforce_boundaries(x, component);
    }
}
