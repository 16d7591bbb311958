use crate::boundary::{enforce_boundaries, enforce_vector_boundaries, Component};
use crate::relax::{relax, Relaxation};
use crate::{Field2, VecField2};

/// Removes the divergent part of `velocity` in place.
///
/// `pressure`, `divergence` and `temp` are scratch buffers on the same grid; all
/// are overwritten. Afterwards `pressure` holds the relaxed potential whose
/// gradient was subtracted.
pub fn project(
    velocity: &mut VecField2,
    pressure: &mut Field2,
    divergence: &mut Field2,
    temp: &mut Field2,
    relaxation: Relaxation,
) {
    let n = velocity.grid().n() as f32;

    {
        let u = velocity.u();
        let v = velocity.v();
        divergence.update_interior(|i, j, _| {
            -0.5 * (u.get(i + 1, j) - u.get(i - 1, j) + v.get(i, j + 1) - v.get(i, j - 1)) / n
        });
    }
    pressure.fill(0.0);
    enforce_boundaries(divergence, Component::Scalar);
    enforce_boundaries(pressure, Component::Scalar);

    relax(pressure, divergence, 1.0, 6.0, relaxation, Component::Scalar, temp);

    let pressure = &*pressure;
    velocity.u_mut().update_interior(|i, j, value| {
        value - 0.5 * (pressure.get(i + 1, j) - pressure.get(i - 1, j)) * n
    });
    velocity.v_mut().update_interior(|i, j, value| {
        value - 0.5 * (pressure.get(i, j + 1) - pressure.get(i, j - 1)) * n
    });
    enforce_vector_boundaries(velocity);
}

/// Sum of absolute central-difference divergence over the interior.
pub fn divergence_abs_sum(velocity: &VecField2) -> f32 {
    let grid = velocity.grid();
    let u = velocity.u();
    let v = velocity.v();
    let mut total = 0.0;
    for j in grid.interior() {
        for i in grid.interior() {
            let div = u.get(i + 1, j) - u.get(i - 1, j) + v.get(i, j + 1) - v.get(i, j - 1);
            total += (0.5 * div).abs();
        }
    }
    total
}
