use crate::boundary::{enforce_boundaries, Component};
use crate::{Field2, VecField2};

/// How the four samples around a back-traced position are blended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resample {
    /// `(1 - s1) * low + s1 * high`.
    #[default]
    Bilinear,
    /// `1 - s1 * low + s1 * high`. Shifts every interior cell up by roughly one per
    /// pass; kept for comparing against output produced with that blend.
    OffsetBlend,
}

impl Resample {
    fn blend(self, s1: f32, low: f32, high: f32) -> f32 {
        match self {
            Resample::Bilinear => (1.0 - s1) * low + s1 * high,
            Resample::OffsetBlend => 1.0 - s1 * low + s1 * high,
        }
    }
}

/// Semi-Lagrangian transport of `input` along `velocity` into `out`.
///
/// Each interior cell is traced back by `dt * (N-2) * velocity` and the trace is
/// clamped to `[0.5, N - 1.5]`, so the four samples always lie on the grid whatever
/// the velocity magnitude. Large displacements get smeared as a result.
pub fn advect(
    out: &mut Field2,
    input: &Field2,
    velocity: &VecField2,
    dt: f32,
    resample: Resample,
    component: Component,
) {
    let grid = input.grid();
    let dt0 = dt * grid.interior_len() as f32;
    let upper = grid.interior_len() as f32 + 0.5;
    out.update_interior(|i, j, _| {
        let vel = velocity.get(i, j);
        let x = clamp_trace(i as f32 - dt0 * vel.x, upper);
        let y = clamp_trace(j as f32 - dt0 * vel.y, upper);
        let x_floor = x.floor();
        let y_floor = y.floor();
        let s1 = x - x_floor;
        let t1 = y - y_floor;
        let t0 = 1.0 - t1;
        let i0 = x_floor as usize;
        let j0 = y_floor as usize;
        let low = t0 * input.get(i0, j0) + t1 * input.get(i0, j0 + 1);
        let high = t0 * input.get(i0 + 1, j0) + t1 * input.get(i0 + 1, j0 + 1);
        resample.blend(s1, low, high)
    });
    enforce_boundaries(out, component);
}

/// Self-advection: each component of `velocity` is carried by `velocity` itself.
pub fn advect_velocity(out: &mut VecField2, velocity: &VecField2, dt: f32, resample: Resample) {
    advect(out.u_mut(), velocity.u(), velocity, dt, resample, Component::X);
    advect(out.v_mut(), velocity.v(), velocity, dt, resample, Component::Y);
}

// NaN traces fall to the lower bound instead of poisoning the index.
fn clamp_trace(value: f32, upper: f32) -> f32 {
    if value.is_nan() {
        return 0.5;
    }
    value.clamp(0.5, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid2, Vec2};

    fn assert_close(a: f32, b: f32, tol: f32) {
        assert!(
            (a - b).abs() <= tol,
            "expected {a} to be within {tol} of {b}"
        );
    }

    #[test]
    fn zero_velocity_keeps_interior() {
        let grid = Grid2::new(6);
        let input = Field2::from_fn(grid, |i, j| (i * 10 + j) as f32);
        let velocity = VecField2::new(grid, Vec2::zero());
        let mut out = Field2::new(grid, 0.0);
        advect(&mut out, &input, &velocity, 0.2, Resample::Bilinear, Component::Scalar);
        for j in grid.interior() {
            for i in grid.interior() {
                assert_close(out.get(i, j), input.get(i, j), 1e-5);
            }
        }
    }

    #[test]
    fn whole_cell_shift_moves_values() {
        let grid = Grid2::new(8);
        let input = Field2::from_fn(grid, |i, j| if i == 3 && j == 4 { 5.0 } else { 0.0 });
        // dt * (N-2) * u = 0.25 * 6 * (2/3) = 1 cell along +i.
        let velocity = VecField2::new(grid, Vec2::new(2.0 / 3.0, 0.0));
        let mut out = Field2::new(grid, 0.0);
        advect(&mut out, &input, &velocity, 0.25, Resample::Bilinear, Component::Scalar);
        assert_close(out.get(4, 4), 5.0, 1e-4);
        assert_close(out.get(3, 4), 0.0, 1e-4);
    }

    #[test]
    fn half_cell_shift_blends_neighbours() {
        let grid = Grid2::new(8);
        let input = Field2::from_fn(grid, |i, _| i as f32);
        // Trace lands half way between i - 1 and i.
        let velocity = VecField2::new(grid, Vec2::new(0.5 / (0.2 * 6.0), 0.0));
        let mut out = Field2::new(grid, 0.0);
        advect(&mut out, &input, &velocity, 0.2, Resample::Bilinear, Component::Scalar);
        assert_close(out.get(4, 3), 3.5, 1e-4);
    }

    #[test]
    fn huge_velocity_is_clamped_inside_grid() {
        let grid = Grid2::new(6);
        let input = Field2::from_fn(grid, |i, j| (i + j) as f32);
        let mut out = Field2::new(grid, 0.0);
        for speed in [1.0e6_f32, -1.0e6, f32::NAN] {
            let velocity = VecField2::new(grid, Vec2::new(speed, -speed));
            advect(&mut out, &input, &velocity, 0.2, Resample::Bilinear, Component::Scalar);
            let (min_value, max_value) = out.min_max();
            assert!(min_value >= 0.0 && max_value <= 10.0);
        }
    }

    #[test]
    fn offset_blend_adds_one_to_zero_input() {
        let grid = Grid2::new(5);
        let input = Field2::new(grid, 0.0);
        let velocity = VecField2::new(grid, Vec2::zero());
        let mut out = Field2::new(grid, 0.0);
        advect(&mut out, &input, &velocity, 0.2, Resample::OffsetBlend, Component::Scalar);
        assert_close(out.get(2, 2), 1.0, 1e-6);
        let mut bilinear = Field2::new(grid, 7.0);
        advect(&mut bilinear, &input, &velocity, 0.2, Resample::Bilinear, Component::Scalar);
        assert_close(bilinear.abs_sum(), 0.0, 1e-9);
    }

    #[test]
    fn self_advection_reflects_walls() {
        let grid = Grid2::new(7);
        let velocity = VecField2::from_fn(grid, |i, j| Vec2::new(0.1 * i as f32, -0.05 * j as f32));
        let mut out = VecField2::new(grid, Vec2::zero());
        advect_velocity(&mut out, &velocity, 0.1, Resample::Bilinear);
        assert_close(out.u().get(0, 3), -out.u().get(1, 3), 1e-6);
        assert_close(out.v().get(3, 0), -out.v().get(3, 1), 1e-6);
        assert_close(out.u().get(3, 0), out.u().get(3, 1), 1e-6);
    }
}
