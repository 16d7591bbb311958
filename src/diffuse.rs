use crate::boundary::Component;
use crate::relax::{relax, Relaxation};
use crate::{Field2, VecField2};

/// Implicit diffusion of `input` into `out`.
///
/// A zero coefficient copies `input` verbatim, boundary included, without touching
/// the solver. Otherwise `out` holds the relaxed solution with
/// `a = dt * coefficient * (N-2)^2` and `c = 1 + 6a`; its previous contents serve
/// as the initial guess. `temp` is the solver's sweep buffer.
pub fn diffuse(
    out: &mut Field2,
    input: &Field2,
    coefficient: f32,
    dt: f32,
    relaxation: Relaxation,
    component: Component,
    temp: &mut Field2,
) {
    if coefficient == 0.0 {
        out.copy_from(input);
        return;
    }
    let cells = input.grid().interior_len() as f32;
    let a = dt * coefficient * cells * cells;
    relax(out, input, a, 1.0 + 6.0 * a, relaxation, component, temp);
}

/// Diffuses each velocity component with its own wall rule.
pub fn diffuse_velocity(
    out: &mut VecField2,
    input: &VecField2,
    viscosity: f32,
    dt: f32,
    relaxation: Relaxation,
    temp: &mut Field2,
) {
    diffuse(out.u_mut(), input.u(), viscosity, dt, relaxation, Component::X, temp);
    diffuse(out.v_mut(), input.v(), viscosity, dt, relaxation, Component::Y, temp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relax::RelaxationScheme;
    use crate::{Grid2, Vec2};

    fn assert_close(a: f32, b: f32, tol: f32) {
        assert!(
            (a - b).abs() <= tol,
            "expected {a} to be within {tol} of {b}"
        );
    }

    fn relaxation(iterations: usize) -> Relaxation {
        Relaxation::new(iterations, RelaxationScheme::GaussSeidel)
    }

    #[test]
    fn zero_coefficient_is_an_exact_copy() {
        let grid = Grid2::new(7);
        let input = Field2::from_fn(grid, |i, j| ((i * 31 + j * 17) % 13) as f32 * 0.71 - 2.0);
        let mut out = Field2::new(grid, 123.0);
        let mut temp = Field2::new(grid, 0.0);
        diffuse(&mut out, &input, 0.0, 0.2, relaxation(4), Component::Scalar, &mut temp);
        assert_eq!(out, input);
    }

    #[test]
    fn zero_viscosity_copies_velocity() {
        let grid = Grid2::new(5);
        let input = VecField2::from_fn(grid, |i, j| Vec2::new(i as f32 - 2.0, j as f32 * 3.0));
        let mut out = VecField2::new(grid, Vec2::new(9.0, 9.0));
        let mut temp = Field2::new(grid, 0.0);
        diffuse_velocity(&mut out, &input, 0.0, 0.1, relaxation(2), &mut temp);
        assert_eq!(out, input);
    }

    #[test]
    fn one_sweep_uses_interior_scaled_coupling() {
        let grid = Grid2::new(5);
        let input = Field2::from_fn(grid, |i, j| if i == 2 && j == 2 { 10.0 } else { 0.0 });
        let mut out = Field2::new(grid, 0.0);
        let mut temp = Field2::new(grid, 0.0);
        // a = 0.1 * 0.1 * 3^2 = 0.09, c = 1 + 6a = 1.54.
        diffuse(&mut out, &input, 0.1, 0.1, relaxation(1), Component::Scalar, &mut temp);
        let centre = 10.0 / 1.54;
        assert_close(out.get(2, 2), centre, 1e-5);
        assert_close(out.get(3, 2), 0.09 * centre / 1.54, 1e-6);
        assert_close(out.get(2, 3), 0.09 * centre / 1.54, 1e-6);
        assert_close(out.get(1, 2), 0.0, 1e-9);
        assert_close(out.get(4, 2), out.get(3, 2), 1e-9);
    }

    #[test]
    fn diffusion_spreads_a_peak() {
        let grid = Grid2::new(9);
        let input = Field2::from_fn(grid, |i, j| if i == 4 && j == 4 { 10.0 } else { 0.0 });
        let mut out = Field2::new(grid, 0.0);
        let mut temp = Field2::new(grid, 0.0);
        diffuse(&mut out, &input, 0.01, 0.2, relaxation(20), Component::Scalar, &mut temp);
        assert!(out.get(4, 4) < 10.0);
        assert_close(out.get(0, 4), out.get(1, 4), 1e-6);
        assert!(out.get(3, 4) > 0.0);
        assert!(out.get(4, 5) > 0.0);
    }

    #[test]
    fn uniform_interior_stays_bounded() {
        let grid = Grid2::new(6);
        let input = Field2::new(grid, 2.0);
        let mut out = Field2::new(grid, 0.0);
        let mut temp = Field2::new(grid, 0.0);
        diffuse(&mut out, &input, 0.5, 0.2, relaxation(10), Component::Scalar, &mut temp);
        let (min_value, max_value) = out.min_max();
        assert!(min_value >= 0.0);
        assert!(max_value <= 2.0 + 1e-6);
    }
}
