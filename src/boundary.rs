use crate::{Field2, VecField2};

/// Which edge rule a field obeys.
///
/// Scalars copy their nearest interior neighbour (zero gradient). A velocity
/// component is negated on the walls it is normal to and copied on the walls it
/// is tangential to, so nothing flows through the walls and the flow can slide along them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Scalar,
    /// Velocity component along `i`, normal to the `i = 0` and `i = N-1` walls.
    X,
    /// Velocity component along `j`, normal to the `j = 0` and `j = N-1` walls.
    Y,
}

impl Component {
    fn i_wall_sign(self) -> f32 {
        if self == Component::X {
            -1.0
        } else {
            1.0
        }
    }

    fn j_wall_sign(self) -> f32 {
        if self == Component::Y {
            -1.0
        } else {
            1.0
        }
    }
}

/// Derives every boundary cell of `field` from its interior. Idempotent.
pub fn enforce_boundaries(field: &mut Field2, component: Component) {
    let grid = field.grid();
    let n = grid.n();
    let last = grid.last();
    let i_sign = component.i_wall_sign();
    let j_sign = component.j_wall_sign();

    for i in 0..n {
        field.set(i, 0, j_sign * field.get(i, 1));
        field.set(i, last, j_sign * field.get(i, last - 1));
    }
    for j in 0..n {
        field.set(0, j, i_sign * field.get(1, j));
        field.set(last, j, i_sign * field.get(last - 1, j));
    }

    field.set(0, 0, 0.5 * (field.get(1, 0) + field.get(0, 1)));
    field.set(0, last, 0.5 * (field.get(1, last) + field.get(0, last - 1)));
    field.set(last, 0, 0.5 * (field.get(last - 1, 0) + field.get(last, 1)));
    field.set(
        last,
        last,
        0.5 * (field.get(last - 1, last) + field.get(last, last - 1)),
    );
}

pub fn enforce_vector_boundaries(velocity: &mut VecField2) {
    enforce_boundaries(velocity.u_mut(), Component::X);
    enforce_boundaries(velocity.v_mut(), Component::Y);
}
