use crate::{Field2, Grid2, Vec2};

/// Collocated vector field kept as two scalar component fields.
#[derive(Clone, Debug, PartialEq)]
pub struct VecField2 {
    u: Field2,
    v: Field2,
}

impl VecField2 {
    pub fn new(grid: Grid2, fill: Vec2) -> Self {
        Self {
            u: Field2::new(grid, fill.x),
            v: Field2::new(grid, fill.y),
        }
    }

    pub fn from_fn(grid: Grid2, f: impl Fn(usize, usize) -> Vec2) -> Self {
        let u = Field2::from_fn(grid, |i, j| f(i, j).x);
        let v = Field2::from_fn(grid, |i, j| f(i, j).y);
        Self { u, v }
    }

    pub fn grid(&self) -> Grid2 {
        self.u.grid()
    }

    pub fn get(&self, i: usize, j: usize) -> Vec2 {
        Vec2::new(self.u.get(i, j), self.v.get(i, j))
    }

    pub fn add(&mut self, i: usize, j: usize, amount: Vec2) {
        self.u.add(i, j, amount.x);
        self.v.add(i, j, amount.y);
    }

    pub fn u(&self) -> &Field2 {
        &self.u
    }

    pub fn v(&self) -> &Field2 {
        &self.v
    }

    pub fn u_mut(&mut self) -> &mut Field2 {
        &mut self.u
    }

    pub fn v_mut(&mut self) -> &mut Field2 {
        &mut self.v
    }

    /// Both components at once, for callers that lend them out as scratch.
    pub fn components_mut(&mut self) -> (&mut Field2, &mut Field2) {
        (&mut self.u, &mut self.v)
    }

    pub fn copy_from(&mut self, other: &Self) {
        self.u.copy_from(&other.u);
        self.v.copy_from(&other.v);
    }

    pub fn max_speed(&self) -> f32 {
        self.u
            .data()
            .iter()
            .zip(self.v.data())
            .fold(0.0_f32, |acc, (u, v)| acc.max(Vec2::new(*u, *v).length()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_samples_components() {
        let grid = Grid2::new(3);
        let field = VecField2::from_fn(grid, |i, j| Vec2::new(i as f32, j as f32));
        assert_eq!(field.get(2, 1), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn add_accumulates_both_components() {
        let grid = Grid2::new(4);
        let mut field = VecField2::new(grid, Vec2::new(1.0, -1.0));
        field.add(2, 2, Vec2::new(3.0, 0.5));
        field.add(2, 2, Vec2::new(3.0, 0.5));
        assert_eq!(field.get(2, 2), Vec2::new(7.0, 0.0));
        assert_eq!(field.get(1, 2), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn max_speed_uses_vector_length() {
        let grid = Grid2::new(3);
        let mut field = VecField2::new(grid, Vec2::zero());
        field.add(1, 1, Vec2::new(3.0, -4.0));
        assert!((field.max_speed() - 5.0).abs() <= 1e-6);
    }
}
