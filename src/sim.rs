use crate::advect::{advect, advect_velocity, Resample};
use crate::boundary::Component;
use crate::diffuse::{diffuse, diffuse_velocity};
use crate::error::ConfigError;
use crate::project::project;
use crate::relax::{Relaxation, RelaxationScheme};
use crate::{Field2, Grid2, Vec2, VecField2};
use std::ops::Range;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Cells per side, boundary ring included.
    pub size: usize,
    pub dt: f32,
    /// Sweeps per diffusion or pressure solve. Fixed, never iterated to convergence.
    pub relaxation_iterations: usize,
    pub diffusion: f32,
    pub viscosity: f32,
    pub relaxation: RelaxationScheme,
    pub resample: Resample,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            size: 100,
            dt: 0.2,
            relaxation_iterations: 2,
            diffusion: 0.0,
            viscosity: 0.0,
            relaxation: RelaxationScheme::GaussSeidel,
            resample: Resample::Bilinear,
        }
    }
}

impl SimParams {
    pub fn new(
        size: usize,
        dt: f32,
        relaxation_iterations: usize,
        diffusion: f32,
        viscosity: f32,
    ) -> Self {
        Self {
            size,
            dt,
            relaxation_iterations,
            diffusion,
            viscosity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 3 {
            return Err(ConfigError::GridTooSmall { size: self.size });
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(ConfigError::NonPositiveTimeStep { dt: self.dt });
        }
        if self.relaxation_iterations < 1 {
            return Err(ConfigError::NoRelaxationIterations);
        }
        for (name, value) in [("diffusion", self.diffusion), ("viscosity", self.viscosity)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::NegativeCoefficient { name, value });
            }
        }
        Ok(())
    }

    pub fn relaxation(&self) -> Relaxation {
        Relaxation::new(self.relaxation_iterations, self.relaxation)
    }
}

/// Fields that persist between ticks and that callers read and inject into.
#[derive(Clone, Debug, PartialEq)]
pub struct FluidState {
    pub density: Field2,
    pub velocity: VecField2,
}

impl FluidState {
    pub fn new(grid: Grid2) -> Self {
        Self {
            density: Field2::new(grid, 0.0),
            velocity: VecField2::new(grid, Vec2::zero()),
        }
    }
}

/// Second buffer of each current/previous pair, plus the relaxation sweep buffer.
/// Contents are meaningless between ticks.
#[derive(Clone, Debug)]
pub struct FluidWorkspace {
    density: Field2,
    velocity: VecField2,
    temp: Field2,
}

impl FluidWorkspace {
    pub fn new(grid: Grid2) -> Self {
        Self {
            density: Field2::new(grid, 0.0),
            velocity: VecField2::new(grid, Vec2::zero()),
            temp: Field2::new(grid, 0.0),
        }
    }
}

/// Advances `state` by one `dt`.
///
/// Order: diffuse velocity, project, self-advect velocity, project again, diffuse
/// density, advect density along the final velocity. The two projections borrow
/// whichever velocity pair is not being projected as pressure and divergence
/// scratch, so the pair is reused rather than allocating per tick.
pub fn step_in_place(state: &mut FluidState, params: &SimParams, scratch: &mut FluidWorkspace) {
    let relaxation = params.relaxation();
    let FluidWorkspace {
        density: density_scratch,
        velocity: velocity_scratch,
        temp,
    } = scratch;

    diffuse_velocity(
        velocity_scratch,
        &state.velocity,
        params.viscosity,
        params.dt,
        relaxation,
        temp,
    );
    {
        let (pressure, divergence) = state.velocity.components_mut();
        project(velocity_scratch, pressure, divergence, temp, relaxation);
    }

    advect_velocity(&mut state.velocity, velocity_scratch, params.dt, params.resample);
    {
        let (pressure, divergence) = velocity_scratch.components_mut();
        project(&mut state.velocity, pressure, divergence, temp, relaxation);
    }

    diffuse(
        density_scratch,
        &state.density,
        params.diffusion,
        params.dt,
        relaxation,
        Component::Scalar,
        temp,
    );
    advect(
        &mut state.density,
        density_scratch,
        &state.velocity,
        params.dt,
        params.resample,
        Component::Scalar,
    );
}

/// Half-open cell block `[i.start, i.end) x [j.start, j.end)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub i: Range<usize>,
    pub j: Range<usize>,
}

impl Region {
    pub fn new(i: Range<usize>, j: Range<usize>) -> Self {
        Self { i, j }
    }

    fn clipped(&self, grid: Grid2) -> Region {
        let n = grid.n();
        Region {
            i: self.i.start.min(n)..self.i.end.min(n),
            j: self.j.start.min(n)..self.j.end.min(n),
        }
    }
}

/// A validated simulation owning every buffer it will ever use.
#[derive(Clone, Debug)]
pub struct Simulation {
    params: SimParams,
    grid: Grid2,
    state: FluidState,
    scratch: FluidWorkspace,
    tick: u64,
}

impl Simulation {
    pub fn new(params: SimParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let grid = Grid2::new(params.size);
        debug!(
            size = params.size,
            dt = params.dt,
            iterations = params.relaxation_iterations,
            diffusion = params.diffusion,
            viscosity = params.viscosity,
            scheme = ?params.relaxation,
            resample = ?params.resample,
            "simulation initialized"
        );
        Ok(Self {
            params,
            grid,
            state: FluidState::new(grid),
            scratch: FluidWorkspace::new(grid),
            tick: 0,
        })
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn grid(&self) -> Grid2 {
        self.grid
    }

    /// Completed steps since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn step(&mut self) {
        step_in_place(&mut self.state, &self.params, &mut self.scratch);
        self.tick += 1;
        trace!(tick = self.tick, "step complete");
    }

    /// Adds `amount` to every cell of `region` that lies on the grid.
    pub fn inject_density(&mut self, region: &Region, amount: f32) {
        let clipped = region.clipped(self.grid);
        if clipped != *region {
            debug!(?region, ?clipped, "density region clipped to grid");
        }
        for j in clipped.j.clone() {
            for i in clipped.i.clone() {
                self.state.density.add(i, j, amount);
            }
        }
    }

    /// Adds `impulse` to the velocity at `(i, j)`. Off-grid cells are ignored.
    pub fn inject_velocity(&mut self, i: usize, j: usize, impulse: Vec2) {
        if !self.grid.contains(i, j) {
            debug!(i, j, "velocity impulse outside grid ignored");
            return;
        }
        self.state.velocity.add(i, j, impulse);
    }

    pub fn density(&self) -> &Field2 {
        &self.state.density
    }

    pub fn velocity(&self) -> &VecField2 {
        &self.state.velocity
    }

    pub fn state(&self) -> &FluidState {
        &self.state
    }
}
