mod advect;
mod boundary;
mod diffuse;
mod error;
mod export;
mod field;
mod grid;
mod hud;
mod parallel;
mod project;
mod relax;
mod sim;
mod vec2;
mod vec_field;

pub use advect::{advect, advect_velocity, Resample};
pub use boundary::{enforce_boundaries, enforce_vector_boundaries, Component};
pub use diffuse::{diffuse, diffuse_velocity};
pub use error::ConfigError;
pub use export::{density_to_luma, write_pgm};
pub use field::Field2;
pub use grid::Grid2;
pub use hud::{overlay_text, stamp_frame, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH, LINE_SPACING};
pub use project::{divergence_abs_sum, project};
pub use relax::{relax, Relaxation, RelaxationScheme};
pub use sim::{step_in_place, FluidState, FluidWorkspace, Region, SimParams, Simulation};
pub use vec2::Vec2;
pub use vec_field::VecField2;
