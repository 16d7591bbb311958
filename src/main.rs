use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use stable_fluids::{
    density_to_luma, stamp_frame, write_pgm, Region, RelaxationScheme, Resample, SimParams,
    Simulation, Vec2,
};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemeArg {
    GaussSeidel,
    Jacobi,
}

impl From<SchemeArg> for RelaxationScheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::GaussSeidel => RelaxationScheme::GaussSeidel,
            SchemeArg::Jacobi => RelaxationScheme::Jacobi,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResampleArg {
    Bilinear,
    OffsetBlend,
}

impl From<ResampleArg> for Resample {
    fn from(value: ResampleArg) -> Self {
        match value {
            ResampleArg::Bilinear => Resample::Bilinear,
            ResampleArg::OffsetBlend => Resample::OffsetBlend,
        }
    }
}

/// Headless stable-fluids demo: a density source fed by an alternating jet.
#[derive(Parser, Debug)]
#[command(name = "stable-fluids", version, about, long_about = None)]
struct Cli {
    /// Cells per side, boundary ring included.
    #[arg(long, default_value_t = 100)]
    size: usize,

    #[arg(long, default_value_t = 0.2)]
    dt: f32,

    /// Relaxation sweeps per diffusion and pressure solve.
    #[arg(long, default_value_t = 2)]
    iterations: usize,

    #[arg(long, default_value_t = 0.0)]
    diffusion: f32,

    #[arg(long, default_value_t = 0.0)]
    viscosity: f32,

    #[arg(long, value_enum, default_value_t = SchemeArg::GaussSeidel)]
    scheme: SchemeArg,

    #[arg(long, value_enum, default_value_t = ResampleArg::Bilinear)]
    resample: ResampleArg,

    #[arg(long, default_value_t = 150)]
    frames: usize,

    /// Density added to the source block every frame.
    #[arg(long, default_value_t = 100.0)]
    amount: f32,

    /// Magnitude of the per-frame velocity impulse.
    #[arg(long, default_value_t = 10.0)]
    impulse: f32,

    /// Density mapped to full white in exported frames.
    #[arg(long, default_value_t = 100.0)]
    vmax: f32,

    /// Directory for `frame_NNNN.pgm` files. Nothing is written when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Cli {
    fn params(&self) -> SimParams {
        SimParams {
            relaxation: self.scheme.into(),
            resample: self.resample.into(),
            ..SimParams::new(
                self.size,
                self.dt,
                self.iterations,
                self.diffusion,
                self.viscosity,
            )
        }
    }
}

fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Even frames push along +i, odd frames along +j.
fn frame_impulse(frame: usize, magnitude: f32) -> Vec2 {
    if frame % 2 == 0 {
        Vec2::new(magnitude, 0.0)
    } else {
        Vec2::new(0.0, magnitude)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    let mut sim = Simulation::new(cli.params()).context("invalid simulation parameters")?;
    let n = sim.grid().n();
    if let Some(dir) = &cli.out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    let source = Region::new(4..7, 4..7);
    let mut luma = Vec::new();
    for frame in 0..cli.frames {
        sim.inject_density(&source, cli.amount);
        sim.inject_velocity(5, 5, frame_impulse(frame, cli.impulse));
        sim.step();

        let mass = sim.density().sum();
        debug!(
            frame,
            mass,
            max_speed = sim.velocity().max_speed(),
            "frame advanced"
        );

        if let Some(dir) = &cli.out {
            density_to_luma(sim.density(), cli.vmax, &mut luma);
            stamp_frame(&mut luma, n, n, frame, mass);
            let path = dir.join(format!("frame_{frame:04}.pgm"));
            write_pgm(&path, n, n, &luma)?;
        }
    }

    let (min_density, max_density) = sim.density().min_max();
    info!(
        frames = cli.frames,
        ticks = sim.tick(),
        mass = sim.density().sum(),
        min_density,
        max_density,
        max_speed = sim.velocity().max_speed(),
        "simulation finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_is_parsed_strictly() {
        let cli = Cli::try_parse_from(["stable-fluids", "--log-level", "debug"])
            .expect("known level");
        assert_eq!(cli.log_level, Level::DEBUG);
        let cli = Cli::try_parse_from(["stable-fluids"]).expect("defaults");
        assert_eq!(cli.log_level, Level::INFO);
        assert!(Cli::try_parse_from(["stable-fluids", "--log-level", "verbose"]).is_err());
    }

    #[test]
    fn cli_flags_reach_params() {
        let cli = Cli::try_parse_from([
            "stable-fluids",
            "--size",
            "32",
            "--scheme",
            "jacobi",
            "--resample",
            "offset-blend",
        ])
        .expect("valid flags");
        let params = cli.params();
        assert_eq!(params.size, 32);
        assert_eq!(params.relaxation, RelaxationScheme::Jacobi);
        assert_eq!(params.resample, Resample::OffsetBlend);
        assert_eq!(params.validate(), Ok(()));
    }
}
