use crate::Field2;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Maps density to 8-bit luma with `vmax` as full white.
///
/// Image rows follow the first grid index, so row `r`, column `c` shows cell `(r, c)`.
pub fn density_to_luma(density: &Field2, vmax: f32, out: &mut Vec<u8>) {
    let n = density.grid().n();
    out.resize(n * n, 0);
    let scale = if vmax > 0.0 { 1.0 / vmax } else { 0.0 };
    for row in 0..n {
        for col in 0..n {
            let t = (density.get(row, col) * scale).clamp(0.0, 1.0);
            out[row * n + col] = (t * 255.0) as u8;
        }
    }
}

/// Writes a binary greyscale PGM (`P5`).
pub fn write_pgm(path: &Path, width: usize, height: usize, pixels: &[u8]) -> Result<()> {
    anyhow::ensure!(
        pixels.len() == width * height,
        "pixel buffer holds {} values, expected {}x{}",
        pixels.len(),
        width,
        height
    );
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write!(writer, "P5\n{width} {height}\n255\n")?;
    writer.write_all(pixels)?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
