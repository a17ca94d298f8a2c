//! Workload heatmap colors
//!
//! Maps intensity values in `[0, 1]` onto a green-to-red ramp: low load is
//! green, mid load yellow-orange, full load pure red. Out-of-range input
//! is clamped before mapping.

use crate::tables::WorkloadGrid;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS `rgb(r,g,b)` form
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Map a workload intensity to its cell color
pub fn intensity_color(intensity: f32) -> Rgb {
    let i = intensity.clamp(0.0, 1.0);
    let r = (255.0 * (i * 2.0).min(1.0)).floor() as u8;
    let g = (255.0 * (1.0 - i * 1.5).max(0.0)).floor() as u8;
    let b = (100.0 * (1.0 - i * 2.0).max(0.0)).floor() as u8;
    Rgb { r, g, b }
}

/// Color every cell of the grid, row-major like the grid itself
pub fn heatmap_colors(grid: &WorkloadGrid) -> Vec<Vec<Rgb>> {
    grid.cells
        .iter()
        .map(|row| row.iter().map(|&i| intensity_color(i)).collect())
        .collect()
}
