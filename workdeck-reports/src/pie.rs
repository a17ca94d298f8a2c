//! Donut chart geometry
//!
//! Slice layout for the notifications chart: each count becomes a circle
//! sector with SVG arc endpoints in a 100×100 viewbox (centre 50,50,
//! radius 40). Slices are laid out clockwise from the top and tile the
//! full circle.

use std::f32::consts::PI;

use crate::tables::TypeCount;

/// Viewbox centre
pub const CENTER: f32 = 50.0;

/// Slice radius
pub const RADIUS: f32 = 40.0;

/// One laid-out donut slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: u32,
    /// Share of the total, in `[0, 1]`
    pub fraction: f32,
    /// Start angle in degrees, 0 at the top
    pub start_angle: f32,
    /// Angular width in degrees
    pub sweep: f32,
    /// Arc start point
    pub x1: f32,
    pub y1: f32,
    /// Arc end point
    pub x2: f32,
    pub y2: f32,
    /// SVG large-arc flag: sweep exceeds half the circle
    pub large_arc: bool,
}

impl PieSlice {
    /// SVG path for this slice (`M centre, L arc start, A arc, Z`)
    pub fn path(&self) -> String {
        format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            CENTER,
            CENTER,
            self.x1,
            self.y1,
            RADIUS,
            RADIUS,
            if self.large_arc { 1 } else { 0 },
            self.x2,
            self.y2
        )
    }
}

fn point_at(angle_deg: f32) -> (f32, f32) {
    // Shift by -90° so angle 0 sits at the top of the circle.
    let rad = (angle_deg - 90.0) * (PI / 180.0);
    (CENTER + RADIUS * rad.cos(), CENTER + RADIUS * rad.sin())
}

/// Lay out donut slices for the given counts
///
/// Fractions are counts over the grand total; an all-zero table yields
/// zero-sweep slices stacked at the top.
pub fn pie_slices(items: &[TypeCount]) -> Vec<PieSlice> {
    let total: f32 = items.iter().map(|i| i.count as f32).sum();
    let mut current_angle = 0.0_f32;

    items
        .iter()
        .map(|item| {
            let fraction = if total > 0.0 {
                item.count as f32 / total
            } else {
                0.0
            };
            let sweep = fraction * 360.0;
            let start_angle = current_angle;
            current_angle += sweep;

            let (x1, y1) = point_at(start_angle);
            let (x2, y2) = point_at(start_angle + sweep);

            PieSlice {
                label: item.kind.clone(),
                count: item.count,
                fraction,
                start_angle,
                sweep,
                x1,
                y1,
                x2,
                y2,
                large_arc: sweep > 180.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::MetricTables;

    fn counts(values: &[(&str, u32)]) -> Vec<TypeCount> {
        values
            .iter()
            .map(|(kind, count)| TypeCount {
                kind: kind.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_slices_tile_the_circle() {
        let tables = MetricTables::sample();
        let slices = pie_slices(&tables.notifications);

        assert_eq!(slices.len(), 4);
        let total_sweep: f32 = slices.iter().map(|s| s.sweep).sum();
        assert!((total_sweep - 360.0).abs() < 1e-3);

        // Each slice starts where the previous one ends.
        for pair in slices.windows(2) {
            assert!((pair[0].start_angle + pair[0].sweep - pair[1].start_angle).abs() < 1e-3);
        }
    }

    #[test]
    fn test_first_slice_starts_at_top() {
        let slices = pie_slices(&counts(&[("a", 1), ("b", 1)]));
        assert!((slices[0].x1 - CENTER).abs() < 1e-3);
        assert!((slices[0].y1 - (CENTER - RADIUS)).abs() < 1e-3);
    }

    #[test]
    fn test_large_arc_flag() {
        let slices = pie_slices(&counts(&[("big", 3), ("small", 1)]));
        assert!(slices[0].large_arc); // 270°
        assert!(!slices[1].large_arc); // 90°
    }

    #[test]
    fn test_zero_total_yields_zero_sweeps() {
        let slices = pie_slices(&counts(&[("a", 0), ("b", 0)]));
        for slice in &slices {
            assert_eq!(slice.sweep, 0.0);
            assert_eq!(slice.fraction, 0.0);
        }
    }

    #[test]
    fn test_path_format() {
        let slices = pie_slices(&counts(&[("half", 1), ("other", 1)]));
        let path = slices[0].path();
        assert!(path.starts_with("M 50 50 L "));
        assert!(path.ends_with(" Z"));
    }
}
