use serde::{Deserialize, Serialize};

/// Pixel-space layout of the three stacked tray sections.
///
/// Screen-style coordinates: x grows rightward, y grows downward. The three
/// sections are stacked top to bottom — population, sample tray, sampling
/// distribution — and bars grow upward from each section's base line, so a
/// particle falling from the population into the tray moves toward larger y.
///
/// Both the engine (particle start/target positions) and the renderer (bar
/// placement) work from this one mapping, exposed to the renderer through
/// the engine snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Canvas width in pixels.
    pub width: f64,
    /// Height of each tray section in pixels.
    pub section_height: f64,
    /// Pixel height of one landed value in a stack.
    pub stack_unit: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 660.0,
            section_height: 220.0,
            stack_unit: 8.0,
        }
    }
}

impl Geometry {
    /// Base line (bottom) of the population section.
    #[must_use]
    pub fn population_base(&self) -> f64 {
        self.section_height
    }

    /// Base line of the sample tray section.
    #[must_use]
    pub fn tray_base(&self) -> f64 {
        self.section_height * 2.0
    }

    /// Base line of the sampling-distribution section.
    #[must_use]
    pub fn distribution_base(&self) -> f64 {
        self.section_height * 3.0
    }

    /// Total canvas height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.section_height * 3.0
    }

    /// Width of one bin column.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bin_width(&self, bins: usize) -> f64 {
        self.width / bins as f64
    }

    /// Horizontal center of a bin column.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bin_center_x(&self, bin: usize, bins: usize) -> f64 {
        (bin as f64 + 0.5) * self.bin_width(bins)
    }

    /// Top surface of a stack of `level` landed values on `base`.
    #[must_use]
    pub fn stack_top_y(&self, base: f64, level: u32) -> f64 {
        base - f64::from(level) * self.stack_unit
    }

    /// Resting y of a value landing on a stack that already holds `level`
    /// values: one unit above the current stack top.
    #[must_use]
    pub fn rest_y(&self, base: f64, level: u32) -> f64 {
        self.stack_top_y(base, level + 1)
    }

    /// Height of a population bar, scaled so the heaviest bin fills the
    /// section. Zero when the population is empty.
    #[must_use]
    pub fn scaled_bar_height(&self, weight: u32, max_weight: u32) -> f64 {
        if max_weight == 0 {
            return 0.0;
        }
        self.section_height * f64::from(weight) / f64::from(max_weight)
    }

    /// Shared convergence point for gather animations, on the boundary
    /// between the sample tray and the sampling distribution.
    #[must_use]
    pub fn convergence_point(&self) -> (f64, f64) {
        (self.width / 2.0, self.tray_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_stack_downward() {
        let geometry = Geometry::default();
        assert!(geometry.population_base() < geometry.tray_base());
        assert!(geometry.tray_base() < geometry.distribution_base());
        assert_eq!(geometry.distribution_base(), geometry.height());
    }

    #[test]
    fn test_bin_centers_span_the_width() {
        let geometry = Geometry::default();
        let bins = 33;
        let first = geometry.bin_center_x(0, bins);
        let last = geometry.bin_center_x(bins - 1, bins);
        assert!(first > 0.0);
        assert!(last < geometry.width);
        assert!((last - first) > geometry.width * 0.9);
    }

    #[test]
    fn test_stacks_grow_upward() {
        let geometry = Geometry::default();
        let base = geometry.tray_base();
        assert_eq!(geometry.stack_top_y(base, 0), base);
        assert!(geometry.rest_y(base, 0) < base);
        assert!(geometry.rest_y(base, 3) < geometry.rest_y(base, 0));
    }

    #[test]
    fn test_scaled_bar_height() {
        let geometry = Geometry::default();
        assert_eq!(geometry.scaled_bar_height(0, 0), 0.0);
        assert_eq!(
            geometry.scaled_bar_height(1000, 1000),
            geometry.section_height
        );
        assert_eq!(
            geometry.scaled_bar_height(500, 1000),
            geometry.section_height / 2.0
        );
    }

    #[test]
    fn test_convergence_point_sits_on_tray_boundary() {
        let geometry = Geometry::default();
        let (x, y) = geometry.convergence_point();
        assert_eq!(x, geometry.width / 2.0);
        assert_eq!(y, geometry.tray_base());
    }
}
