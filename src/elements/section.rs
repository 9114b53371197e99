//! Section properties for 2D frame elements

use serde::{Deserialize, Serialize};

/// In-plane cross-section properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub a: f64,
    /// Moment of inertia about the bending axis
    pub i: f64,
}

impl Section {
    /// Create a new section from area and moment of inertia
    pub fn new(a: f64, i: f64) -> Self {
        Self { a, i }
    }

    /// Create a solid rectangular section bending about its width
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Self {
            a: width * depth,
            i: width * depth.powi(3) / 12.0,
        }
    }

    /// Create a wide flange (I-beam) section bending about its strong axis
    ///
    /// # Arguments
    /// * `depth` - Total depth of section
    /// * `flange_width` - Width of flange
    /// * `flange_thickness` - Thickness of flange
    /// * `web_thickness` - Thickness of web
    pub fn wide_flange(
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Self {
        let hw = depth - 2.0 * flange_thickness;
        let a = 2.0 * flange_width * flange_thickness + hw * web_thickness;
        let i = (flange_width * depth.powi(3) - (flange_width - web_thickness) * hw.powi(3)) / 12.0;
        Self { a, i }
    }

    /// Radius of gyration about the bending axis
    pub fn radius_of_gyration(&self) -> f64 {
        (self.i / self.a).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_section() {
        let section = Section::rectangular(0.3, 0.5);
        assert!((section.a - 0.15).abs() < 1e-10);
        assert!((section.i - 0.3 * 0.5_f64.powi(3) / 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_wide_flange_reduces_to_rectangle() {
        // Web as thick as the flange is a solid rectangle
        let wf = Section::wide_flange(0.5, 0.3, 0.05, 0.3);
        let rect = Section::rectangular(0.3, 0.5);
        assert!((wf.a - rect.a).abs() < 1e-12);
        assert!((wf.i - rect.i).abs() < 1e-12);
        assert!(wf.radius_of_gyration() > 0.0);
    }
}
