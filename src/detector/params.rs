//! Parameters of a line search.
//!
//! Distances in the pattern catalog are in millimetres; `spacing_mm_per_px`
//! converts them into pixel gates. The collinear tolerance is converted the
//! same way but without rounding.

use crate::window::{AngleWindow, UNSET_THETA};
use serde::{Deserialize, Serialize};

/// Sentinel for a numeric parameter missing from the configuration.
pub const UNSET_PARAMETER: f64 = -1.0;

/// Knobs shared by the pairwise and extension stages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineFinderParams {
    /// Physical size of one pixel (mm/px); must be positive.
    pub spacing_mm_per_px: f64,
    /// Maximum distance of a dot from a line to count as collinear (mm).
    pub collinear_tolerance_mm: f64,
    /// Admissible line orientations.
    pub angle_window: AngleWindow,
}

impl Default for LineFinderParams {
    fn default() -> Self {
        Self {
            spacing_mm_per_px: UNSET_PARAMETER,
            collinear_tolerance_mm: UNSET_PARAMETER,
            angle_window: AngleWindow::new(UNSET_THETA, UNSET_THETA),
        }
    }
}

impl LineFinderParams {
    pub fn new(
        spacing_mm_per_px: f64,
        collinear_tolerance_mm: f64,
        angle_window: AngleWindow,
    ) -> Self {
        Self {
            spacing_mm_per_px,
            collinear_tolerance_mm,
            angle_window,
        }
    }

    pub fn collinear_tolerance_px(&self) -> f32 {
        (self.collinear_tolerance_mm / self.spacing_mm_per_px) as f32
    }

    /// Spacing usable for mm → px conversion.
    pub fn has_valid_spacing(&self) -> bool {
        self.spacing_mm_per_px.is_finite() && self.spacing_mm_per_px > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unset_sentinels() {
        let p = LineFinderParams::default();
        assert_eq!(p.spacing_mm_per_px, UNSET_PARAMETER);
        assert!(p.angle_window.is_unset());
        assert!(!p.has_valid_spacing());
    }

    #[test]
    fn collinear_tolerance_scales_without_rounding() {
        let p = LineFinderParams::new(0.4, 1.0, AngleWindow::new(-0.1, 0.1));
        assert!((p.collinear_tolerance_px() - 2.5).abs() < 1e-6);
        assert!(p.has_valid_spacing());
    }
}
