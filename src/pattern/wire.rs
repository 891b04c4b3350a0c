use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One wire of a pattern, located by its distance from the pattern origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    /// Distance from the first wire of the pattern (millimetres).
    pub distance_to_origin_mm: f64,
    /// Accepted deviation of the measured distance (millimetres).
    pub tolerance_mm: f64,
}

impl Wire {
    pub fn new(distance_to_origin_mm: f64, tolerance_mm: f64) -> Self {
        Self {
            distance_to_origin_mm,
            tolerance_mm,
        }
    }
}

/// Physical wire endpoints in the phantom reference frame (millimetres).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireEndpoints {
    pub front: [f64; 3],
    pub back: [f64; 3],
}

impl WireEndpoints {
    pub fn front(&self) -> Vector3<f64> {
        Vector3::from(self.front)
    }

    pub fn back(&self) -> Vector3<f64> {
        Vector3::from(self.back)
    }
}

/// Expected length with its tolerance, both rounded to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthGate {
    pub expected_px: f32,
    pub tolerance_px: f32,
}

impl LengthGate {
    /// Converts millimetres to pixels, rounding half up like the phantom tables.
    pub fn from_mm(distance_mm: f64, tolerance_mm: f64, spacing_mm_per_px: f64) -> Self {
        Self {
            expected_px: round_px(distance_mm / spacing_mm_per_px),
            tolerance_px: round_px(tolerance_mm / spacing_mm_per_px),
        }
    }

    /// Strict acceptance: `|length − expected| < tolerance`.
    #[inline]
    pub fn accepts(&self, length_px: f32) -> bool {
        (length_px - self.expected_px).abs() < self.tolerance_px
    }
}

#[inline]
fn round_px(value: f64) -> f32 {
    (value + 0.5).floor() as f32
}
