//! Orientation acceptance window for candidate lines.
//!
//! The window `[min_theta, max_theta]` is given in half space (radians), while
//! candidate orientations come from `atan2` and span (−π, π]. Since lines are
//! undirected, an orientation `a` must also be accepted when its antipode
//! `a ± π` falls into the window. The test distinguishes three layouts:
//!
//! - window strictly inside (−π/2, π/2): the antipodes live near ±π, so accept
//!   `a < max − π` or `a > min + π`;
//! - `max > π/2`: the window leaks past +π/2, accept `min − π < a < max − π`;
//! - `min < −π/2`: the window leaks past −π/2, accept `min + π < a < max + π`.
//!
//! The window itself is either configured or derived from the nominal probe
//! pose, see [`AngleWindow::derive`].

mod derive;

pub use derive::RotationEnvelope;

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Sentinel for a window bound that was never configured.
pub const UNSET_THETA: f64 = -1.0;

/// Admissible line orientations, in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleWindow {
    pub min_theta: f64,
    pub max_theta: f64,
}

impl AngleWindow {
    pub fn new(min_theta: f64, max_theta: f64) -> Self {
        Self {
            min_theta,
            max_theta,
        }
    }

    pub fn from_degrees(min_deg: f64, max_deg: f64) -> Self {
        Self::new(min_deg.to_radians(), max_deg.to_radians())
    }

    /// Window left at the sentinel bounds.
    pub fn unset() -> Self {
        Self::new(UNSET_THETA, UNSET_THETA)
    }

    pub fn is_unset(&self) -> bool {
        self.min_theta == UNSET_THETA && self.max_theta == UNSET_THETA
    }

    pub fn accepts(&self, angle: f64) -> bool {
        let (min, max) = (self.min_theta, self.max_theta);
        if angle > min && angle < max {
            return true;
        }
        if max < FRAC_PI_2 && min > -FRAC_PI_2 {
            angle < max - PI || angle > min + PI
        } else if max > FRAC_PI_2 {
            angle < max - PI && angle > min - PI
        } else if min < -FRAC_PI_2 {
            angle < max + PI && angle > min + PI
        } else {
            false
        }
    }
}

impl Default for AngleWindow {
    fn default() -> Self {
        Self::unset()
    }
}
