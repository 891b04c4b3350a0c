//! Angle window derived from the nominal probe pose.
//!
//! The expected in-image direction of the wire lines is the intersection of the
//! wire plane with the image plane. Starting from the wire-plane normal in the
//! phantom frame, each probe rotation `R` of the envelope maps it into image
//! coordinates through `R · T_image←phantom`; crossing that with the image
//! normal `(0, 0, 1)` gives the line direction, whose angle to the image Y axis
//! is recorded. The window spans the minimum and maximum over the 3 × 3 × 3
//! grid `{negative, 0, positive}` per axis.

use super::AngleWindow;
use crate::error::WindowError;
use log::debug;
use nalgebra::{Matrix4, Vector3, Vector4};
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-12;

/// Maximum probe rotation around each image axis, in degrees.
///
/// Stored as `[x_neg, x_pos, y_neg, y_pos, z_neg, z_pos]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationEnvelope(pub [f64; 6]);

impl RotationEnvelope {
    fn axis_samples_rad(&self, axis: usize) -> [f64; 3] {
        let lo = self.0[2 * axis];
        let hi = self.0[2 * axis + 1];
        [lo.to_radians(), 0.0, hi.to_radians()]
    }
}

/// Rotation about X, then Y, then Z, embedded in a homogeneous matrix.
fn rotation_xyz(tx: f64, ty: f64, tz: f64) -> Matrix4<f64> {
    let (sx, cx) = tx.sin_cos();
    let (sy, cy) = ty.sin_cos();
    let (sz, cz) = tz.sin_cos();
    Matrix4::new(
        cy * cz,
        -cx * sz + sx * sy * cz,
        sx * sz + cx * sy * cz,
        0.0,
        cy * sz,
        cx * cz + sx * sy * sz,
        -sx * cz + cx * sy * sz,
        0.0,
        -sy,
        sx * cy,
        cx * cy,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}

impl AngleWindow {
    /// Derives the window from the image-to-phantom transform, the rotation
    /// envelope and the wire-plane normal (phantom frame).
    pub fn derive(
        image_to_phantom: &Matrix4<f64>,
        envelope: &RotationEnvelope,
        wire_plane_normal: &Vector3<f64>,
    ) -> Result<Self, WindowError> {
        if wire_plane_normal.norm() <= EPS {
            return Err(WindowError::DegenerateWirePlane);
        }
        let normal_h = Vector4::new(
            wire_plane_normal.x,
            wire_plane_normal.y,
            wire_plane_normal.z,
            0.0,
        );
        let image_normal = Vector3::z();
        let image_y = Vector3::y();

        let mut min_theta = f64::INFINITY;
        let mut max_theta = f64::NEG_INFINITY;
        for tx in envelope.axis_samples_rad(0) {
            for ty in envelope.axis_samples_rad(1) {
                for tz in envelope.axis_samples_rad(2) {
                    let total = rotation_xyz(tx, ty, tz) * image_to_phantom;
                    let n = (total * normal_h).xyz();
                    let direction = n.cross(&image_normal);
                    let norm = direction.norm();
                    if norm <= EPS {
                        continue;
                    }
                    let angle = (direction.dot(&image_y) / norm).acos();
                    min_theta = min_theta.min(angle);
                    max_theta = max_theta.max(angle);
                }
            }
        }
        if !min_theta.is_finite() || !max_theta.is_finite() {
            return Err(WindowError::DegenerateLineDirection);
        }
        debug!(
            "AngleWindow::derive min_theta={:.4} max_theta={:.4} rad",
            min_theta, max_theta
        );
        Ok(Self::new(min_theta, max_theta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn symmetric(x_deg: f64, y_deg: f64, z_deg: f64) -> RotationEnvelope {
        RotationEnvelope([-x_deg, x_deg, -y_deg, y_deg, -z_deg, z_deg])
    }

    #[test]
    fn zero_envelope_collapses_to_single_angle() {
        let window = AngleWindow::derive(
            &Matrix4::identity(),
            &symmetric(0.0, 0.0, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
        )
        .expect("window");
        assert_abs_diff_eq!(window.min_theta, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(window.max_theta, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn z_rotation_widens_window() {
        let window = AngleWindow::derive(
            &Matrix4::identity(),
            &symmetric(0.0, 0.0, 10.0),
            &Vector3::new(1.0, 0.0, 0.0),
        )
        .expect("window");
        assert_abs_diff_eq!(window.min_theta, PI - 10f64.to_radians(), epsilon = 1e-9);
        assert_abs_diff_eq!(window.max_theta, PI, epsilon = 1e-9);
    }

    #[test]
    fn derivation_is_reproducible() {
        let transform = Matrix4::new(
            0.0, -1.0, 0.0, 12.0, //
            1.0, 0.0, 0.0, -4.0, //
            0.0, 0.0, 1.0, 30.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        let envelope = RotationEnvelope([-15.0, 10.0, -5.0, 5.0, -20.0, 25.0]);
        let normal = Vector3::new(0.2, 0.9, 0.1);
        let a = AngleWindow::derive(&transform, &envelope, &normal).expect("window");
        let b = AngleWindow::derive(&transform, &envelope, &normal).expect("window");
        assert_eq!(a.min_theta.to_bits(), b.min_theta.to_bits());
        assert_eq!(a.max_theta.to_bits(), b.max_theta.to_bits());
        assert!(a.min_theta <= a.max_theta);
    }

    #[test]
    fn degenerate_inputs_are_reported() {
        let zero = AngleWindow::derive(
            &Matrix4::identity(),
            &symmetric(0.0, 0.0, 0.0),
            &Vector3::zeros(),
        );
        assert_eq!(zero, Err(WindowError::DegenerateWirePlane));

        // Wire plane parallel to the image plane: no in-image line direction.
        let flat = AngleWindow::derive(
            &Matrix4::identity(),
            &symmetric(0.0, 0.0, 0.0),
            &Vector3::z(),
        );
        assert_eq!(flat, Err(WindowError::DegenerateLineDirection));
    }

    #[test]
    fn rotation_matrix_is_orthonormal() {
        let r = rotation_xyz(0.3, -0.2, 1.1);
        let r3 = r.fixed_view::<3, 3>(0, 0).into_owned();
        let should_be_identity = r3.transpose() * r3;
        assert_abs_diff_eq!(should_be_identity, nalgebra::Matrix3::identity(), epsilon = 1e-12);
    }
}
