//! Planar geometry helpers shared by the line builders.
//!
//! Orientation angles follow `atan2(dy, dx)` and live in (−π, π]. Lines are
//! undirected, so `a` and `a ± π` describe the same orientation; the angle
//! window handles that equivalence explicitly (see `crate::window`).

use crate::types::Dot;
use std::f64::consts::PI;

/// Orientation of the vector from `from` to `to`, in radians.
#[inline]
pub fn slope_angle(from: &Dot, to: &Dot) -> f32 {
    let dy = to.y - from.y;
    let dx = to.x - from.x;
    dy.atan2(dx)
}

/// Euclidean distance between two dots in pixels.
#[inline]
pub fn segment_length(a: &Dot, b: &Dot) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Wraps an angle into the half-open range (−π, π].
#[inline]
pub fn wrap_to_pi(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Falls back to the distance between `p` and `a` when the line is degenerate.
#[inline]
pub fn distance_to_line(p: &Dot, a: &Dot, b: &Dot) -> f32 {
    let ux = b.x - a.x;
    let uy = b.y - a.y;
    let len = (ux * ux + uy * uy).sqrt();
    if len <= f32::EPSILON {
        return segment_length(a, p);
    }
    let cross = ux * (p.y - a.y) - uy * (p.x - a.x);
    cross.abs() / len
}
