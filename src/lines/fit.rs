//! Line geometry: origin, endpoint, direction, intensity and length.
//!
//! Every line first re-selects its origin and takes the farthest member as
//! endpoint. Two-point lines then use the exact segment as direction. Larger
//! lines take the direction from an orthogonal regression: the design matrix
//! `[1 x y]` is QR-factored and the right singular vector of the trailing 2×2
//! block of `R` with the smallest singular value is the line normal `(n1, n2)`.

use super::line::Line;
use crate::angle::segment_length;
use crate::types::Dot;
use log::debug;
use nalgebra::{DMatrix, Matrix2};

/// Fits the geometry of the line made of `points` (sorted, at least two).
///
/// `origin` is the current origin guess; it may be replaced by another member
/// (see [`reselect_origin`]).
pub fn fit_line(points: Vec<usize>, origin: usize, dots: &[Dot]) -> Line {
    debug_assert!(points.len() >= 2, "a line needs at least two points");
    let intensity = points.iter().map(|&i| dots[i].intensity).sum();
    let origin = reselect_origin(&points, origin, dots);
    let (endpoint, length) = farthest_from(&points, origin, dots);
    let (o, e) = (&dots[origin], &dots[endpoint]);

    let direction = if points.len() == 2 {
        [e.x - o.x, e.y - o.y]
    } else {
        orthogonal_regression_direction(&points, dots).unwrap_or_else(|| {
            debug!("fit_line: regression failed for {points:?}, using origin->endpoint");
            unit_direction(o, e)
        })
    };
    Line {
        points,
        origin,
        endpoint,
        direction,
        intensity,
        length,
    }
}

/// Picks the member with the most negative `Δx + Δy` relative to `origin`.
///
/// Only sums below zero displace the current origin. This is a signed
/// coordinate sum rather than a distance; lines whose members all lie at
/// non-negative sums keep their origin.
pub fn reselect_origin(points: &[usize], origin: usize, dots: &[Dot]) -> usize {
    let o = &dots[origin];
    let mut best = origin;
    let mut best_sum = 0.0f32;
    for &p in points {
        if p == origin {
            continue;
        }
        let sum = (dots[p].x - o.x) + (dots[p].y - o.y);
        if sum < best_sum {
            best_sum = sum;
            best = p;
        }
    }
    best
}

/// Member farthest from `origin` and its distance; ties keep the first member.
fn farthest_from(points: &[usize], origin: usize, dots: &[Dot]) -> (usize, f32) {
    let mut endpoint = origin;
    let mut max_len = -1.0f32;
    for &p in points {
        if p == origin {
            continue;
        }
        let len = segment_length(&dots[origin], &dots[p]);
        if len > max_len {
            max_len = len;
            endpoint = p;
        }
    }
    (endpoint, max_len)
}

/// Normalized `from -> to` vector; the raw difference when both coincide.
fn unit_direction(from: &Dot, to: &Dot) -> [f32; 2] {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let norm = dx.hypot(dy);
    if norm > 0.0 {
        [dx / norm, dy / norm]
    } else {
        [dx, dy]
    }
}

/// Total-least-squares direction of the points, in a canonical sense.
fn orthogonal_regression_direction(points: &[usize], dots: &[Dot]) -> Option<[f32; 2]> {
    let design = DMatrix::<f64>::from_fn(points.len(), 3, |r, c| {
        let d = &dots[points[r]];
        match c {
            0 => 1.0,
            1 => d.x as f64,
            _ => d.y as f64,
        }
    });
    let r = design.qr().r();
    if r.nrows() < 3 {
        return None;
    }
    let block = Matrix2::new(r[(1, 1)], r[(1, 2)], 0.0, r[(2, 2)]);
    let svd = block.svd(false, true);
    let v_t = svd.v_t?;
    let smallest = if svd.singular_values[0] < svd.singular_values[1] {
        0
    } else {
        1
    };
    let n1 = v_t[(smallest, 0)];
    let n2 = v_t[(smallest, 1)];
    if !n1.is_finite() || !n2.is_finite() {
        return None;
    }
    let direction = if n1 < 0.0 && -n2 < 0.0 {
        [n2, -n1]
    } else {
        [-n2, n1]
    };
    Some([direction[0] as f32, direction[1] as f32])
}
