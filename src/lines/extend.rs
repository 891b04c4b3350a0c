//! Grows lines one dot at a time, pattern by pattern.
//!
//! A line of `k - 1` points gains dot `d` when `d` lies within the collinear
//! tolerance of the infinite line through origin and endpoint, its distance
//! from the origin matches wire `k - 2`, and it sits on the endpoint side of
//! the origin. The grown line is refitted and must still pass the angle window.

use super::buckets::LineBuckets;
use super::fit::fit_line;
use crate::angle::{distance_to_line, segment_length};
use crate::detector::params::LineFinderParams;
use crate::pattern::PatternCatalog;
use crate::types::Dot;
use log::debug;

/// Counters emitted by the extension stage.
#[derive(Clone, Debug, Default)]
pub struct ExtensionDiagnostics {
    pub candidates: usize,
    pub rejected_collinearity: usize,
    pub rejected_length: usize,
    pub rejected_backward: usize,
    pub duplicates: usize,
    pub rejected_angle: usize,
    pub accepted: usize,
}

/// Extends the lines held in `buckets` up to each pattern's wire count.
///
/// Bucket `k` is only searched when bucket `k - 1` exists. Trailing empty
/// buckets are dropped afterwards; the two placeholders always remain.
pub fn extend_lines(
    buckets: &mut LineBuckets,
    dots: &[Dot],
    catalog: &PatternCatalog,
    params: &LineFinderParams,
) -> ExtensionDiagnostics {
    let mut diag = ExtensionDiagnostics::default();
    let collinear_px = params.collinear_tolerance_px();

    for pattern in catalog.iter() {
        for size in 3..=pattern.wire_count() {
            if buckets.len() < size {
                continue;
            }
            let Some(gate) = pattern.length_gate(size - 2, params.spacing_mm_per_px) else {
                continue;
            };
            buckets.ensure(size);
            let (shorter, target) = buckets.source_and_target(size);
            for line in shorter.iter() {
                let origin = &dots[line.origin];
                let end = &dots[line.endpoint];
                let (ex, ey) = ((end.x - origin.x) as f64, (end.y - origin.y) as f64);
                for (index, dot) in dots.iter().enumerate() {
                    if line.contains(index) {
                        continue;
                    }
                    diag.candidates += 1;
                    if distance_to_line(dot, origin, end) > collinear_px {
                        diag.rejected_collinearity += 1;
                        continue;
                    }
                    if !gate.accepts(segment_length(origin, dot)) {
                        diag.rejected_length += 1;
                        continue;
                    }
                    let forward =
                        ex * (dot.x - origin.x) as f64 + ey * (dot.y - origin.y) as f64;
                    if forward < 0.0 {
                        diag.rejected_backward += 1;
                        continue;
                    }
                    let points = line.points_with(index);
                    if target.contains(&points) {
                        diag.duplicates += 1;
                        continue;
                    }
                    let grown = fit_line(points, line.origin, dots);
                    if !params.angle_window.accepts(grown.angle() as f64) {
                        diag.rejected_angle += 1;
                        continue;
                    }
                    target.insert(grown);
                    diag.accepted += 1;
                }
            }
            debug!(
                "extend_lines pattern={} size={} lines={}",
                pattern.name,
                size,
                target.len()
            );
        }
    }
    buckets.discard_trailing_empty();
    diag
}
