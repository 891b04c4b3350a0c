//! Seed lines: every dot pair whose separation matches a full pattern length.
//!
//! For each pattern the expected pixel length and tolerance come from the last
//! wire, rounded to whole pixels. A pair is kept when its length is strictly
//! within tolerance of that value and its slope passes the angle window. Pairs
//! are shared across patterns; a pair accepted by several patterns appears
//! once.

use super::buckets::LineBucket;
use super::fit::fit_line;
use crate::angle::{segment_length, slope_angle};
use crate::detector::params::LineFinderParams;
use crate::pattern::PatternCatalog;
use crate::types::Dot;
use log::debug;

/// Counters emitted by the pairwise stage.
#[derive(Clone, Debug, Default)]
pub struct PairwiseDiagnostics {
    pub patterns: usize,
    pub pairs_examined: usize,
    pub rejected_length: usize,
    pub rejected_angle: usize,
    pub duplicates: usize,
    pub accepted: usize,
}

/// Builds the size-2 bucket, ranked by descending intensity.
///
/// Returns `None` with fewer than two dots; no size-2 bucket exists then.
pub fn find_pairwise_lines(
    dots: &[Dot],
    catalog: &PatternCatalog,
    params: &LineFinderParams,
) -> (Option<LineBucket>, PairwiseDiagnostics) {
    let mut diag = PairwiseDiagnostics {
        patterns: catalog.len(),
        ..Default::default()
    };
    if dots.len() < 2 {
        return (None, diag);
    }

    let mut bucket = LineBucket::new();
    for pattern in catalog.iter() {
        let gate = pattern.full_length_gate(params.spacing_mm_per_px);
        for b1 in 0..dots.len() - 1 {
            for b2 in b1 + 1..dots.len() {
                diag.pairs_examined += 1;
                let (d1, d2) = (&dots[b1], &dots[b2]);
                if !gate.accepts(segment_length(d1, d2)) {
                    diag.rejected_length += 1;
                    continue;
                }
                if !params.angle_window.accepts(slope_angle(d1, d2) as f64) {
                    diag.rejected_angle += 1;
                    continue;
                }
                let points = vec![b1, b2];
                if bucket.contains(&points) {
                    diag.duplicates += 1;
                    continue;
                }
                bucket.insert(fit_line(points, b1, dots));
                diag.accepted += 1;
            }
        }
    }
    bucket.rank_by_intensity();
    debug!(
        "find_pairwise_lines dots={} pairs={} accepted={} length_rejects={} angle_rejects={}",
        dots.len(),
        diag.pairs_examined,
        diag.accepted,
        diag.rejected_length,
        diag.rejected_angle
    );
    (Some(bucket), diag)
}
