//! Per-frame line search.
//!
//! [`find_lines`] is a pure function of the dots, the catalog and the
//! parameters. [`FidLineFinder`] owns the read-only configuration of a run
//! plus the frame size, and exposes single-frame and batch entry points.
//!
//! Typical usage:
//! ```no_run
//! use fid_line_finder::{AngleWindow, Dot, FidLineFinder, LineFinderParams};
//! use fid_line_finder::pattern::{Pattern, PatternCatalog, Wire};
//!
//! # fn example(dots: &[Dot]) -> Result<(), fid_line_finder::error::PatternError> {
//! let catalog = PatternCatalog::new(vec![Pattern::chain(
//!     "n1",
//!     vec![Wire::new(0.0, 2.0), Wire::new(10.0, 2.0), Wire::new(20.0, 2.0)],
//! )])?;
//! let params = LineFinderParams::new(0.2, 1.0, AngleWindow::from_degrees(-10.0, 10.0));
//! let finder = FidLineFinder::new(catalog, params);
//! let buckets = finder.find_lines(dots);
//! if let Some(best) = buckets.largest() {
//!     println!("{} candidate line(s)", best.len());
//! }
//! # Ok(())
//! # }
//! ```

use super::params::LineFinderParams;
use crate::diagnostics::{
    ExtensionStage, InputDescriptor, LineFinderReport, PairwiseStage, SearchStage, SearchTrace,
    TimingBreakdown,
};
use crate::lines::{extend_lines, find_pairwise_lines, LineBuckets};
use crate::pattern::PatternCatalog;
use crate::types::{Dot, FrameSize};
use log::{debug, error, warn};
use rayon::prelude::*;
use std::time::Instant;

/// Runs the full search on one frame: pairwise seeding, extension, ranking.
///
/// Fewer than two dots or an unusable spacing yield the two placeholder
/// buckets only.
pub fn find_lines(
    dots: &[Dot],
    catalog: &PatternCatalog,
    params: &LineFinderParams,
) -> LineBuckets {
    run_search(dots, catalog, params, None).buckets
}

/// Same as [`find_lines`], with stage counters and timings.
pub fn find_lines_with_report(
    dots: &[Dot],
    catalog: &PatternCatalog,
    params: &LineFinderParams,
) -> LineFinderReport {
    run_search(dots, catalog, params, None)
}

fn run_search(
    dots: &[Dot],
    catalog: &PatternCatalog,
    params: &LineFinderParams,
    frame_size: Option<FrameSize>,
) -> LineFinderReport {
    let total_start = Instant::now();
    let mut buckets = LineBuckets::new();
    let mut trace = SearchTrace {
        input: InputDescriptor {
            dot_count: dots.len(),
            pattern_count: catalog.len(),
            frame_size,
        },
        ..Default::default()
    };

    let skip_reason = if frame_size.is_some_and(|f| f.is_empty()) {
        Some("empty frame")
    } else if !params.has_valid_spacing() {
        error!(
            "find_lines: invalid spacing {} mm/px, no lines searched",
            params.spacing_mm_per_px
        );
        Some("invalid spacing")
    } else {
        None
    };
    if let Some(reason) = skip_reason {
        trace.skipped = Some(reason.to_string());
        trace.bucket_sizes = buckets.line_counts();
        trace.timings = TimingBreakdown::default().finish(total_start);
        return LineFinderReport { buckets, trace };
    }

    let mut timings = TimingBreakdown::default();

    let pairwise_start = Instant::now();
    let (pairs, pairwise_diag) = find_pairwise_lines(dots, catalog, params);
    let pairwise_ms = timings.record(SearchStage::Pairwise, pairwise_start);
    trace.pairwise = Some(PairwiseStage::from_diagnostics(&pairwise_diag, pairwise_ms));

    if let Some(pairs) = pairs {
        buckets.push(pairs);
        let extension_start = Instant::now();
        let extension_diag = extend_lines(&mut buckets, dots, catalog, params);
        let extension_ms = timings.record(SearchStage::Extension, extension_start);
        trace.extension = Some(ExtensionStage::from_diagnostics(
            &extension_diag,
            extension_ms,
        ));
    }
    buckets.rank_largest();

    trace.timings = timings.finish(total_start);
    trace.bucket_sizes = buckets.line_counts();
    debug!(
        "find_lines dots={} buckets={:?} total_ms={:.3}",
        dots.len(),
        trace.bucket_sizes,
        trace.timings.total_ms
    );
    LineFinderReport { buckets, trace }
}

/// Line finder bound to one pattern catalog and parameter set.
///
/// Configuration is read-only during a search, so one instance can serve
/// several frames concurrently through [`find_lines_batch`](Self::find_lines_batch).
#[derive(Clone, Debug)]
pub struct FidLineFinder {
    catalog: PatternCatalog,
    params: LineFinderParams,
    frame_size: Option<FrameSize>,
}

impl FidLineFinder {
    /// Create a finder with the supplied catalog and parameters.
    pub fn new(catalog: PatternCatalog, params: LineFinderParams) -> Self {
        if params.angle_window.is_unset() {
            warn!("FidLineFinder: angle window is unset, orientation gating is unreliable");
        }
        if catalog.is_empty() {
            warn!("FidLineFinder: pattern catalog is empty, no lines will be found");
        }
        Self {
            catalog,
            params,
            frame_size: None,
        }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn params(&self) -> &LineFinderParams {
        &self.params
    }

    pub fn frame_size(&self) -> Option<FrameSize> {
        self.frame_size
    }

    /// Update the frame dimensions; negative values are rejected and ignored.
    pub fn set_frame_size(&mut self, size: [i32; 2]) {
        match FrameSize::from_signed(size[0], size[1]) {
            Some(frame) => self.frame_size = Some(frame),
            None => error!(
                "FidLineFinder::set_frame_size: dimensions must be non-negative, got {}x{}",
                size[0], size[1]
            ),
        }
    }

    pub fn find_lines(&self, dots: &[Dot]) -> LineBuckets {
        self.find_lines_with_report(dots).buckets
    }

    pub fn find_lines_with_report(&self, dots: &[Dot]) -> LineFinderReport {
        run_search(dots, &self.catalog, &self.params, self.frame_size)
    }

    /// Processes independent frames in parallel; output order follows input.
    pub fn find_lines_batch<D>(&self, frames: &[D]) -> Vec<LineBuckets>
    where
        D: AsRef<[Dot]> + Sync,
    {
        frames
            .par_iter()
            .map(|dots| self.find_lines(dots.as_ref()))
            .collect()
    }

    /// Parallel batch variant of [`find_lines_with_report`](Self::find_lines_with_report).
    pub fn find_lines_batch_with_report<D>(&self, frames: &[D]) -> Vec<LineFinderReport>
    where
        D: AsRef<[Dot]> + Sync,
    {
        frames
            .par_iter()
            .map(|dots| self.find_lines_with_report(dots.as_ref()))
            .collect()
    }
}
