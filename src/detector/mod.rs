//! Fiducial line finder for N-wire phantom calibration.
//!
//! Overview
//! - Dots segmented from an ultrasound frame are combined into candidate
//!   lines whose point spacing matches a wire pattern of the phantom.
//! - Dot pairs spanning a full pattern seed the search; lines then grow one
//!   dot at a time while the new dot stays collinear, sits at the next wire
//!   distance, and the refitted orientation stays inside the angle window.
//! - The bucket of the longest lines found is ranked by intensity.
//!
//! Modules
//! - [`params`] – per-run parameters shared by all stages.
//! - `finder` – the stateless [`find_lines`] and the [`FidLineFinder`] wrapper.
//!
//! Key Ideas
//! - Lines are undirected; the angle window accepts an orientation when
//!   either sense falls inside it.
//! - Bucket `k` holds lines of exactly `k` points; indices 0 and 1 are empty
//!   placeholders.

mod finder;
pub mod params;

pub use finder::{find_lines, find_lines_with_report, FidLineFinder};
pub use params::{LineFinderParams, UNSET_PARAMETER};
