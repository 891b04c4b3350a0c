//! Line hypotheses built from segmented dots.
//!
//! Lines are grown bottom-up: [`find_pairwise_lines`] seeds the size-2 bucket
//! with dot pairs spanning a full pattern, then [`extend_lines`] adds one dot
//! per step until each pattern's wire count is reached. [`fit_line`] computes
//! the geometry of every candidate. Results are kept in [`LineBuckets`], where
//! bucket `k` holds lines of exactly `k` points.

mod buckets;
mod extend;
mod fit;
mod line;
mod pairwise;

pub use buckets::{BucketOrder, LineBucket, LineBuckets};
pub use extend::{extend_lines, ExtensionDiagnostics};
pub use fit::{fit_line, reselect_origin};
pub use line::Line;
pub use pairwise::{find_pairwise_lines, PairwiseDiagnostics};
