//! Serializable per-frame diagnostics.
//!
//! `LineFinderReport` is returned by the report-producing entry points and
//! bundles the line buckets with a `SearchTrace`: input sizes, stage counters
//! and timings.

pub mod report;
pub mod stages;
pub mod timing;

pub use report::{InputDescriptor, LineFinderReport, SearchTrace};
pub use stages::{ExtensionStage, PairwiseStage};
pub use timing::{SearchStage, StageTiming, TimingBreakdown};
