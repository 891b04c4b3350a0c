use crate::diagnostics::{ExtensionStage, PairwiseStage, TimingBreakdown};
use crate::lines::LineBuckets;
use crate::types::FrameSize;
use serde::Serialize;

/// Result produced by [`FidLineFinder::find_lines_with_report`](crate::FidLineFinder).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineFinderReport {
    pub buckets: LineBuckets,
    pub trace: SearchTrace,
}

impl LineFinderReport {
    /// One-line summary for logs and demo output.
    pub fn summary(&self) -> String {
        let largest = self
            .buckets
            .largest()
            .map(|b| format!("{} line(s) of {} points", b.len(), self.buckets.len() - 1))
            .unwrap_or_else(|| "no lines".to_string());
        format!(
            "dots={} patterns={} largest: {} total_ms={:.3}",
            self.trace.input.dot_count,
            self.trace.input.pattern_count,
            largest,
            self.trace.timings.total_ms
        )
    }
}

/// Trace of one line search.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairwise: Option<PairwiseStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<ExtensionStage>,
    /// Lines per bucket, placeholders included.
    pub bucket_sizes: Vec<usize>,
    /// Set when the search returned early without looking for lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub dot_count: usize,
    pub pattern_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_size: Option<FrameSize>,
}
