use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Stages of a line search that are timed separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchStage {
    Pairwise,
    Extension,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: SearchStage,
    pub elapsed_ms: f64,
}

/// Wall-clock cost of one frame: the whole search and each stage that ran.
///
/// Skipped frames carry only a total; a frame with fewer than two dots has no
/// extension entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Records `stage` as having run since `start`; returns its duration.
    pub fn record(&mut self, stage: SearchStage, start: Instant) -> f64 {
        let elapsed_ms = millis_since(start);
        self.stages.push(StageTiming { stage, elapsed_ms });
        elapsed_ms
    }

    /// Closes the breakdown with the time elapsed since the search began.
    pub fn finish(mut self, search_start: Instant) -> Self {
        self.total_ms = millis_since(search_start);
        self
    }

    pub fn stage_ms(&self, stage: SearchStage) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.elapsed_ms)
    }
}

fn millis_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}
