use crate::lines::{ExtensionDiagnostics, PairwiseDiagnostics};
use serde::{Deserialize, Serialize};

/// Report of the pairwise seeding stage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseStage {
    pub elapsed_ms: f64,
    pub patterns: usize,
    pub pairs_examined: usize,
    pub rejected_length: usize,
    pub rejected_angle: usize,
    pub duplicates: usize,
    pub accepted: usize,
}

impl PairwiseStage {
    pub fn from_diagnostics(diag: &PairwiseDiagnostics, elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            patterns: diag.patterns,
            pairs_examined: diag.pairs_examined,
            rejected_length: diag.rejected_length,
            rejected_angle: diag.rejected_angle,
            duplicates: diag.duplicates,
            accepted: diag.accepted,
        }
    }
}

/// Report of the extension stage, summed over all patterns and sizes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionStage {
    pub elapsed_ms: f64,
    pub candidates: usize,
    pub rejected_collinearity: usize,
    pub rejected_length: usize,
    pub rejected_backward: usize,
    pub duplicates: usize,
    pub rejected_angle: usize,
    pub accepted: usize,
}

impl ExtensionStage {
    pub fn from_diagnostics(diag: &ExtensionDiagnostics, elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            candidates: diag.candidates,
            rejected_collinearity: diag.rejected_collinearity,
            rejected_length: diag.rejected_length,
            rejected_backward: diag.rejected_backward,
            duplicates: diag.duplicates,
            rejected_angle: diag.rejected_angle,
            accepted: diag.accepted,
        }
    }
}
