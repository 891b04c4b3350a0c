use std::path::PathBuf;
use thiserror::Error;

/// Reasons a pattern is rejected when the catalog is built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatternError {
    #[error("pattern '{name}' needs at least 2 wires, got {count}")]
    TooFewWires { name: String, count: usize },
    #[error("pattern '{name}' wire {index}: distance {value} mm is not a finite non-negative number")]
    InvalidDistance {
        name: String,
        index: usize,
        value: f64,
    },
    #[error("pattern '{name}' wire {index}: tolerance {value} mm is not a finite non-negative number")]
    InvalidTolerance {
        name: String,
        index: usize,
        value: f64,
    },
    #[error("pattern '{name}' wire {index}: distances must increase strictly along the pattern")]
    NonIncreasingDistance { name: String, index: usize },
    #[error("pattern '{name}': N-wire has {endpoints} endpoint pairs for {wires} wires")]
    EndpointCountMismatch {
        name: String,
        wires: usize,
        endpoints: usize,
    },
}

/// Failures of the automatic angle-window derivation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WindowError {
    #[error("wire plane normal is degenerate (first two N-wire wires are parallel or collapsed)")]
    DegenerateWirePlane,
    #[error("expected line direction is parallel to the image normal for every rotation")]
    DegenerateLineDirection,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config {} has no '{section}' section", path.display())]
    MissingSection { path: PathBuf, section: &'static str },
    #[error("invalid phantom definition: {0}")]
    Pattern(#[from] PatternError),
}
