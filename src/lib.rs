#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod pattern;
pub mod types;
pub mod window;

// Building blocks of the search; public for tools and tests.
pub mod angle;
pub mod lines;

// --- High-level re-exports -------------------------------------------------

// Main entry points: finder + parameters.
pub use crate::detector::{find_lines, find_lines_with_report, FidLineFinder, LineFinderParams};
pub use crate::types::{Dot, FrameSize};
pub use crate::window::AngleWindow;

// Results and diagnostics returned by the finder.
pub use crate::diagnostics::{LineFinderReport, SearchTrace};
pub use crate::lines::{Line, LineBucket, LineBuckets};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use fid_line_finder::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = PatternCatalog::new(vec![Pattern::chain(
///     "n1",
///     vec![Wire::new(0.0, 2.0), Wire::new(10.0, 2.0), Wire::new(20.0, 2.0)],
/// )])?;
/// let finder = FidLineFinder::new(
///     catalog,
///     LineFinderParams::new(1.0, 1.0, AngleWindow::new(-0.1, 0.1)),
/// );
/// let dots = [
///     Dot::new(0.0, 0.0, 10.0),
///     Dot::new(10.0, 0.0, 8.0),
///     Dot::new(20.0, 0.0, 9.0),
/// ];
/// let report = finder.find_lines_with_report(&dots);
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::pattern::{Pattern, PatternCatalog, Wire};
    pub use crate::{AngleWindow, Dot, FidLineFinder, LineBuckets, LineFinderParams};
}
