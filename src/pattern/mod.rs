//! Declarative description of the phantom's fiducial patterns.
//!
//! A pattern is an ordered list of wires, each carrying its distance from the
//! pattern origin (the first wire) and a tolerance, both in millimetres. The
//! line builders convert those into pixel gates with the approximate spacing:
//!
//! - the pairwise stage checks a candidate pair against the full pattern
//!   length (the last wire's distance);
//! - the extension stage, when growing a line to `k` points, checks the new
//!   point's distance from the origin against wire `k − 2`.
//!
//! N-wire patterns additionally carry the 3D wire endpoints in the phantom
//! frame. Only those expose a wire-plane normal, which the angle-window
//! derivation needs (see `crate::window`).

mod catalog;
mod wire;

pub use catalog::{Pattern, PatternCatalog, PatternShape};
pub use wire::{LengthGate, Wire, WireEndpoints};
