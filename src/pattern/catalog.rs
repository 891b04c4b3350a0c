use super::wire::{LengthGate, Wire, WireEndpoints};
use crate::error::PatternError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Geometry kind of a pattern.
///
/// Only the N-wire variant carries physical wire endpoints and therefore a
/// wire-plane normal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternShape {
    /// Plain chain of collinear wires described by distances only.
    #[default]
    Chain,
    /// N-shaped wire arrangement; one endpoint pair per wire.
    NWire { endpoints: Vec<WireEndpoints> },
}

/// Named, ordered sequence of wires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub wires: Vec<Wire>,
    #[serde(default)]
    pub shape: PatternShape,
}

impl Pattern {
    pub fn chain(name: impl Into<String>, wires: Vec<Wire>) -> Self {
        Self {
            name: name.into(),
            wires,
            shape: PatternShape::Chain,
        }
    }

    pub fn n_wire(
        name: impl Into<String>,
        wires: Vec<Wire>,
        endpoints: Vec<WireEndpoints>,
    ) -> Self {
        Self {
            name: name.into(),
            wires,
            shape: PatternShape::NWire { endpoints },
        }
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        if self.wires.len() < 2 {
            return Err(PatternError::TooFewWires {
                name: self.name.clone(),
                count: self.wires.len(),
            });
        }
        for (index, wire) in self.wires.iter().enumerate() {
            let d = wire.distance_to_origin_mm;
            if !d.is_finite() || d < 0.0 {
                return Err(PatternError::InvalidDistance {
                    name: self.name.clone(),
                    index,
                    value: d,
                });
            }
            let t = wire.tolerance_mm;
            if !t.is_finite() || t < 0.0 {
                return Err(PatternError::InvalidTolerance {
                    name: self.name.clone(),
                    index,
                    value: t,
                });
            }
        }
        if let Some(index) = self
            .wires
            .windows(2)
            .position(|pair| pair[1].distance_to_origin_mm <= pair[0].distance_to_origin_mm)
        {
            return Err(PatternError::NonIncreasingDistance {
                name: self.name.clone(),
                index: index + 1,
            });
        }
        if let PatternShape::NWire { endpoints } = &self.shape {
            if endpoints.len() != self.wires.len() {
                return Err(PatternError::EndpointCountMismatch {
                    name: self.name.clone(),
                    wires: self.wires.len(),
                    endpoints: endpoints.len(),
                });
            }
        }
        Ok(())
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Distance from the origin wire to the last wire (millimetres).
    pub fn total_distance_mm(&self) -> f64 {
        self.wires
            .last()
            .map(|w| w.distance_to_origin_mm)
            .unwrap_or(0.0)
    }

    pub fn total_tolerance_mm(&self) -> f64 {
        self.wires.last().map(|w| w.tolerance_mm).unwrap_or(0.0)
    }

    /// Pixel gate for wire `position`, i.e. the gate used when a line grows
    /// to `position + 2` points.
    pub fn length_gate(&self, position: usize, spacing_mm_per_px: f64) -> Option<LengthGate> {
        self.wires.get(position).map(|w| {
            LengthGate::from_mm(w.distance_to_origin_mm, w.tolerance_mm, spacing_mm_per_px)
        })
    }

    /// Pixel gate for the full pattern length.
    pub fn full_length_gate(&self, spacing_mm_per_px: f64) -> LengthGate {
        LengthGate::from_mm(
            self.total_distance_mm(),
            self.total_tolerance_mm(),
            spacing_mm_per_px,
        )
    }

    pub fn is_n_wire(&self) -> bool {
        matches!(self.shape, PatternShape::NWire { .. })
    }

    /// Normal of the plane spanned by the first two wires (phantom frame).
    ///
    /// Cross product of `front0→back0` and `front0→front1`; `None` for chain
    /// patterns.
    pub fn wire_plane_normal(&self) -> Option<Vector3<f64>> {
        let PatternShape::NWire { endpoints } = &self.shape else {
            return None;
        };
        let first = endpoints.first()?;
        let second = endpoints.get(1)?;
        let a = first.front();
        let ab = first.back() - a;
        let ac = second.front() - a;
        Some(ab.cross(&ac))
    }
}

/// Validated, read-only set of patterns used for one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, PatternError> {
        for pattern in &patterns {
            pattern.validate()?;
        }
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn nwire_patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().filter(|p| p.is_n_wire())
    }

    /// Wire-plane normal of the first N-wire pattern, if any.
    pub fn first_wire_plane_normal(&self) -> Option<Vector3<f64>> {
        self.nwire_patterns().find_map(Pattern::wire_plane_normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wires(distances: &[f64]) -> Vec<Wire> {
        distances.iter().map(|&d| Wire::new(d, 2.0)).collect()
    }

    fn endpoints(front: [f64; 3], back: [f64; 3]) -> WireEndpoints {
        WireEndpoints { front, back }
    }

    #[test]
    fn single_wire_pattern_is_rejected() {
        let err = PatternCatalog::new(vec![Pattern::chain("short", wires(&[0.0]))])
            .expect_err("one wire must be rejected");
        assert_eq!(
            err,
            PatternError::TooFewWires {
                name: "short".into(),
                count: 1
            }
        );
    }

    #[test]
    fn non_increasing_distances_are_rejected() {
        let err = Pattern::chain("bad", wires(&[0.0, 10.0, 10.0]))
            .validate()
            .expect_err("repeated distance");
        assert_eq!(
            err,
            PatternError::NonIncreasingDistance {
                name: "bad".into(),
                index: 2
            }
        );
    }

    #[test]
    fn n_wire_endpoint_count_must_match() {
        let p = Pattern::n_wire(
            "n",
            wires(&[0.0, 10.0, 20.0]),
            vec![endpoints([0.0; 3], [0.0, 0.0, 1.0])],
        );
        assert!(matches!(
            p.validate(),
            Err(PatternError::EndpointCountMismatch { wires: 3, endpoints: 1, .. })
        ));
    }

    #[test]
    fn gates_follow_wire_table() {
        let p = Pattern::chain("chain", wires(&[0.0, 10.0, 20.0]));
        let full = p.full_length_gate(0.5);
        assert_eq!(full.expected_px, 40.0);
        assert_eq!(full.tolerance_px, 4.0);
        let mid = p.length_gate(1, 0.5).expect("wire 1 exists");
        assert_eq!(mid.expected_px, 20.0);
        assert!(p.length_gate(3, 0.5).is_none());
    }

    #[test]
    fn wire_plane_normal_only_for_n_wire() {
        let chain = Pattern::chain("chain", wires(&[0.0, 10.0, 20.0]));
        assert!(chain.wire_plane_normal().is_none());

        let n = Pattern::n_wire(
            "n",
            wires(&[0.0, 10.0, 20.0]),
            vec![
                endpoints([0.0, 0.0, 0.0], [0.0, 0.0, 10.0]),
                endpoints([10.0, 0.0, 0.0], [10.0, 0.0, 10.0]),
                endpoints([20.0, 0.0, 0.0], [20.0, 0.0, 10.0]),
            ],
        );
        let normal = n.wire_plane_normal().expect("n-wire normal");
        // (0,0,10) x (10,0,0) = (0,100,0)
        assert_eq!(normal, Vector3::new(0.0, 100.0, 0.0));

        let catalog = PatternCatalog::new(vec![chain, n]).expect("valid catalog");
        assert_eq!(catalog.nwire_patterns().count(), 1);
        assert_eq!(catalog.first_wire_plane_normal(), Some(normal));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn shape_defaults_to_chain_when_absent() {
        let json = r#"{"name":"p","wires":[
            {"distance_to_origin_mm":0.0,"tolerance_mm":1.0},
            {"distance_to_origin_mm":5.0,"tolerance_mm":1.0}]}"#;
        let p: Pattern = serde_json::from_str(json).expect("parse pattern");
        assert_eq!(p.shape, PatternShape::Chain);
        assert!(p.validate().is_ok());
    }
}
