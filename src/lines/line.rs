use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Candidate fiducial line built from a set of dot indices.
///
/// `points` is sorted ascending and identifies the line within its bucket.
/// Geometry fields are filled by [`fit_line`](super::fit_line) and never
/// change once the line has been inserted into a bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub points: Vec<usize>,
    pub origin: usize,
    pub endpoint: usize,
    /// Origin -> endpoint vector for 2-point lines, unit vector otherwise.
    pub direction: [f32; 2],
    pub intensity: f32,
    /// Distance from origin to endpoint in pixels.
    pub length: f32,
}

impl Line {
    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.points.binary_search(&index).is_ok()
    }

    /// Orientation of the fitted direction, `atan2(dy, dx)`.
    pub fn angle(&self) -> f32 {
        self.direction[1].atan2(self.direction[0])
    }

    /// Ordering on point sets used for deduplication within a bucket.
    pub fn canonical_cmp(&self, other: &Line) -> Ordering {
        self.points.cmp(&other.points)
    }

    /// Point set of this line with `index` added, kept sorted.
    pub(crate) fn points_with(&self, index: usize) -> Vec<usize> {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        let pos = points.partition_point(|&p| p < index);
        points.insert(pos, index);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: Vec<usize>) -> Line {
        Line {
            origin: points[0],
            endpoint: points[points.len() - 1],
            points,
            direction: [1.0, 0.0],
            intensity: 0.0,
            length: 0.0,
        }
    }

    #[test]
    fn points_with_keeps_sorted_order() {
        let l = line(vec![2, 7, 9]);
        assert_eq!(l.points_with(5), vec![2, 5, 7, 9]);
        assert_eq!(l.points_with(0), vec![0, 2, 7, 9]);
        assert_eq!(l.points_with(11), vec![2, 7, 9, 11]);
        assert!(l.contains(7));
        assert!(!l.contains(5));
    }

    #[test]
    fn canonical_order_is_lexicographic() {
        assert_eq!(
            line(vec![0, 3]).canonical_cmp(&line(vec![1, 2])),
            Ordering::Less
        );
        assert_eq!(
            line(vec![1, 4]).canonical_cmp(&line(vec![1, 2])),
            Ordering::Greater
        );
        assert_eq!(
            line(vec![1, 2]).canonical_cmp(&line(vec![1, 2])),
            Ordering::Equal
        );
    }
}
