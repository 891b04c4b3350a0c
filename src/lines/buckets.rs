use super::line::Line;
use serde::Serialize;

/// Order currently held by a [`LineBucket`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketOrder {
    /// Lexicographic on point sets; required for deduplicated insertion.
    #[default]
    Canonical,
    /// Descending intensity, ties in canonical order.
    Intensity,
}

/// Lines that share the same number of points.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineBucket {
    lines: Vec<Line>,
    #[serde(skip)]
    order: BucketOrder,
}

impl LineBucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn order(&self) -> BucketOrder {
        self.order
    }

    /// Whether a line with exactly this (sorted) point set is present.
    pub fn contains(&self, points: &[usize]) -> bool {
        match self.order {
            BucketOrder::Canonical => self.position_of(points).is_ok(),
            BucketOrder::Intensity => self.lines.iter().any(|l| l.points == points),
        }
    }

    /// Inserts `line` at its canonical position.
    ///
    /// Returns `false` and drops the line when its point set is already
    /// present. A bucket ranked by intensity is restored to canonical order
    /// first.
    pub fn insert(&mut self, line: Line) -> bool {
        if self.order != BucketOrder::Canonical {
            self.lines.sort_by(Line::canonical_cmp);
            self.order = BucketOrder::Canonical;
        }
        match self.position_of(&line.points) {
            Ok(_) => false,
            Err(pos) => {
                self.lines.insert(pos, line);
                true
            }
        }
    }

    /// Stable sort by descending intensity.
    pub fn rank_by_intensity(&mut self) {
        self.lines.sort_by(|a, b| b.intensity.total_cmp(&a.intensity));
        self.order = BucketOrder::Intensity;
    }

    fn position_of(&self, points: &[usize]) -> Result<usize, usize> {
        self.lines.binary_search_by(|l| l.points.as_slice().cmp(points))
    }
}

/// Buckets indexed by line size.
///
/// Indices 0 and 1 are always present and always empty so that bucket `k`
/// holds lines of exactly `k` points. The last bucket holds the longest lines
/// found and is ranked by intensity once a search completes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineBuckets {
    buckets: Vec<LineBucket>,
}

impl Default for LineBuckets {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuckets {
    /// Number of leading placeholder buckets.
    pub const RESERVED: usize = 2;

    pub fn new() -> Self {
        Self {
            buckets: vec![LineBucket::new(), LineBucket::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Always false: the placeholders are never removed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, size: usize) -> Option<&LineBucket> {
        self.buckets.get(size)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineBucket> {
        self.buckets.iter()
    }

    /// Bucket of the longest lines, or `None` when only placeholders exist.
    pub fn largest(&self) -> Option<&LineBucket> {
        if self.buckets.len() > Self::RESERVED {
            self.buckets.last()
        } else {
            None
        }
    }

    /// Number of lines per bucket, placeholders included.
    pub fn line_counts(&self) -> Vec<usize> {
        self.buckets.iter().map(LineBucket::len).collect()
    }

    pub fn total_lines(&self) -> usize {
        self.buckets.iter().map(LineBucket::len).sum()
    }

    /// Drops everything except the two placeholders.
    pub fn clear(&mut self) {
        self.buckets.truncate(Self::RESERVED);
        for bucket in &mut self.buckets {
            bucket.lines.clear();
            bucket.order = BucketOrder::Canonical;
        }
    }

    pub(crate) fn push(&mut self, bucket: LineBucket) {
        self.buckets.push(bucket);
    }

    /// Makes sure bucket `size` exists, appending empty buckets as needed.
    pub(crate) fn ensure(&mut self, size: usize) {
        while self.buckets.len() <= size {
            self.buckets.push(LineBucket::new());
        }
    }

    /// Source bucket `size - 1` and target bucket `size`, both existing.
    pub(crate) fn source_and_target(&mut self, size: usize) -> (&LineBucket, &mut LineBucket) {
        debug_assert!(size >= 1 && size < self.buckets.len());
        let (head, tail) = self.buckets.split_at_mut(size);
        (&head[size - 1], &mut tail[0])
    }

    /// Removes trailing empty buckets above the placeholders.
    pub(crate) fn discard_trailing_empty(&mut self) {
        while self.buckets.len() > Self::RESERVED
            && self.buckets.last().is_some_and(LineBucket::is_empty)
        {
            self.buckets.pop();
        }
    }

    pub(crate) fn rank_largest(&mut self) {
        if self.buckets.len() > Self::RESERVED {
            if let Some(last) = self.buckets.last_mut() {
                last.rank_by_intensity();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: Vec<usize>, intensity: f32) -> Line {
        Line {
            origin: points[0],
            endpoint: points[points.len() - 1],
            points,
            direction: [1.0, 0.0],
            intensity,
            length: 1.0,
        }
    }

    #[test]
    fn insert_keeps_canonical_order_and_rejects_duplicates() {
        let mut bucket = LineBucket::new();
        assert!(bucket.insert(line(vec![2, 5], 1.0)));
        assert!(bucket.insert(line(vec![0, 9], 1.0)));
        assert!(bucket.insert(line(vec![2, 3], 1.0)));
        assert!(!bucket.insert(line(vec![2, 5], 7.0)));
        let sets: Vec<_> = bucket.iter().map(|l| l.points.clone()).collect();
        assert_eq!(sets, vec![vec![0, 9], vec![2, 3], vec![2, 5]]);
        assert!(bucket.contains(&[2, 3]));
        assert!(!bucket.contains(&[3, 4]));
        // The duplicate did not overwrite the stored line.
        assert_eq!(bucket.lines()[2].intensity, 1.0);
    }

    #[test]
    fn ranking_is_stable_for_equal_intensity() {
        let mut bucket = LineBucket::new();
        bucket.insert(line(vec![3, 4], 5.0));
        bucket.insert(line(vec![0, 1], 5.0));
        bucket.insert(line(vec![1, 2], 9.0));
        bucket.rank_by_intensity();
        let sets: Vec<_> = bucket.iter().map(|l| l.points.clone()).collect();
        assert_eq!(sets, vec![vec![1, 2], vec![0, 1], vec![3, 4]]);
        assert_eq!(bucket.order(), BucketOrder::Intensity);
        assert!(bucket.contains(&[3, 4]));

        // Insertion after ranking goes back to canonical order.
        assert!(bucket.insert(line(vec![0, 5], 1.0)));
        assert_eq!(bucket.order(), BucketOrder::Canonical);
        assert_eq!(bucket.lines()[0].points, vec![0, 1]);
    }

    #[test]
    fn placeholders_survive_trimming() {
        let mut buckets = LineBuckets::new();
        assert_eq!(buckets.len(), 2);
        assert!(buckets.largest().is_none());
        buckets.ensure(4);
        assert_eq!(buckets.len(), 5);
        buckets.discard_trailing_empty();
        assert_eq!(buckets.len(), 2);

        buckets.ensure(3);
        {
            let (_, target) = buckets.source_and_target(3);
            target.insert(line(vec![0, 1, 2], 1.0));
        }
        buckets.ensure(4);
        buckets.discard_trailing_empty();
        assert_eq!(buckets.line_counts(), vec![0, 0, 0, 1]);
        assert_eq!(buckets.largest().map(LineBucket::len), Some(1));

        buckets.clear();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.total_lines(), 0);
    }
}
