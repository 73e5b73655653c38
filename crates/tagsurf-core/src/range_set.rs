//! An ordered set of non-overlapping ranges.

use crate::position::Range;

/// Ranges kept in ascending order, pairwise non-intersecting.
///
/// Inserting a range that intersects (or touches) existing entries merges them into their
/// union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range>,
}

impl RangeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `range`, merging with every entry it intersects.
    pub fn insert(&mut self, range: Range) {
        let Some(first) = self.ranges.iter().position(|r| r.intersects(&range)) else {
            let index = self.ranges.partition_point(|r| r.start() < range.start());
            self.ranges.insert(index, range);
            return;
        };

        let mut merged = self.ranges[first].union(&range);
        let mut last = first + 1;
        while last < self.ranges.len() && self.ranges[last].intersects(&merged) {
            merged = merged.union(&self.ranges[last]);
            last += 1;
        }
        self.ranges.splice(first..last, [merged]);
    }

    /// By-value [`RangeSet::insert`].
    pub fn with(mut self, range: Range) -> Self {
        self.insert(range);
        self
    }

    /// Entries in ascending order.
    pub fn as_slice(&self) -> &[Range] {
        &self.ranges
    }

    /// Iterate entries in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Consume the set, returning its entries.
    pub fn into_vec(self) -> Vec<Range> {
        self.ranges
    }
}

impl FromIterator<Range> for RangeSet {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        let mut set = RangeSet::new();
        for range in iter {
            set.insert(range);
        }
        set
    }
}

impl Extend<Range> for RangeSet {
    fn extend<I: IntoIterator<Item = Range>>(&mut self, iter: I) {
        for range in iter {
            self.insert(range);
        }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
