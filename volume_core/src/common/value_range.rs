/// Inclusive range of integer sample values.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SampleRange {
    /// Lower bound
    pub min: i64,
    /// Upper bound
    pub max: i64,
}

impl SampleRange {
    /// Constructs new, empty range.
    /// Any extension replaces both bounds.
    pub fn empty() -> SampleRange {
        SampleRange {
            min: i64::MAX,
            max: i64::MIN,
        }
    }

    /// Constructs new range with one element, `val`.
    pub fn seed(val: i64) -> SampleRange {
        SampleRange { min: val, max: val }
    }

    /// Constructs minimal range, where all samples from an iterator
    /// are inside the range.
    pub fn from_samples(iter: impl IntoIterator<Item = i64>) -> SampleRange {
        let mut range = SampleRange::empty();
        for val in iter {
            range.extend(val);
        }
        range
    }

    /// Extend the range with new value.
    pub fn extend(&mut self, val: i64) {
        self.min = self.min.min(val);
        self.max = self.max.max(val);
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Check if value is inside the range.
    pub fn contains(&self, val: i64) -> bool {
        self.min <= val && val <= self.max
    }

    /// Distance between bounds, zero for empty ranges.
    pub fn width(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.max - self.min
        }
    }

    /// All samples share one value (or there are none).
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::empty()
    }
}
