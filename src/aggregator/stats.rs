//! Per-key running statistics.
//!
//! A `StatRecord` keeps count, min, max and a running mean without storing
//! any of the observations it has seen. The mean is maintained with the
//! Welford recurrence `mean += (value - mean) / count`, so it never sums
//! the stream and stays accurate over billions of values.

/// Running statistics for a single key
///
/// **Public** - one per distinct key in an `AggregateTable`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRecord {
    count: u64,
    min: f64,
    max: f64,
    mean: f64,
}

impl StatRecord {
    /// Create a record from its first observation
    pub fn new(value: f64) -> Self {
        Self {
            count: 1,
            min: value,
            max: value,
            mean: value,
        }
    }

    /// Fold one more observation into the record
    ///
    /// The divisor is the post-increment count and the delta is taken
    /// against the pre-update mean. When the delta itself overflows
    /// (opposite-sign values near `f64::MAX`) both terms are divided first.
    pub fn fold(&mut self, value: f64) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        let n = self.count as f64;
        let delta = value - self.mean;
        let mean = if delta.is_finite() {
            self.mean + delta / n
        } else {
            self.mean + value / n - self.mean / n
        };
        self.mean = mean.clamp(self.min, self.max);
    }

    /// Number of observations folded into this record (always >= 1)
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }
}
