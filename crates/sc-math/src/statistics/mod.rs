//! Basic statistics accumulator.

use sc_core::{Real, Size};

/// Incremental statistics accumulator.
///
/// Uses Welford's update so that the variance does not suffer from the
/// cancellation of a naive sum-of-squares.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    count: Size,
    sum: Real,
    mean: Real,
    m2: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum += x;
        let delta = x - self.mean;
        self.mean += delta / self.count as Real;
        self.m2 += delta * (x - self.mean);
    }

    /// Number of samples.
    pub fn samples(&self) -> Size {
        self.count
    }

    /// Sum of the samples (`0` when empty).
    pub fn sum(&self) -> Real {
        self.sum
    }

    /// Arithmetic mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }

    /// Population variance (divides by `n`).  Returns `None` when empty.
    pub fn population_variance(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as Real)
        }
    }

    /// Sample variance (Bessel-corrected, divides by `n - 1`).  Returns
    /// `None` for fewer than 2 samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            None
        } else {
            Some(self.m2 / (self.count as Real - 1.0))
        }
    }

    /// Population standard deviation.
    pub fn population_std_dev(&self) -> Option<Real> {
        self.population_variance().map(Real::sqrt)
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<Real> for Statistics {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
