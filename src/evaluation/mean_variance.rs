/// Streaming mean and variance.
///
/// Partial accumulators can be combined with [`merge`](Self::merge), which is
/// how per-cluster results are reduced. Merging in a fixed order gives
/// reproducible output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanVariance {
    n: f64,
    sum: f64,
    /// Sum of squared deviations from the mean.
    m2: f64,
}

impl MeanVariance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, value: f64) {
        if self.n <= 0.0 {
            self.n = 1.0;
            self.sum = value;
            self.m2 = 0.0;
            return;
        }
        let delta = value - self.sum / self.n;
        self.n += 1.0;
        self.sum += value;
        self.m2 += delta * (value - self.sum / self.n);
    }

    pub fn merge(&mut self, other: &MeanVariance) {
        if other.n <= 0.0 {
            return;
        }
        if self.n <= 0.0 {
            *self = *other;
            return;
        }
        let delta = other.sum / other.n - self.sum / self.n;
        let n = self.n + other.n;
        self.m2 += other.m2 + delta * delta * self.n * other.n / n;
        self.sum += other.sum;
        self.n = n;
    }

    pub fn count(&self) -> usize {
        self.n as usize
    }

    /// Mean of all values, NaN when empty.
    pub fn mean(&self) -> f64 {
        self.sum / self.n
    }

    /// Population variance (divides by `n`).
    pub fn naive_variance(&self) -> f64 {
        self.m2 / self.n
    }

    /// Unbiased variance (divides by `n - 1`).
    pub fn sample_variance(&self) -> f64 {
        self.m2 / (self.n - 1.0)
    }

    pub fn sample_stddev(&self) -> f64 {
        self.sample_variance().sqrt()
    }
}

impl FromIterator<f64> for MeanVariance {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut mv = MeanVariance::new();
        for value in iter {
            mv.put(value);
        }
        mv
    }
}
