//! Running statistics for one numeric column.

/// O(1)-memory accumulator for count, mean, standard deviation, min and max.
///
/// `min`/`max` start at the infinities so the first `add` always wins; an
/// accumulator that never saw a value surfaces NaN for everything but the
/// count.
#[derive(Clone, Debug)]
pub struct NumericAccumulator {
    count: u64,
    sum: f64,
    sum_sq: f64,
    min: f64,
    max: f64,
}

impl Default for NumericAccumulator {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl NumericAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one observation into the running state.
    pub fn add(&mut self, x: f64) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }

    /// Sample standard deviation (Bessel's correction).
    ///
    /// Undefined for fewer than two observations. The one-pass
    /// sum-of-squares formulation can go fractionally negative through
    /// cancellation when all values are equal; the clamp keeps the constant
    /// case at exactly zero.
    pub fn stdev(&self) -> f64 {
        if self.count < 2 {
            return f64::NAN;
        }
        let n = self.count as f64;
        let var = (self.sum_sq - self.sum * self.sum / n) / (n - 1.0);
        var.max(0.0).sqrt()
    }

    pub fn min(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.min }
    }

    pub fn max(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.max }
    }

    /// Combines two accumulators built from disjoint inputs.
    ///
    /// Streaming `S1 ++ S2` and merging `acc(S1)` with `acc(S2)` agree
    /// exactly for count/min/max and within float tolerance for the moments,
    /// which is what makes chunked fan-out/fan-in ingestion possible.
    pub fn merge(&mut self, other: &Self) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}
